//! Case-insensitive comparison used by environment key matching.

/// `true` when `a` and `b` are equal after simple lowercase mapping.
///
/// Each side is lowered char by char, so no allocation happens and the
/// comparison is exact otherwise: no trimming, no normalization, no
/// prefix matching. ASCII-only pairs take the `eq_ignore_ascii_case` path.
///
/// Lowering is context-free: a word-final `Σ` becomes `σ`, not the `ς` that
/// `str::to_lowercase` produces.
#[inline]
pub fn eq_lowercase(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
