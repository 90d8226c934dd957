use crate::lang::Lang;

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($( $code:ident, $code_str:literal, $name:literal ),* $(,)?) => {
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        pub static LANG_TABLE: Map<&'static str, Lang> = phf_map! {
            $( $code_str => $code, )*
        };

        static ALL_LANGS: &[Lang] = &[ $( $code ),* ];

        /// Every supported language, in declaration order.
        #[inline]
        pub fn all_langs() -> &'static [Lang] {
            ALL_LANGS
        }

        /// Exact lookup of a language code.
        #[inline]
        pub fn from_code(code: &str) -> Option<Lang> {
            LANG_TABLE.get(code).copied()
        }
    };
}

// ---------------------------------------------------------------------------
//    Supported display languages (single source of truth)
// ---------------------------------------------------------------------------
define_languages! {
    JA, "ja", "Japanese",
    EN, "en", "English",
}
