pub mod data;

use thiserror::Error;

pub use data::{EN, JA, LANG_TABLE, all_langs, from_code};

/// A display language that environment names can be registered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

pub const DEFAULT_LANG: Lang = EN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LangError {
    #[error("unsupported language code `{0}`")]
    Unsupported(String),
}

/// Resolve `code` to a supported [`Lang`] or fail.
///
/// Codes are matched exactly: `"ja"` is supported, `"JA"` is not.
#[inline]
pub fn assert_lang(code: &str) -> Result<Lang, LangError> {
    from_code(code).ok_or_else(|| LangError::Unsupported(code.to_owned()))
}
