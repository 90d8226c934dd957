//! Environment descriptors.
//!
//! An [`Env`] is an id plus its localized display names. A [`TheoremLikeEnv`]
//! extends that base record with a short prefix and an optional reference to
//! the proof-style environment that follows it in a document.

pub mod data;

use crate::{
    lang::{DEFAULT_LANG, Lang, LangError, assert_lang},
    unicode::eq_lowercase,
};
use smallvec::SmallVec;
use thiserror::Error;

pub use data::{ENV_IDS, EnvId, NON_THEOREM_LIKE_ENV_IDS, THEOREM_LIKE_ENV_IDS};

/// Localized names keyed by language. Two languages fit inline.
pub type PrintedNames = SmallVec<[(Lang, String); 2]>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("unknown environment id `{0}`")]
    UnknownId(String),

    #[error("`{0}` is not a theorem-like environment")]
    NotTheoremLike(EnvId),

    #[error("Invalid theorem.type = {0}")]
    InvalidKey(String),

    #[error(transparent)]
    Lang(#[from] LangError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    id: EnvId,
    printed_names: PrintedNames,
}

impl Env {
    /// Build a descriptor, registering every `(language code, name)` pair.
    ///
    /// All codes are checked before anything is stored. A repeated code keeps
    /// the last name given for it.
    pub fn new<'a, I>(id: EnvId, names: I) -> Result<Self, LangError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut env = Self {
            id,
            printed_names: PrintedNames::new(),
        };
        env.name(names)?;
        Ok(env)
    }

    fn name<'a, I>(&mut self, pairs: I) -> Result<(), LangError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let checked = pairs
            .into_iter()
            .map(|(code, text)| assert_lang(code).map(|lang| (lang, text)))
            .collect::<Result<SmallVec<[(Lang, &str); 2]>, LangError>>()?;

        for (lang, text) in checked {
            match self.printed_names.iter_mut().find(|(l, _)| *l == lang) {
                Some((_, slot)) => *slot = text.to_owned(),
                None => self.printed_names.push((lang, text.to_owned())),
            }
        }
        Ok(())
    }

    #[inline]
    pub fn id(&self) -> EnvId {
        self.id
    }

    #[inline]
    pub fn printed_name(&self, lang: Lang) -> Option<&str> {
        self.printed_names
            .iter()
            .find(|(l, _)| *l == lang)
            .map(|(_, name)| name.as_str())
    }

    /// Name in [`DEFAULT_LANG`], falling back to the first registered name.
    #[inline]
    pub fn default_name(&self) -> Option<&str> {
        self.printed_name(DEFAULT_LANG)
            .or_else(|| self.printed_names.first().map(|(_, name)| name.as_str()))
    }

    #[inline]
    pub fn printed_names(&self) -> impl Iterator<Item = (Lang, &str)> {
        self.printed_names
            .iter()
            .map(|(lang, name)| (*lang, name.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheoremLikeEnv {
    env: Env,
    prefix: &'static str,
    proof_env: Option<&'static Env>,
}

impl TheoremLikeEnv {
    /// `prefix` and `proof_env` are stored as given; only `id` and the
    /// language codes are checked.
    pub fn new<'a, I>(
        id: EnvId,
        names: I,
        prefix: &'static str,
        proof_env: Option<&'static Env>,
    ) -> Result<Self, EnvError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        if !id.is_theorem_like() {
            return Err(EnvError::NotTheoremLike(id));
        }
        Ok(Self {
            env: Env::new(id, names)?,
            prefix,
            proof_env,
        })
    }

    #[inline]
    pub fn env(&self) -> &Env {
        &self.env
    }

    #[inline]
    pub fn id(&self) -> EnvId {
        self.env.id
    }

    #[inline]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub fn proof_env(&self) -> Option<&'static Env> {
        self.proof_env
    }

    #[inline]
    pub fn printed_name(&self, lang: Lang) -> Option<&str> {
        self.env.printed_name(lang)
    }

    #[inline]
    pub fn default_name(&self) -> Option<&str> {
        self.env.default_name()
    }

    #[inline]
    pub fn printed_names(&self) -> impl Iterator<Item = (Lang, &str)> {
        self.env.printed_names()
    }

    /// Case-insensitive equality against the id, the prefix or any printed name.
    pub fn matches(&self, key: &str) -> bool {
        eq_lowercase(key, self.id().as_str())
            || eq_lowercase(key, self.prefix)
            || self
                .env
                .printed_names
                .iter()
                .any(|(_, name)| eq_lowercase(key, name))
    }
}
