//! The fixed set of environments and the key resolver.
//!
//! Everything here is built once, on first access, from the literal tables in
//! [`crate::env::data`] and is read-only afterwards. Some renderers cannot
//! typeset every kind (axiom, claim and assumption are common gaps); the
//! registry still carries them and leaves that decision to the renderer.

use crate::{
    env::{
        Env, EnvError, EnvId, TheoremLikeEnv,
        data::{STANDALONE_TABLE, StandaloneSpec, THEOREM_LIKE_TABLE, TheoremLikeSpec},
    },
    lang::LangError,
};
use smallvec::SmallVec;
use std::{
    collections::{HashMap, hash_map::Entry},
    sync::LazyLock,
};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("invalid environment names: {0}")]
    Lang(#[from] LangError),

    #[error("invalid environment: {0}")]
    Env(EnvError),

    #[error("`{env}` refers to `{proof}`, which is not a standalone environment")]
    UnknownProofEnv { env: EnvId, proof: EnvId },

    #[error("environment `{0}` is declared twice")]
    DuplicateId(EnvId),
}

impl From<EnvError> for RegistryError {
    /// Language failures surface as [`RegistryError::Lang`] whichever table they come from.
    fn from(err: EnvError) -> Self {
        match err {
            EnvError::Lang(err) => Self::Lang(err),
            other => Self::Env(other),
        }
    }
}

static STANDALONE: LazyLock<Vec<Env>> = LazyLock::new(|| {
    build_standalone().expect("standalone environment table is invalid – this is a bug")
});

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::build(&STANDALONE).expect("theorem-like environment table is invalid – this is a bug")
});

/// Build the proof-style descriptors (`proof`, `solution`) from their table.
pub fn build_standalone() -> Result<Vec<Env>, RegistryError> {
    standalone_from_specs(STANDALONE_TABLE)
}

pub(crate) fn standalone_from_specs(specs: &[StandaloneSpec]) -> Result<Vec<Env>, RegistryError> {
    let mut seen = SeenIds::default();
    specs
        .iter()
        .map(|spec| -> Result<Env, RegistryError> {
            seen.insert(spec.id)?;
            Ok(Env::new(spec.id, spec.names.iter().copied())?)
        })
        .collect()
}

/// Ordered theorem-like descriptors plus an id index over them.
#[derive(Debug)]
pub struct Registry {
    envs: Vec<TheoremLikeEnv>,
    by_id: HashMap<EnvId, usize>,
}

impl Registry {
    /// Build from the literal theorem-like table. `proof_env` references are
    /// resolved against `standalone`.
    pub fn build(standalone: &'static [Env]) -> Result<Self, RegistryError> {
        Self::from_specs(THEOREM_LIKE_TABLE, standalone)
    }

    pub(crate) fn from_specs(
        specs: &[TheoremLikeSpec],
        standalone: &'static [Env],
    ) -> Result<Self, RegistryError> {
        let mut envs = Vec::with_capacity(specs.len());
        let mut by_id = HashMap::with_capacity(specs.len());

        for spec in specs {
            let proof_env = match spec.proof_env {
                Some(proof) => Some(
                    standalone
                        .iter()
                        .find(|env| env.id() == proof)
                        .ok_or(RegistryError::UnknownProofEnv {
                            env: spec.id,
                            proof,
                        })?,
                ),
                None => None,
            };

            match by_id.entry(spec.id) {
                Entry::Occupied(_) => return Err(RegistryError::DuplicateId(spec.id)),
                Entry::Vacant(slot) => {
                    slot.insert(envs.len());
                }
            }

            envs.push(TheoremLikeEnv::new(
                spec.id,
                spec.names.iter().copied(),
                spec.prefix,
                proof_env,
            )?);
        }

        debug!(
            theorem_like = envs.len(),
            standalone = standalone.len(),
            "environment registry built"
        );
        Ok(Self { envs, by_id })
    }

    /// All descriptors in declaration order.
    #[inline]
    pub fn envs(&self) -> &[TheoremLikeEnv] {
        &self.envs
    }

    #[inline]
    pub fn get(&self, id: EnvId) -> Option<&TheoremLikeEnv> {
        self.by_id.get(&id).map(|&i| &self.envs[i])
    }

    /// Id-keyed view of [`Registry::envs`], read straight from the index.
    pub fn envs_map(&self) -> impl Iterator<Item = (EnvId, &TheoremLikeEnv)> {
        self.by_id.iter().map(|(&id, &i)| (id, &self.envs[i]))
    }

    /// First descriptor, in declaration order, that matches `key`.
    pub fn resolve(&self, key: &str) -> Result<&TheoremLikeEnv, EnvError> {
        match self.envs.iter().find(|env| env.matches(key)) {
            Some(env) => {
                trace!(key, id = %env.id(), "resolved environment key");
                Ok(env)
            }
            None => {
                debug!(key, "no environment matches key");
                Err(EnvError::InvalidKey(key.to_owned()))
            }
        }
    }
}

/// Tracks ids already seen while building the standalone table.
#[derive(Default)]
struct SeenIds(SmallVec<[EnvId; 2]>);

impl SeenIds {
    fn insert(&mut self, id: EnvId) -> Result<(), RegistryError> {
        if self.0.contains(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        self.0.push(id);
        Ok(())
    }
}

#[inline]
pub fn registry() -> &'static Registry {
    &REGISTRY
}

#[inline]
pub fn envs() -> &'static [TheoremLikeEnv] {
    REGISTRY.envs()
}

#[inline]
pub fn get_env(id: EnvId) -> Option<&'static TheoremLikeEnv> {
    REGISTRY.get(id)
}

#[inline]
pub fn standalone_envs() -> &'static [Env] {
    &STANDALONE
}

#[inline]
pub fn standalone(id: EnvId) -> Option<&'static Env> {
    STANDALONE.iter().find(|env| env.id() == id)
}

pub fn proof() -> &'static Env {
    standalone(EnvId::Proof).expect("`proof` missing from standalone table – this is a bug")
}

pub fn solution() -> &'static Env {
    standalone(EnvId::Solution).expect("`solution` missing from standalone table – this is a bug")
}

/// Resolve a free-form key (id, prefix or localized name, any case) to its
/// theorem-like environment.
///
/// ```
/// let thm = thmenv::get_theorem_like_env("Thm").unwrap();
/// assert_eq!(thm.id().as_str(), "theorem");
/// assert!(thmenv::get_theorem_like_env("証明").is_err());
/// ```
#[inline]
pub fn get_theorem_like_env(key: &str) -> Result<&'static TheoremLikeEnv, EnvError> {
    REGISTRY.resolve(key)
}
