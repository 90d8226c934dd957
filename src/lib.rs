pub mod env;
pub mod lang;
pub mod registry;
pub mod unicode;

pub use env::{Env, EnvError, EnvId, TheoremLikeEnv};
pub use env::{ENV_IDS, NON_THEOREM_LIKE_ENV_IDS, THEOREM_LIKE_ENV_IDS};
pub use lang::{DEFAULT_LANG, EN, JA, Lang, LangError};
pub use registry::{
    Registry, RegistryError, envs, get_env, get_theorem_like_env, proof, solution,
};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
