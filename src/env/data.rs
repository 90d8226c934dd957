use crate::env::EnvError;

use phf::{Map, phf_map};
use std::{fmt, str::FromStr};

/// Literal row of the theorem-like table, turned into a descriptor by the registry.
#[derive(Debug, Clone, Copy)]
pub struct TheoremLikeSpec {
    pub id: EnvId,
    pub prefix: &'static str,
    pub names: &'static [(&'static str, &'static str)],
    pub proof_env: Option<EnvId>,
}

/// Literal row of a standalone (proof-style) environment.
#[derive(Debug, Clone, Copy)]
pub struct StandaloneSpec {
    pub id: EnvId,
    pub names: &'static [(&'static str, &'static str)],
}

/// ---------------------------------------------------------------------------
///    Macro – generates ids, id lists and literal rows from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_environments {
    (@proof) => { None };
    (@proof $proof:ident) => { Some(EnvId::$proof) };

    (
        theorem_like: [ $(
            $tid:ident, $tid_str:literal, $prefix:literal,
            { $( $tlang:ident: $tname:literal ),* $(,)? }
            $(, proof: $proof:ident)? ;
        )* ]
        non_theorem_like: [ $(
            $nid:ident, $nid_str:literal,
            { $( $nlang:ident: $nname:literal ),* $(,)? } ;
        )* ]
    ) => {
        /// Canonical identifier of every environment kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EnvId {
            $( $tid, )*
            $( $nid, )*
        }

        impl EnvId {
            #[inline]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$tid => $tid_str, )*
                    $( Self::$nid => $nid_str, )*
                }
            }

            /// Theorem-like kinds state a claim; the rest justify one.
            #[inline]
            pub const fn is_theorem_like(self) -> bool {
                matches!(self, $( Self::$tid )|*)
            }
        }

        pub const THEOREM_LIKE_ENV_IDS: &[EnvId] = &[ $( EnvId::$tid, )* ];
        pub const NON_THEOREM_LIKE_ENV_IDS: &[EnvId] = &[ $( EnvId::$nid, )* ];
        pub const ENV_IDS: &[EnvId] = &[ $( EnvId::$tid, )* $( EnvId::$nid, )* ];

        pub static ENV_ID_TABLE: Map<&'static str, EnvId> = phf_map! {
            $( $tid_str => EnvId::$tid, )*
            $( $nid_str => EnvId::$nid, )*
        };

        pub static THEOREM_LIKE_TABLE: &[TheoremLikeSpec] = &[ $(
            TheoremLikeSpec {
                id: EnvId::$tid,
                prefix: $prefix,
                names: &[ $( (stringify!($tlang), $tname) ),* ],
                proof_env: define_environments!(@proof $($proof)?),
            },
        )* ];

        pub static STANDALONE_TABLE: &[StandaloneSpec] = &[ $(
            StandaloneSpec {
                id: EnvId::$nid,
                names: &[ $( (stringify!($nlang), $nname) ),* ],
            },
        )* ];
    };
}

// ---------------------------------------------------------------------------
//    Environment definitions (single source of truth)
//    Row order is lookup order: the first matching row wins.
// ---------------------------------------------------------------------------
define_environments! {
    theorem_like: [
        Axiom, "axiom", "axm",
            { ja: "公理", en: "Axiom" };
        Definition, "definition", "def",
            { ja: "定義", en: "Definition" };
        Lemma, "lemma", "lem",
            { ja: "補題", en: "Lemma" }, proof: Proof;
        Proposition, "proposition", "prop",
            { ja: "命題", en: "Proposition" }, proof: Proof;
        Theorem, "theorem", "thm",
            { ja: "定理", en: "Theorem" }, proof: Proof;
        Corollary, "corollary", "cor",
            { ja: "系", en: "Corollary" }, proof: Proof;
        Claim, "claim", "clm",
            { ja: "主張", en: "Claim" }, proof: Proof;
        Assumption, "assumption", "ass",
            { ja: "仮定", en: "Assumption" };
        Example, "example", "exm",
            { ja: "例", en: "Example" }, proof: Proof;
        Exercise, "exercise", "exr",
            { ja: "演習問題", en: "Exercise" }, proof: Solution;
        Conjecture, "conjecture", "cnj",
            { ja: "予想", en: "Conjecture" };
        Hypothesis, "hypothesis", "hyp",
            { ja: "仮説", en: "Hypothesis" };
        Remark, "remark", "rmk",
            { ja: "注", en: "Remark" };
    ]
    non_theorem_like: [
        Proof, "proof",
            { ja: "証明", en: "Proof" };
        Solution, "solution",
            { ja: "解答", en: "Solution" };
    ]
}

impl fmt::Display for EnvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvId {
    type Err = EnvError;

    /// Exact canonical id only. Free-form keys go through the registry resolver.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ENV_ID_TABLE
            .get(s)
            .copied()
            .ok_or_else(|| EnvError::UnknownId(s.to_owned()))
    }
}
