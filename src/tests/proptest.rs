mod prop_tests {
    use crate::{EnvError, envs, get_theorem_like_env};
    use proptest::prelude::*;

    fn aliases() -> Vec<(usize, String)> {
        envs()
            .iter()
            .enumerate()
            .flat_map(|(i, env)| {
                [env.id().as_str(), env.prefix()]
                    .into_iter()
                    .chain(env.printed_names().map(|(_, name)| name))
                    .map(move |alias| (i, alias.to_owned()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn recase(s: &str, mask: &[bool]) -> String {
        s.chars()
            .zip(mask.iter().cycle())
            .map(|(c, &up)| {
                if up {
                    c.to_uppercase().collect::<String>()
                } else {
                    c.to_string()
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn any_casing_of_an_alias_resolves(
            pick in any::<prop::sample::Index>(),
            mask in prop::collection::vec(any::<bool>(), 1..16),
        ) {
            let aliases = aliases();
            let (i, alias) = &aliases[pick.index(aliases.len())];
            let key = recase(alias, &mask);
            let env = get_theorem_like_env(&key).unwrap();
            prop_assert!(std::ptr::eq(env, &envs()[*i]), "{} -> {}", key, env.id());
        }

        #[test]
        fn resolve_is_idempotent(key in "\\PC{0,12}") {
            let first = get_theorem_like_env(&key).map(|env| env.id());
            let second = get_theorem_like_env(&key).map(|env| env.id());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn non_alias_ascii_fails_with_key(key in "[a-z]{5,12}") {
            let lowered = aliases()
                .into_iter()
                .any(|(_, alias)| alias.to_lowercase() == key);
            prop_assume!(!lowered);
            prop_assert_eq!(
                get_theorem_like_env(&key).unwrap_err(),
                EnvError::InvalidKey(key.clone())
            );
        }
    }
}
