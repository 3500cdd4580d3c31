//! Property-based tests for configuration merging and serialization.

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::regime::Regime;
use proptest::prelude::*;

fn regime_strategy() -> impl Strategy<Value = Regime> {
    prop_oneof![Just(Regime::Posix), Just(Regime::Windows)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(regime_strategy()),
        prop::option::of("/[a-z]{1,8}(/[a-z]{1,8}){0,3}"),
    )
        .prop_map(|(regime, working_dir)| Config {
            regime,
            working_dir,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 1000,
        .. ProptestConfig::default()
    })]

    // A Some field in the higher layer always wins
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.regime, high.regime.or(low.regime));
        prop_assert_eq!(merged.working_dir, high.working_dir.or(low.working_dir));
    }

    // Merging an empty layer changes nothing
    #[test]
    fn config_merge_default_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging a config with itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, config);
    }
}
