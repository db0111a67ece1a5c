//! Property-based tests for path resolution and config merging.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::component::Component;
    use crate::config::ComponentConfig;
    use crate::path::{join_logical, relative_path_to};
    use proptest::prelude::*;
    use serde_json::{json, Map, Value};

    fn declaration(name: &str, source: &str, method: &str) -> Component {
        Component {
            name: name.to_string(),
            source: source.to_string(),
            method: method.to_string(),
            ..Default::default()
        }
    }

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::from),
        ]
    }

    fn json_value() -> BoxedStrategy<Value> {
        scalar()
            .prop_recursive(3, 24, 4, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
                    prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                        .prop_map(|m| Value::Object(m.into_iter().collect())),
                ]
            })
            .boxed()
    }

    fn component_config() -> impl Strategy<Value = ComponentConfig> {
        let own = prop::collection::btree_map("[a-z]{1,4}", json_value(), 0..4)
            .prop_map(|m| m.into_iter().collect::<Map<String, Value>>());
        let child = own.clone().prop_map(|config| ComponentConfig {
            config,
            ..Default::default()
        });
        (own, prop::collection::btree_map("[a-z]{1,4}", child, 0..3)).prop_map(
            |(config, subcomponents)| ComponentConfig {
                config,
                subcomponents,
            },
        )
    }

    // ============================================================================
    // relative_path_to property tests
    // ============================================================================

    proptest! {
        /// Property: git components always land under components/<name>
        #[test]
        fn git_components_land_under_components(name in "[a-z][a-z0-9-]{0,12}", source in ".*") {
            let result = relative_path_to(&declaration(&name, &source, "git"));
            prop_assert_eq!(result, format!("components/{}", name));
        }

        /// Property: non-git sourced components live directly under the parent
        #[test]
        fn sourced_components_use_their_name(
            name in "[a-z][a-z0-9-]{0,12}",
            source in ".+",
            method in "[a-z]{0,6}".prop_filter("not git", |m| m != "git"),
        ) {
            let result = relative_path_to(&declaration(&name, &source, &method));
            prop_assert_eq!(result, name);
        }

        /// Property: inline components share their parent's directory
        #[test]
        fn inline_components_resolve_to_current_dir(
            name in ".*",
            method in "[a-z]{0,6}".prop_filter("not git", |m| m != "git"),
        ) {
            prop_assert_eq!(relative_path_to(&declaration(&name, "", &method)), "./");
        }

        /// Property: relative_path_to is deterministic
        #[test]
        fn relative_path_is_deterministic(name in ".*", source in ".*", method in ".*") {
            let component = declaration(&name, &source, &method);
            prop_assert_eq!(relative_path_to(&component), relative_path_to(&component));
        }

        /// Property: a child of the root has its bare name as logical path
        #[test]
        fn root_children_have_bare_logical_paths(name in "[a-z][a-z0-9-]{0,12}") {
            prop_assert_eq!(join_logical("./", &name), name);
        }
    }

    // ============================================================================
    // ComponentConfig::merge property tests
    // ============================================================================

    proptest! {
        /// Property: merging the empty config changes nothing
        #[test]
        fn merge_empty_overlay_is_identity(config in component_config()) {
            let mut merged = config.clone();
            merged.merge(&ComponentConfig::default());
            prop_assert_eq!(merged, config);
        }

        /// Property: merging into the empty config yields the overlay
        #[test]
        fn merge_into_empty_is_identity(config in component_config()) {
            let mut merged = ComponentConfig::default();
            merged.merge(&config);
            prop_assert_eq!(merged, config);
        }

        /// Property: merging a config into itself changes nothing
        #[test]
        fn merge_is_idempotent(config in component_config()) {
            let mut merged = config.clone();
            merged.merge(&config);
            prop_assert_eq!(merged, config);
        }

        /// Property: non-null values in the receiver always survive
        #[test]
        fn merge_keeps_receiver_values(
            receiver in component_config(),
            overlay in component_config(),
        ) {
            let mut merged = receiver.clone();
            merged.merge(&overlay);
            for (key, value) in &receiver.config {
                if !value.is_null() && !value.is_object() {
                    prop_assert_eq!(merged.config.get(key), Some(value));
                }
            }
            prop_assert!(merged.config.len() >= receiver.config.len());
        }
    }

    #[test]
    fn merge_precedence_scenario() {
        let mut config: ComponentConfig =
            serde_json::from_value(json!({"Config": {"port": 80}})).unwrap();
        let common: ComponentConfig =
            serde_json::from_value(json!({"Config": {"port": 8080, "debug": false}})).unwrap();
        config.merge(&common);
        assert_eq!(config.get("port"), Some(&json!(80)));
        assert_eq!(config.get("debug"), Some(&json!(false)));
    }
}
