//! Deep merge over configuration trees
//!
//! Merge semantics:
//! - Nested mappings: deep-merge by key (recursive)
//! - Sequences: REPLACE (override wins entirely, never element-wise)
//! - Scalars: override wins, including a scalar replacing a whole subtree

use serde_json::Value;

/// Deep merge two configuration values, override wins.
///
/// A nested mapping in the override merges key-wise into the base entry when
/// that entry is itself a mapping; in every other case (scalar, sequence, or
/// a mapping landing on a non-mapping) the override value replaces the base
/// entry wholesale. Key order of the base is preserved; override-only keys
/// append in override order.
pub fn deep_merge(base: Value, override_value: Value) -> Value {
    match (base, override_value) {
        (Value::Object(mut base_map), Value::Object(override_map)) => {
            for (key, value) in override_map {
                let merged = match base_map.get(&key) {
                    Some(existing) => deep_merge(existing.clone(), value),
                    None => value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }

        // Scalars and sequences replace; a mapping over a non-mapping wins
        // as-is, which is the same as merging it against an empty mapping.
        (_, override_value) => override_value,
    }
}

/// Merge layers in order: first is the base, last has highest precedence.
pub fn merge_layers<I>(layers: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    layers.into_iter().fold(Value::Null, deep_merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn test_empty_override_is_identity() {
        let base = json!({
            "local": false,
            "server": {"listenIP": "0.0.0.0", "listenPort": 10000}
        });
        let merged = deep_merge(base.clone(), Value::Object(Map::new()));
        assert_eq!(merged, base);
    }

    #[test]
    fn test_scalar_override() {
        let base = json!({"debug": true});
        let merged = deep_merge(base, json!({"debug": false}));
        assert_eq!(merged["debug"], false);
    }

    #[test]
    fn test_nested_override_preserves_siblings() {
        let base = json!({
            "server": {
                "listenPort": 10000,
                "identifier": "SSH-2.0-OpenSSH_6.6.1p1 Ubuntu-2ubuntu2"
            }
        });
        let merged = deep_merge(base, json!({"server": {"listenPort": 6013}}));

        assert_eq!(merged["server"]["listenPort"], 6013);
        assert_eq!(
            merged["server"]["identifier"],
            "SSH-2.0-OpenSSH_6.6.1p1 Ubuntu-2ubuntu2"
        );
    }

    #[test]
    fn test_deep_override_touches_only_its_path() {
        let base = json!({
            "autoAccess": {
                "enabled": true,
                "barrier": {
                    "normalDist": {"enabled": false, "mean": 6.0},
                    "fixed": {"enabled": true, "upperLimit": true, "attempts": 3}
                }
            }
        });
        let merged = deep_merge(
            base,
            json!({"autoAccess": {"barrier": {"fixed": {"attempts": 1}}}}),
        );

        assert_eq!(merged["autoAccess"]["barrier"]["fixed"]["attempts"], 1);
        assert_eq!(merged["autoAccess"]["barrier"]["fixed"]["upperLimit"], true);
        assert_eq!(merged["autoAccess"]["barrier"]["fixed"]["enabled"], true);
        assert_eq!(
            merged["autoAccess"]["barrier"]["normalDist"],
            json!({"enabled": false, "mean": 6.0})
        );
        assert_eq!(merged["autoAccess"]["enabled"], true);
    }

    #[test]
    fn test_scalar_replaces_whole_subtree() {
        let base = json!({"server": {"listenPort": 10000}});
        let merged = deep_merge(base, json!({"server": "oops"}));
        assert_eq!(merged["server"], "oops");
    }

    #[test]
    fn test_mapping_replaces_scalar() {
        let base = json!({"server": "oops"});
        let merged = deep_merge(base, json!({"server": {"listenPort": 6013}}));
        assert_eq!(merged["server"], json!({"listenPort": 6013}));
    }

    #[test]
    fn test_sequence_replaces_wholesale() {
        let base = json!({"tags": ["a", "b", "c"]});
        let merged = deep_merge(base, json!({"tags": ["x"]}));
        assert_eq!(merged["tags"], json!(["x"]));
    }

    #[test]
    fn test_unknown_key_lands_as_sibling() {
        let base = json!({"debug": true});
        let merged = deep_merge(base, json!({"server.listenPort": 6013}));

        assert_eq!(merged["debug"], true);
        assert_eq!(merged["server.listenPort"], 6013);
    }

    #[test]
    fn test_merge_layers_precedence() {
        let defaults = json!({
            "debug": true,
            "server": {"listenPort": 10000, "listenIP": "0.0.0.0"}
        });
        let profile = json!({"server": {"listenPort": 6013}});
        let cli = json!({"debug": false});

        let merged = merge_layers([defaults, profile, cli]);

        assert_eq!(merged["debug"], false);
        assert_eq!(merged["server"]["listenPort"], 6013);
        assert_eq!(merged["server"]["listenIP"], "0.0.0.0");
    }

    #[test]
    fn test_base_key_order_preserved() {
        let base = json!({"local": false, "debug": true, "container": {"name": "CT101"}});
        let merged = deep_merge(base, json!({"debug": false, "extra": 1}));

        let keys: Vec<&String> = merged.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["local", "debug", "container", "extra"]);
    }
}
