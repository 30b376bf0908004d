//! Resolved configuration with layer provenance
//!
//! `ResolvedConfig` captures the merged tree plus which layers contributed
//! to it. It is built exactly once at process start and handed read-only to
//! every collaborator (relay listener, session logger, access policy).

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::defaults::BuiltinDefaults;
use super::merge::merge_layers;
use super::overrides::{parse_overrides, OverrideMap};
use super::profiles;

/// Origin of a contributing configuration layer.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    Profile,
    Cli,
}

impl ConfigOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigOrigin::Builtin => "builtin",
            ConfigOrigin::Profile => "profile",
            ConfigOrigin::Cli => "cli",
        }
    }
}

impl std::fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A contributing layer, in precedence order (lowest first).
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSource {
    pub origin: ConfigOrigin,

    /// Profile name (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown profile '{name}' (available: {available})")]
    UnknownProfile { name: String, available: String },
}

/// Fully merged configuration tree plus provenance.
///
/// Fields are private: after construction the tree is only reachable by
/// shared borrow, so no collaborator can mutate it.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    resolved_at: DateTime<Utc>,
    config: Value,
    sources: Vec<ConfigSource>,
}

impl ResolvedConfig {
    /// Resolve from raw command-line tokens.
    ///
    /// Layers, highest precedence last: baked-in defaults, then the named
    /// profile if one is selected, then the tokenized overrides.
    pub fn resolve(profile: Option<&str>, args: &[String]) -> Result<Self, ConfigError> {
        Self::resolve_overrides(profile, parse_overrides(args))
    }

    /// Resolve with an already-tokenized override map.
    pub fn resolve_overrides(
        profile: Option<&str>,
        overrides: OverrideMap,
    ) -> Result<Self, ConfigError> {
        let mut layers = Vec::new();
        let mut sources = Vec::new();

        layers.push(BuiltinDefaults::default().to_value());
        sources.push(ConfigSource {
            origin: ConfigOrigin::Builtin,
            profile: None,
        });

        if let Some(name) = profile {
            let tree = profiles::profile_tree(name).ok_or_else(|| ConfigError::UnknownProfile {
                name: name.to_string(),
                available: profiles::PROFILE_NAMES.join(", "),
            })?;
            debug!(profile = name, "profile layer selected");
            layers.push(tree);
            sources.push(ConfigSource {
                origin: ConfigOrigin::Profile,
                profile: Some(name.to_string()),
            });
        }

        if !overrides.is_empty() {
            debug!(count = overrides.len(), "command-line layer applied");
            layers.push(Value::Object(overrides));
            sources.push(ConfigSource {
                origin: ConfigOrigin::Cli,
                profile: None,
            });
        }

        Ok(Self {
            resolved_at: Utc::now(),
            config: merge_layers(layers),
            sources,
        })
    }

    /// When this configuration was resolved.
    pub fn resolved_at(&self) -> DateTime<Utc> {
        self.resolved_at
    }

    /// The merged configuration tree.
    pub fn tree(&self) -> &Value {
        &self.config
    }

    /// Contributing layers in precedence order.
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Get a value by dot-separated path.
    ///
    /// Path segments address nested mappings; a root-level key that itself
    /// contains a dot (a flat command-line key) is not reachable here —
    /// read it from [`tree`](Self::tree) directly.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup_path(&self.config, path)
    }

    /// Get a value as a string slice.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|v| v.as_str())
    }

    /// Get a value as bool.
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(|v| v.as_bool())
    }

    /// Get a value as u64.
    pub fn get_u64(&self, path: &str) -> Option<u64> {
        self.get(path).and_then(|v| v.as_u64())
    }

    /// Get a value as i64.
    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(|v| v.as_i64())
    }

    /// Get a value as f64.
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(|v| v.as_f64())
    }

    /// Serialize the record (tree plus provenance) to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Walk a dot-separated path through nested mappings.
pub fn lookup_path<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = tree;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}
