//! MITM honeypot configuration resolution
//!
//! This crate resolves the runtime configuration for a per-instance SSH
//! MITM honeypot by layering three sources of truth, highest precedence
//! last: baked-in defaults, an optional named per-instance profile, and
//! command-line overrides. The merged tree is handed read-only to the
//! collaborators that consume it (relay listener, session logger, access
//! policy).

pub mod config;

pub use config::{
    deep_merge, merge_layers, parse_overrides, BuiltinDefaults, ConfigError, ConfigOrigin,
    ConfigSource, OverrideMap, ResolvedConfig,
};
