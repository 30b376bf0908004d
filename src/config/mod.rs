//! Configuration resolution
//!
//! Implements the three-layer resolution:
//! 1. Baked-in defaults
//! 2. Optional named per-instance profile
//! 3. Command-line overrides (highest precedence)

mod defaults;
mod merge;
mod overrides;
mod profiles;
mod resolved;

pub use defaults::{
    AutoAccessDefaults, BarrierDefaults, BuiltinDefaults, ContainerDefaults, FixedBarrierDefaults,
    LoggingDefaults, MountPathDefaults, NormalDistDefaults, ServerDefaults,
};
pub use merge::{deep_merge, merge_layers};
pub use overrides::{parse_overrides, OverrideMap};
pub use profiles::{profile_tree, PROFILE_NAMES};
pub use resolved::{lookup_path, ConfigError, ConfigOrigin, ConfigSource, ResolvedConfig};
