//! Baked-in default configuration tree
//!
//! Hardcoded baseline every deployment starts from. Profiles and
//! command-line overrides are layered on top, so a value only needs to
//! appear here once to be inherited everywhere.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Baked-in default configuration values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinDefaults {
    /// Local/dev-mode toggle (default: false)
    pub local: bool,

    /// Verbose diagnostics (default: true)
    pub debug: bool,

    /// Target container identity
    pub container: ContainerDefaults,

    /// Output directory paths for session and credential capture
    pub logging: LoggingDefaults,

    /// Listener identity
    pub server: ServerDefaults,

    /// Brute-force tolerance heuristic tuning
    pub auto_access: AutoAccessDefaults,
}

/// Target container identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDefaults {
    pub ip_address: String,
    pub name: String,
    pub mount_path: MountPathDefaults,
}

/// Filesystem path components for the container rootfs mount
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountPathDefaults {
    pub prefix: String,
    pub suffix: String,
}

/// Output directory paths
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingDefaults {
    pub stream_output: String,
    pub login_attempts: String,
    pub logins: String,
}

/// Listener identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDefaults {
    /// Per-connection attempt cap (default: 6)
    pub max_attempts_per_connection: u32,
    #[serde(rename = "listenIP")]
    pub listen_ip: String,
    pub listen_port: u16,
    /// SSH version banner presented to attackers
    pub identifier: String,
    /// Pre-auth banner file, empty for none
    pub banner_file: String,
}

/// Brute-force tolerance heuristic tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoAccessDefaults {
    pub enabled: bool,
    pub cache_size: u32,
    pub barrier: BarrierDefaults,
}

/// Acceptance barrier models; exactly one is expected to be enabled
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarrierDefaults {
    pub normal_dist: NormalDistDefaults,
    pub fixed: FixedBarrierDefaults,
}

/// Probabilistic acceptance model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalDistDefaults {
    pub enabled: bool,
    pub mean: f64,
    pub standard_deviation: f64,
}

/// Deterministic acceptance model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedBarrierDefaults {
    pub enabled: bool,
    pub upper_limit: bool,
    pub attempts: u32,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            local: false,
            debug: true,
            container: ContainerDefaults {
                ip_address: "172.20.0.2".to_string(),
                name: "CT101".to_string(),
                mount_path: MountPathDefaults {
                    prefix: "/var/snap/lxd/common/mntns/var/snap/lxd/common/lxd/storage-pools/default/containers/".to_string(),
                    suffix: "rootfs".to_string(),
                },
            },
            logging: LoggingDefaults {
                stream_output: "/root/MITM_data/sessions".to_string(),
                login_attempts: "/root/MITM_data/login_attempts".to_string(),
                logins: "/root/MITM_data/logins".to_string(),
            },
            server: ServerDefaults {
                max_attempts_per_connection: 6,
                listen_ip: "0.0.0.0".to_string(),
                listen_port: 10000,
                identifier: "SSH-2.0-OpenSSH_6.6.1p1 Ubuntu-2ubuntu2".to_string(),
                banner_file: String::new(),
            },
            auto_access: AutoAccessDefaults {
                enabled: true,
                cache_size: 5000,
                barrier: BarrierDefaults {
                    normal_dist: NormalDistDefaults {
                        enabled: false,
                        mean: 6.0,
                        standard_deviation: 1.0,
                    },
                    fixed: FixedBarrierDefaults {
                        enabled: true,
                        upper_limit: true,
                        attempts: 3,
                    },
                },
            },
        }
    }
}

impl BuiltinDefaults {
    /// Render as the nested tree the resolver merges and collaborators read.
    pub fn to_value(&self) -> Value {
        json!({
            "local": self.local,
            "debug": self.debug,
            "container": {
                "ipAddress": self.container.ip_address,
                "name": self.container.name,
                "mountPath": {
                    "prefix": self.container.mount_path.prefix,
                    "suffix": self.container.mount_path.suffix,
                },
            },
            "logging": {
                "streamOutput": self.logging.stream_output,
                "loginAttempts": self.logging.login_attempts,
                "logins": self.logging.logins,
            },
            "server": {
                "maxAttemptsPerConnection": self.server.max_attempts_per_connection,
                "listenIP": self.server.listen_ip,
                "listenPort": self.server.listen_port,
                "identifier": self.server.identifier,
                "bannerFile": self.server.banner_file,
            },
            "autoAccess": {
                "enabled": self.auto_access.enabled,
                "cacheSize": self.auto_access.cache_size,
                "barrier": {
                    "normalDist": {
                        "enabled": self.auto_access.barrier.normal_dist.enabled,
                        "mean": self.auto_access.barrier.normal_dist.mean,
                        "standardDeviation": self.auto_access.barrier.normal_dist.standard_deviation,
                    },
                    "fixed": {
                        "enabled": self.auto_access.barrier.fixed.enabled,
                        "upperLimit": self.auto_access.barrier.fixed.upper_limit,
                        "attempts": self.auto_access.barrier.fixed.attempts,
                    },
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = BuiltinDefaults::default();
        assert!(!defaults.local);
        assert!(defaults.debug);
        assert_eq!(defaults.container.ip_address, "172.20.0.2");
        assert_eq!(defaults.server.max_attempts_per_connection, 6);
        assert_eq!(defaults.server.listen_port, 10000);
        assert_eq!(defaults.auto_access.cache_size, 5000);
        assert_eq!(defaults.auto_access.barrier.fixed.attempts, 3);
        assert!(!defaults.auto_access.barrier.normal_dist.enabled);
    }

    #[test]
    fn test_to_value() {
        let value = BuiltinDefaults::default().to_value();

        assert_eq!(value["container"]["name"], "CT101");
        assert_eq!(value["container"]["mountPath"]["suffix"], "rootfs");
        assert_eq!(value["logging"]["streamOutput"], "/root/MITM_data/sessions");
        assert_eq!(value["server"]["listenPort"], 10000);
        assert_eq!(value["server"]["bannerFile"], "");
        assert_eq!(value["autoAccess"]["barrier"]["fixed"]["upperLimit"], true);
        assert_eq!(value["autoAccess"]["barrier"]["normalDist"]["mean"], 6.0);
    }

    #[test]
    fn test_tree_key_order_matches_declaration() {
        let value = BuiltinDefaults::default().to_value();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            ["local", "debug", "container", "logging", "server", "autoAccess"]
        );
    }
}
