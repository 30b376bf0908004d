//! Compiled-in per-instance profiles
//!
//! One alternative baseline tree per deployed honeypot. A profile amends
//! the baked-in defaults with the instance identity (container address and
//! name, listen port, banner file) and its barrier tuning, so every profile
//! tree is structurally complete and can stand in as the base on its own.

use serde_json::Value;

use super::defaults::BuiltinDefaults;

/// Names of the compiled-in profiles, in deployment order.
pub const PROFILE_NAMES: &[&str] = &["pot1", "pot2", "pot3", "pot4"];

/// Look up a compiled-in profile tree by name.
pub fn profile_tree(name: &str) -> Option<Value> {
    match name {
        "pot1" => Some(pot(1)),
        "pot2" => Some(pot(2)),
        "pot3" => Some(pot(3)),
        "pot4" => Some(pot(4)),
        _ => None,
    }
}

// Pots share the deployment's addressing scheme: containers sit on
// 172.20.0.3.. in pot order, listeners on 6010.., and every pot accepts a
// single fixed-barrier attempt instead of the default three.
fn pot(index: u8) -> Value {
    let mut profile = BuiltinDefaults::default();
    profile.container.ip_address = format!("172.20.0.{}", index + 2);
    profile.container.name = format!("pot{index}");
    profile.server.listen_port = 6009 + u16::from(index);
    profile.server.banner_file =
        format!("/home/aces/HACS200_Honeypot/recycling/config/pot{index}.txt");
    profile.auto_access.barrier.fixed.attempts = 1;
    profile.to_value()
}
