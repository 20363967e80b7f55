//! Settings loaded from TOML and the environment.

#[cfg(feature = "conf")]
pub use datacat_conf::*;
