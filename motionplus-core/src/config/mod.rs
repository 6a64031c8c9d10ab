//! Configuration types
//!
//! Defines the watch configuration structures. The firmware embeds a TOML
//! file that is parsed and validated into these types at build time.

pub mod types;

pub use types::*;
