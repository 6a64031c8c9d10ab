//! Embedded watch configuration
//!
//! `watch_config()` is generated by build.rs from motionplus.toml, which is
//! validated on the host before the firmware is compiled.

use motionplus_core::config::{ClockConfig, DisplayConfig, SamplingConfig, WatchConfig};

include!(concat!(env!("OUT_DIR"), "/watch_config.rs"));
