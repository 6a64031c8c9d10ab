//! Board-agnostic core logic for the daily motion display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor and label sink traits (pedometer, altimeter, display labels)
//! - Daily tracking window with midnight rollover
//! - Fixed-precision rounding for displayed values
//! - The dashboard that turns sensor updates into label text
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

// mockall expansions refer to `::std`
#[cfg(test)]
extern crate std;

pub mod config;
pub mod dashboard;
pub mod precision;
pub mod text;
pub mod traits;
pub mod window;

pub use dashboard::{
    AltimeterOutcome, AwakeReport, MotionDashboard, PedometerOutcome, PedometerPhase,
    SubscriptionState,
};
pub use precision::round_to;
pub use traits::{LabelId, LabelSink};
pub use window::TrackingWindow;
