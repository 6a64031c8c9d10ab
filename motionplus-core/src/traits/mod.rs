//! Sensor and display abstraction traits
//!
//! These traits define the interface between the dashboard logic and the
//! platform: the pedometer and altimeter drivers that feed it, and the
//! label sink it writes to.

pub mod altimeter;
pub mod labels;
pub mod pedometer;
pub mod sensor;

pub use altimeter::{AltimeterReading, AltimeterSource, AltimeterUpdate, Authorization};
pub use labels::{LabelId, LabelSink};
pub use pedometer::{PedometerReading, PedometerSource, PedometerUpdate};
pub use sensor::{SensorError, SensorErrorKind, MAX_ERROR_MESSAGE_LEN};
