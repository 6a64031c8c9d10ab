//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in motionplus-core and motionplus-display for the watch hardware:
//!
//! - Pedometer (LSM6DS3TR-C embedded step counter)
//! - Altimeter (LPS22HB barometer)
//! - Panel (SH1106 128x64 OLED)
//!
//! All three sit on I2C and are driven through `embedded-hal-async`.
//! Subscription control (`start_updates`/`stop_updates`) only changes
//! driver state; bus traffic happens in the async `poll` and `flush`
//! methods the firmware calls from its tasks.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod altimeter;
mod bus;
pub mod display;
pub mod pedometer;

#[cfg(test)]
mod testing;

pub use altimeter::Lps22hbAltimeter;
pub use display::Sh1106;
pub use pedometer::Lsm6ds3trcPedometer;
