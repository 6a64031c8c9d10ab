//! Pedometer implementations

pub mod lsm6ds3trc;

pub use lsm6ds3trc::Lsm6ds3trcPedometer;
