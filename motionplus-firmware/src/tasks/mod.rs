//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod display;
pub mod motion;

pub use display::display_task;
pub use motion::motion_task;
