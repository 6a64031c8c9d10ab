//! Inter-task communication channels
//!
//! The motion task owns the dashboard and writes label text into its own
//! `Screen`. Finished screens are copied into `SCREEN_BUFFER` and announced
//! on `SCREEN_UPDATE` for the display task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use motionplus_display::Screen;

/// Latest screen published by the motion task
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());

/// Signal that a screen update is ready to be drawn
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Copy `screen` out to the display task if it changed
pub async fn publish(screen: &mut Screen) {
    if !screen.is_dirty() {
        return;
    }

    SCREEN_BUFFER.lock().await.clone_from(screen);
    screen.mark_clean();
    SCREEN_UPDATE.signal(());
}
