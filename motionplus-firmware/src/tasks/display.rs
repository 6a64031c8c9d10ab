//! Display task
//!
//! Draws published screens on the SH1106 panel.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use motionplus_display::render;
use motionplus_drivers::Sh1106;

use crate::channels::{SCREEN_BUFFER, SCREEN_UPDATE};

pub type Panel = Sh1106<I2c<'static, I2C1, Async>>;

/// Display task - waits for screen updates and flushes them to the panel
#[embassy_executor::task]
pub async fn display_task(mut panel: Panel) {
    info!("Display task started");

    if let Err(e) = panel.init().await {
        error!("Failed to initialize display: {:?}", e);
        return;
    }
    info!("OLED initialized");

    loop {
        SCREEN_UPDATE.wait().await;

        let screen = SCREEN_BUFFER.lock().await.clone();
        if let Err(e) = render(&screen, &mut panel) {
            warn!("Failed to render screen: {:?}", e);
            continue;
        }

        if let Err(e) = panel.flush().await {
            warn!("Failed to flush display: {:?}", e);
        } else {
            trace!("Screen update drawn");
        }
    }
}
