//! Motion task
//!
//! Owns the dashboard and both sensors. Each sensor is polled on its own
//! ticker; updates go through the dashboard, and the resulting screen is
//! published to the display task.

use defmt::*;
use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Ticker};
use motionplus_core::config::WatchConfig;
use motionplus_core::{AltimeterOutcome, MotionDashboard, PedometerOutcome};
use motionplus_display::Screen;
use motionplus_drivers::{Lps22hbAltimeter, Lsm6ds3trcPedometer};

use crate::channels::publish;
use crate::clock::WallClock;

/// Shared I2C0 bus carrying both sensors
pub type SensorBus = I2cDevice<'static, CriticalSectionRawMutex, I2c<'static, I2C0, Async>>;

pub type Pedometer = Lsm6ds3trcPedometer<SensorBus>;
pub type Altimeter = Lps22hbAltimeter<SensorBus>;

/// Motion task - feeds sensor updates into the dashboard
#[embassy_executor::task]
pub async fn motion_task(mut pedometer: Pedometer, mut altimeter: Altimeter, config: WatchConfig) {
    info!("Motion task started");

    let clock = WallClock::new(config.clock.start);

    match pedometer.init().await {
        Ok(()) => info!("Pedometer ready"),
        Err(e) => warn!("Pedometer unavailable: {}", e),
    }
    match altimeter.init().await {
        Ok(()) => info!("Altimeter ready"),
        Err(e) => warn!("Altimeter unavailable: {}", e),
    }

    let mut dashboard = MotionDashboard::new(Screen::new(), config.display);
    let report = dashboard.awake(&mut pedometer, &mut altimeter, clock.now());
    info!("Dashboard awake: {}", report);
    if let Some(window) = dashboard.window() {
        info!("Tracking steps for {}", window);
    }
    publish(dashboard.labels_mut()).await;

    let mut step_ticker = Ticker::every(Duration::from_millis(
        config.sampling.pedometer_interval_ms.into(),
    ));
    let mut altitude_ticker = Ticker::every(Duration::from_millis(
        config.sampling.altimeter_interval_ms.into(),
    ));

    loop {
        match select(step_ticker.next(), altitude_ticker.next()).await {
            Either::First(()) => {
                if let Some(update) = pedometer.poll().await {
                    let outcome = dashboard.on_pedometer_update(&mut pedometer, clock.now(), update);
                    log_pedometer(outcome);
                }
            }
            Either::Second(()) => {
                if let Some(update) = altimeter.poll().await {
                    log_altimeter(dashboard.on_altimeter_update(update));
                }
            }
        }

        publish(dashboard.labels_mut()).await;
    }
}

fn log_pedometer(outcome: PedometerOutcome) {
    match outcome {
        PedometerOutcome::Displayed => trace!("Step counts displayed"),
        PedometerOutcome::Failed(kind) => warn!("Pedometer update failed: {}", kind),
        PedometerOutcome::Rollover(window) => info!("Day rollover, now tracking {}", window),
        PedometerOutcome::Ignored => debug!("Pedometer update ignored"),
    }
}

fn log_altimeter(outcome: AltimeterOutcome) {
    match outcome {
        AltimeterOutcome::Displayed => trace!("Altitude displayed"),
        AltimeterOutcome::Failed(kind) => warn!("Altimeter update failed: {}", kind),
        AltimeterOutcome::Ignored => debug!("Altimeter update ignored"),
    }
}
