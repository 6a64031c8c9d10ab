//! MotionPlus - Daily Motion Display Firmware
//!
//! Main firmware binary for RP2040-based watches. Shows today's steps,
//! floors climbed, relative altitude and air pressure on a small OLED,
//! restarting the step count at local midnight.

#![no_std]
#![no_main]

use defmt::*;
use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, I2C1};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use motionplus_drivers::{altimeter, display, pedometer};
use motionplus_drivers::{Lps22hbAltimeter, Lsm6ds3trcPedometer, Sh1106};

mod channels;
mod clock;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// I2C clock for sensors and panel
const I2C_FREQUENCY_HZ: u32 = 400_000;

// Sensor bus shared by the pedometer and altimeter (must live forever)
static SENSOR_BUS: StaticCell<Mutex<CriticalSectionRawMutex, I2c<'static, I2C0, i2c::Async>>> =
    StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("MotionPlus firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::watch_config();
    info!("Configuration loaded: {}", config);

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;

    // Sensors on I2C0 (GPIO4=SDA, GPIO5=SCL)
    let sensor_i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config.clone());
    let sensor_bus = SENSOR_BUS.init(Mutex::new(sensor_i2c));
    let pedometer = Lsm6ds3trcPedometer::new(
        I2cDevice::new(sensor_bus),
        pedometer::lsm6ds3trc::DEFAULT_ADDRESS,
    );
    let altimeter = Lps22hbAltimeter::new(
        I2cDevice::new(sensor_bus),
        altimeter::lps22hb::DEFAULT_ADDRESS,
    );

    info!("Sensor bus initialized");

    // OLED on I2C1 (GPIO6=SDA, GPIO7=SCL)
    let panel_i2c = I2c::new_async(p.I2C1, p.PIN_7, p.PIN_6, Irqs, i2c_config);
    let panel = Sh1106::new(panel_i2c, display::sh1106::DEFAULT_ADDRESS);

    info!("Display bus initialized");

    spawner.spawn(unwrap!(tasks::display_task(panel)));
    spawner.spawn(unwrap!(tasks::motion_task(pedometer, altimeter, config)));

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
