//! LPS22HB barometer as a relative altimeter
//!
//! Runs the sensor in continuous mode at 1 Hz with block data update. The
//! first valid sample after a subscription starts becomes the reference
//! pressure; later samples are reported as altitude relative to it.

use embedded_hal_async::i2c::I2c;
use motionplus_core::traits::{
    AltimeterReading, AltimeterSource, AltimeterUpdate, Authorization, SensorError,
    SensorErrorKind,
};

use super::relative_altitude_m;
use crate::bus::{read_register, read_registers, write_register};

/// Default address with SA0 pulled low
pub const DEFAULT_ADDRESS: u8 = 0x5C;

const CHIP_ID: u8 = 0xB1;

mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL_REG1: u8 = 0x10;
    pub const STATUS: u8 = 0x27;
    pub const PRESS_OUT_XL: u8 = 0x28;
}

/// ODR 1 Hz, block data update
const CTRL_REG1_1HZ_BDU: u8 = 0x12;

/// STATUS: new pressure sample available
const STATUS_P_DA: u8 = 1 << 0;

/// Raw counts per hPa
const COUNTS_PER_HPA: f64 = 4096.0;

/// Operating range of the part
const MIN_PRESSURE_HPA: f64 = 260.0;
const MAX_PRESSURE_HPA: f64 = 1260.0;

/// Relative altimeter backed by the LPS22HB
pub struct Lps22hbAltimeter<I2C> {
    i2c: I2C,
    address: u8,
    available: bool,
    subscribed: bool,
    reference_hpa: Option<f64>,
}

impl<I2C> Lps22hbAltimeter<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            available: false,
            subscribed: false,
            reference_hpa: None,
        }
    }

    /// Pressure that altitude is measured against, once known
    pub fn reference_hpa(&self) -> Option<f64> {
        self.reference_hpa
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Lps22hbAltimeter<I2C> {
    /// Probe the chip and start continuous conversion
    pub async fn init(&mut self) -> Result<(), SensorError> {
        self.available = false;

        let id = read_register(&mut self.i2c, self.address, reg::WHO_AM_I).await?;
        if id != CHIP_ID {
            return Err(SensorError::with_message(
                SensorErrorKind::Unavailable,
                "unknown chip id",
            ));
        }

        write_register(&mut self.i2c, self.address, reg::CTRL_REG1, CTRL_REG1_1HZ_BDU).await?;

        self.available = true;
        Ok(())
    }

    /// Fetch a new sample if one is ready
    ///
    /// Returns `None` while unsubscribed or when the sensor has nothing new.
    pub async fn poll(&mut self) -> Option<AltimeterUpdate> {
        if !self.subscribed {
            return None;
        }
        self.read_sample().await.transpose()
    }

    async fn read_sample(&mut self) -> Result<Option<AltimeterReading>, SensorError> {
        let status = read_register(&mut self.i2c, self.address, reg::STATUS).await?;
        if status & STATUS_P_DA == 0 {
            return Ok(None);
        }

        let mut raw = [0u8; 3];
        read_registers(&mut self.i2c, self.address, reg::PRESS_OUT_XL, &mut raw).await?;
        let pressure_hpa = pressure_from_raw(raw);

        if !(MIN_PRESSURE_HPA..=MAX_PRESSURE_HPA).contains(&pressure_hpa) {
            return Err(SensorError::with_message(
                SensorErrorKind::InvalidData,
                "pressure out of range",
            ));
        }

        let reference = *self.reference_hpa.get_or_insert(pressure_hpa);

        Ok(Some(AltimeterReading {
            relative_altitude_m: relative_altitude_m(pressure_hpa, reference),
            pressure_kpa: pressure_hpa / 10.0,
        }))
    }
}

/// Convert the 24-bit two's complement output to hPa
fn pressure_from_raw([xl, l, h]: [u8; 3]) -> f64 {
    let counts = i32::from_le_bytes([0, xl, l, h]) >> 8;
    f64::from(counts) / COUNTS_PER_HPA
}

impl<I2C> AltimeterSource for Lps22hbAltimeter<I2C> {
    fn is_available(&self) -> bool {
        self.available
    }

    fn authorization_status(&self) -> Authorization {
        Authorization::Authorized
    }

    fn start_updates(&mut self) {
        self.subscribed = true;
        self.reference_hpa = None;
    }

    fn stop_updates(&mut self) {
        self.subscribed = false;
    }
}
