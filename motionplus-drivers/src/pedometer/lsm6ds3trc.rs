//! LSM6DS3TR-C embedded pedometer
//!
//! The IMU runs its own step detector on the accelerometer stream and keeps
//! a 16-bit step counter. The driver resets that counter when a
//! subscription starts, then accumulates wrap-safe deltas into a 32-bit
//! total so the count survives the hardware counter rolling over.
//!
//! The part has no barometer, so floor counts are always reported as
//! missing.

use chrono::NaiveDateTime;
use embedded_hal_async::i2c::I2c;
use motionplus_core::traits::{
    PedometerReading, PedometerSource, PedometerUpdate, SensorError, SensorErrorKind,
};

use crate::bus::{read_register, read_registers, write_register};

/// Default address with SA0 pulled low
pub const DEFAULT_ADDRESS: u8 = 0x6A;

/// Value of WHO_AM_I on an LSM6DS3TR-C
const CHIP_ID: u8 = 0x6A;

mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL1_XL: u8 = 0x10;
    pub const CTRL10_C: u8 = 0x19;
    pub const STEP_COUNTER_L: u8 = 0x4B;
}

/// Accelerometer at 26 Hz, +-2 g (the step detector needs at least 26 Hz)
const CTRL1_XL_26HZ_2G: u8 = 0x20;

mod ctrl10 {
    pub const PEDO_RST_STEP: u8 = 1 << 1;
    pub const FUNC_EN: u8 = 1 << 2;
    pub const PEDO_EN: u8 = 1 << 4;
}

const CTRL10_PEDOMETER: u8 = ctrl10::FUNC_EN | ctrl10::PEDO_EN;

#[derive(Debug, Clone, Copy)]
struct StepSubscription {
    from: NaiveDateTime,
    reset_pending: bool,
    last_raw: u16,
    total: u32,
}

impl StepSubscription {
    fn new(from: NaiveDateTime) -> Self {
        Self {
            from,
            reset_pending: true,
            last_raw: 0,
            total: 0,
        }
    }

    /// Fold a new hardware counter value into the running total
    fn accumulate(&mut self, raw: u16) -> u32 {
        let delta = raw.wrapping_sub(self.last_raw);
        self.last_raw = raw;
        self.total = self.total.saturating_add(u32::from(delta));
        self.total
    }
}

/// Step counter backed by the LSM6DS3TR-C
pub struct Lsm6ds3trcPedometer<I2C> {
    i2c: I2C,
    address: u8,
    available: bool,
    subscription: Option<StepSubscription>,
}

impl<I2C> Lsm6ds3trcPedometer<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            available: false,
            subscription: None,
        }
    }

    /// Instant the current subscription counts from
    pub fn subscribed_from(&self) -> Option<NaiveDateTime> {
        self.subscription.map(|s| s.from)
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Lsm6ds3trcPedometer<I2C> {
    /// Probe the chip and enable the step detector
    ///
    /// The pedometer only reports itself available after this succeeds.
    pub async fn init(&mut self) -> Result<(), SensorError> {
        self.available = false;

        let id = read_register(&mut self.i2c, self.address, reg::WHO_AM_I).await?;
        if id != CHIP_ID {
            return Err(SensorError::with_message(
                SensorErrorKind::Unavailable,
                "unknown chip id",
            ));
        }

        write_register(&mut self.i2c, self.address, reg::CTRL1_XL, CTRL1_XL_26HZ_2G).await?;
        write_register(&mut self.i2c, self.address, reg::CTRL10_C, CTRL10_PEDOMETER).await?;

        self.available = true;
        Ok(())
    }

    /// Read the step counter if a subscription is running
    ///
    /// The first poll after `start_updates` clears the hardware counter.
    pub async fn poll(&mut self) -> Option<PedometerUpdate> {
        let mut subscription = self.subscription?;
        let update = self.read_steps(&mut subscription).await;
        self.subscription = Some(subscription);
        Some(update)
    }

    async fn read_steps(&mut self, subscription: &mut StepSubscription) -> PedometerUpdate {
        if subscription.reset_pending {
            write_register(
                &mut self.i2c,
                self.address,
                reg::CTRL10_C,
                CTRL10_PEDOMETER | ctrl10::PEDO_RST_STEP,
            )
            .await?;
            write_register(&mut self.i2c, self.address, reg::CTRL10_C, CTRL10_PEDOMETER).await?;
            *subscription = StepSubscription {
                reset_pending: false,
                ..StepSubscription::new(subscription.from)
            };
        }

        let mut raw = [0u8; 2];
        read_registers(&mut self.i2c, self.address, reg::STEP_COUNTER_L, &mut raw).await?;
        let steps = subscription.accumulate(u16::from_le_bytes(raw));

        Ok(PedometerReading {
            steps,
            floors_ascended: None,
            floors_descended: None,
        })
    }
}

impl<I2C> PedometerSource for Lsm6ds3trcPedometer<I2C> {
    fn is_available(&self) -> bool {
        self.available
    }

    fn start_updates(&mut self, from: NaiveDateTime) {
        self.subscription = Some(StepSubscription::new(from));
    }

    fn stop_updates(&mut self) {
        self.subscription = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeI2c;
    use chrono::NaiveDate;
    use embassy_futures::block_on;
    use embedded_hal::i2c::ErrorKind;
    use std::vec;

    fn midnight() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn set_steps(bus: &FakeI2c, steps: u16) {
        let [lo, hi] = steps.to_le_bytes();
        bus.set(reg::STEP_COUNTER_L, lo);
        bus.set(reg::STEP_COUNTER_L + 1, hi);
    }

    fn ready() -> (FakeI2c, Lsm6ds3trcPedometer<FakeI2c>) {
        let bus = FakeI2c::new(DEFAULT_ADDRESS);
        bus.set(reg::WHO_AM_I, CHIP_ID);
        let mut pedometer = Lsm6ds3trcPedometer::new(bus.clone(), DEFAULT_ADDRESS);
        block_on(pedometer.init()).unwrap();
        (bus, pedometer)
    }

    #[test]
    fn test_init_enables_step_detector() {
        let (bus, pedometer) = ready();

        assert!(pedometer.is_available());
        assert_eq!(bus.get(reg::CTRL1_XL), CTRL1_XL_26HZ_2G);
        assert_eq!(bus.get(reg::CTRL10_C), CTRL10_PEDOMETER);
    }

    #[test]
    fn test_wrong_chip_is_unavailable() {
        let bus = FakeI2c::new(DEFAULT_ADDRESS);
        bus.set(reg::WHO_AM_I, 0x69);
        let mut pedometer = Lsm6ds3trcPedometer::new(bus, DEFAULT_ADDRESS);

        let err = block_on(pedometer.init()).unwrap_err();

        assert_eq!(err.kind(), SensorErrorKind::Unavailable);
        assert!(!pedometer.is_available());
    }

    #[test]
    fn test_missing_chip_is_bus_error() {
        let bus = FakeI2c::new(0x6B);
        let mut pedometer = Lsm6ds3trcPedometer::new(bus, DEFAULT_ADDRESS);

        let err = block_on(pedometer.init()).unwrap_err();

        assert_eq!(err.kind(), SensorErrorKind::Bus);
        assert!(!pedometer.is_available());
    }

    #[test]
    fn test_no_updates_without_subscription() {
        let (bus, mut pedometer) = ready();
        bus.clear_writes();

        assert!(block_on(pedometer.poll()).is_none());
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn test_start_resets_counter_once() {
        let (bus, mut pedometer) = ready();
        pedometer.start_updates(midnight());
        assert_eq!(pedometer.subscribed_from(), Some(midnight()));
        bus.clear_writes();

        let reading = block_on(pedometer.poll()).unwrap().unwrap();
        assert_eq!(reading.steps, 0);
        assert_eq!(reading.floors_ascended, None);
        assert_eq!(reading.floors_descended, None);
        assert_eq!(
            &bus.writes()[..2],
            &[
                vec![reg::CTRL10_C, CTRL10_PEDOMETER | ctrl10::PEDO_RST_STEP],
                vec![reg::CTRL10_C, CTRL10_PEDOMETER],
            ]
        );

        bus.clear_writes();
        set_steps(&bus, 42);
        let reading = block_on(pedometer.poll()).unwrap().unwrap();
        assert_eq!(reading.steps, 42);
        assert_eq!(bus.writes(), vec![vec![reg::STEP_COUNTER_L]]);
    }

    #[test]
    fn test_hardware_counter_wrap() {
        let (bus, mut pedometer) = ready();
        pedometer.start_updates(midnight());
        block_on(pedometer.poll());

        set_steps(&bus, 65_530);
        assert_eq!(block_on(pedometer.poll()).unwrap().unwrap().steps, 65_530);

        set_steps(&bus, 4);
        assert_eq!(block_on(pedometer.poll()).unwrap().unwrap().steps, 65_540);
    }

    #[test]
    fn test_restart_clears_total() {
        let (bus, mut pedometer) = ready();
        pedometer.start_updates(midnight());
        block_on(pedometer.poll());
        set_steps(&bus, 500);
        block_on(pedometer.poll());

        pedometer.stop_updates();
        assert!(block_on(pedometer.poll()).is_none());
        assert_eq!(pedometer.subscribed_from(), None);

        pedometer.start_updates(midnight());
        // The fake does not clear the counter on reset; the driver re-reads it
        set_steps(&bus, 0);
        assert_eq!(block_on(pedometer.poll()).unwrap().unwrap().steps, 0);
    }

    #[test]
    fn test_bus_failure_reported_and_reset_retried() {
        let (bus, mut pedometer) = ready();
        pedometer.start_updates(midnight());
        bus.fail_with(Some(ErrorKind::ArbitrationLoss));

        let err = block_on(pedometer.poll()).unwrap().unwrap_err();
        assert_eq!(err.kind(), SensorErrorKind::Bus);
        assert_eq!(err.message(), "arb lost");

        bus.fail_with(None);
        bus.clear_writes();
        block_on(pedometer.poll()).unwrap().unwrap();
        assert_eq!(
            bus.writes()[0],
            vec![reg::CTRL10_C, CTRL10_PEDOMETER | ctrl10::PEDO_RST_STEP]
        );
    }
}
