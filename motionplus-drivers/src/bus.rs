//! Register access shared by the sensor drivers

use embedded_hal::i2c::{Error, ErrorKind, NoAcknowledgeSource};
use embedded_hal_async::i2c::I2c;
use motionplus_core::traits::{SensorError, SensorErrorKind};

/// Map a bus failure onto a sensor error
///
/// Details stay within 8 characters so `"Floors down: <detail>"` fits on one
/// 21-column row.
pub(crate) fn bus_error<E: Error>(error: E) -> SensorError {
    let detail = match error.kind() {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => "nak addr",
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => "nak data",
        ErrorKind::NoAcknowledge(_) => "nak",
        ErrorKind::ArbitrationLoss => "arb lost",
        ErrorKind::Bus => "bus err",
        ErrorKind::Overrun => "overrun",
        _ => "i2c err",
    };
    SensorError::with_message(SensorErrorKind::Bus, detail)
}

/// Read one register
pub(crate) async fn read_register<I: I2c>(
    i2c: &mut I,
    address: u8,
    register: u8,
) -> Result<u8, SensorError> {
    let mut value = [0u8; 1];
    i2c.write_read(address, &[register], &mut value)
        .await
        .map_err(bus_error)?;
    Ok(value[0])
}

/// Read consecutive registers starting at `register`
///
/// Relies on the device's register address auto-increment.
pub(crate) async fn read_registers<I: I2c>(
    i2c: &mut I,
    address: u8,
    register: u8,
    buf: &mut [u8],
) -> Result<(), SensorError> {
    i2c.write_read(address, &[register], buf)
        .await
        .map_err(bus_error)
}

/// Write one register
pub(crate) async fn write_register<I: I2c>(
    i2c: &mut I,
    address: u8,
    register: u8,
    value: u8,
) -> Result<(), SensorError> {
    i2c.write(address, &[register, value]).await.map_err(bus_error)
}
