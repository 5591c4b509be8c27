//! Bus interface abstraction for the MPU6050 driver.

pub mod i2c;

/// Abstraction over the low-level register access required by the driver.
///
/// Implementations perform one complete bus exchange per call and never
/// cache or batch across calls.
pub trait Mpu6050Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;
}
