//! I²C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Mpu6050Interface;
use crate::registers::{ALTERNATE_ADDRESS, DEFAULT_ADDRESS};

/// 7-bit bus address selected by the AD0 pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
    /// AD0 tied low (`0x68`).
    #[default]
    Primary,
    /// AD0 tied high (`0x69`).
    Secondary,
}

impl Address {
    /// Returns the 7-bit address.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Primary => DEFAULT_ADDRESS,
            Self::Secondary => ALTERNATE_ADDRESS,
        }
    }
}

/// I²C-based interface implementation for the MPU6050 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to the device at `address`.
    pub const fn new(i2c: I2C, address: Address) -> Self {
        Self {
            i2c,
            address: address.bits(),
        }
    }

    /// Returns the 7-bit device address in use.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Mpu6050Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        // Pointer write and data read are separate transactions, each closed by a stop.
        self.i2c.write(self.address, &[register])?;

        let mut value = [0u8; 1];
        self.i2c.read(self.address, &mut value)?;
        Ok(value[0])
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, I2cInterface};
    use crate::interface::Mpu6050Interface;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn read_register_points_then_reads_one_byte() {
        let expectations = [
            I2cTransaction::write(0x68, vec![0x75]),
            I2cTransaction::read(0x68, vec![0x68]),
        ];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), Address::Primary);

        assert_eq!(interface.read_register(0x75), Ok(0x68));
        interface.release().done();
    }

    #[test]
    fn write_register_sends_address_and_value() {
        let expectations = [I2cTransaction::write(0x69, vec![0x6B, 0x00])];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), Address::Secondary);

        assert_eq!(interface.write_register(0x6B, 0x00), Ok(()));
        interface.release().done();
    }

    #[test]
    fn failed_pointer_write_skips_the_read() {
        let expectations =
            [I2cTransaction::write(0x68, vec![0x3B]).with_error(ErrorKind::Other)];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), Address::Primary);

        assert_eq!(interface.read_register(0x3B), Err(ErrorKind::Other));
        interface.release().done();
    }

    #[test]
    fn failed_read_returns_no_byte() {
        let expectations = [
            I2cTransaction::write(0x68, vec![0x3B]),
            I2cTransaction::read(0x68, vec![0x00]).with_error(ErrorKind::Other),
        ];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), Address::Primary);

        assert_eq!(interface.read_register(0x3B), Err(ErrorKind::Other));
        interface.release().done();
    }

    #[test]
    fn address_defaults_to_ad0_low() {
        assert_eq!(Address::default().bits(), 0x68);
        assert_eq!(Address::Secondary.bits(), 0x69);
    }
}
