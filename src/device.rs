//! High-level MPU6050 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::Mpu6050Interface;
use crate::interface::i2c::{Address, I2cInterface};
use crate::measurement::{Measurement, RawMeasurement};
use crate::params::{AccelRange, DlpfBandwidth, GyroRange};
use crate::registers::{
    AccelConfig,
    Configuration,
    GyroConfig,
    PowerManagement1,
    EXPECTED_WHO_AM_I,
    MEASUREMENT_PAIRS,
    REG_ACCEL_CONFIG,
    REG_CONFIG,
    REG_GYRO_CONFIG,
    REG_PWR_MGMT_1,
    REG_SMPLRT_DIV,
    REG_WHO_AM_I,
    combine_word,
};
use embedded_hal::i2c::I2c;

/// High-level synchronous driver for the MPU6050.
///
/// The driver owns both the bus interface and the active [`Config`]. Every
/// operation takes `&mut self`, so a multi-register sequence holds the bus
/// for its whole duration and cannot interleave with other accesses made
/// through the same driver.
pub struct Mpu6050<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Mpu6050<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// No bus traffic happens until [`Mpu6050::init`] or another operation is called.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<I2C> Mpu6050<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I²C transports.
    pub fn new_i2c(i2c: I2C, address: Address, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c, address), config)
    }

    /// Releases the driver, returning the I²C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Mpu6050<IFACE>
where
    IFACE: Mpu6050Interface<Error = CommE>,
{
    // ==================================================================
    // == Identification ================================================
    // ==================================================================
    /// Checks that the device at the bus address identifies as an MPU6050.
    ///
    /// Only reads `WHO_AM_I`, so it is safe to call repeatedly, including
    /// before [`Mpu6050::init`].
    pub fn verify_connection(&mut self) -> Result<(), CommE> {
        let who_am_i = self.read_register(REG_WHO_AM_I)?;

        if who_am_i != EXPECTED_WHO_AM_I {
            warn!("unexpected WHO_AM_I value {=u8:#x}", who_am_i);
            return Err(Error::IdentityMismatch(who_am_i));
        }

        debug!("MPU6050 found and responding");
        Ok(())
    }

    // ==================================================================
    // == Initialization & Configuration ================================
    // ==================================================================
    /// Wakes the sensor and programs the active configuration.
    ///
    /// Sequence: identity check, `PWR_MGMT_1 = 0x00`, `SMPLRT_DIV`, `CONFIG`,
    /// `GYRO_CONFIG`, `ACCEL_CONFIG`. The first failure ends the sequence;
    /// registers written before it keep their new values.
    pub fn init(&mut self) -> Result<(), CommE> {
        self.verify_connection()?;
        self.wake()?;
        let config = self.config;
        self.apply_config(&config)?;

        debug!("MPU6050 initialized");
        Ok(())
    }

    /// Programs a new configuration and adopts it once every write succeeded.
    ///
    /// On failure the previous configuration stays active in the driver while
    /// the device may already hold some of the new register values.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        self.apply_config(&config)?;
        self.config = config;
        Ok(())
    }

    /// Updates the accelerometer full-scale range.
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), CommE> {
        self.write_register(REG_ACCEL_CONFIG, accel_config_value(range))?;
        self.config.accel_range = range;
        Ok(())
    }

    /// Updates the gyroscope full-scale range.
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), CommE> {
        self.write_register(REG_GYRO_CONFIG, gyro_config_value(range))?;
        self.config.gyro_range = range;
        Ok(())
    }

    /// Reads the configuration currently held by the device registers.
    pub fn read_device_config(&mut self) -> Result<Config, CommE> {
        let sample_rate_divider = self.read_register(REG_SMPLRT_DIV)?;
        let configuration = Configuration::from(self.read_register(REG_CONFIG)?);
        let gyro = GyroConfig::from(self.read_register(REG_GYRO_CONFIG)?);
        let accel = AccelConfig::from(self.read_register(REG_ACCEL_CONFIG)?);

        let dlpf = DlpfBandwidth::try_from(configuration.dlpf_cfg()).map_err(Error::InvalidConfig)?;

        Ok(Config {
            sample_rate_divider,
            dlpf,
            gyro_range: gyro.full_scale(),
            accel_range: accel.full_scale(),
        })
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads all seven measurement words without conversion.
    ///
    /// Issues 14 single-register reads, high byte before low byte for each
    /// word. A failure on any of them discards everything read so far.
    pub fn read_raw(&mut self) -> Result<RawMeasurement, CommE> {
        let mut words = [0i16; 7];
        for (word, &(high, low)) in words.iter_mut().zip(MEASUREMENT_PAIRS.iter()) {
            *word = self.read_word(high, low)?;
        }

        Ok(RawMeasurement::from_words(words))
    }

    /// Reads a measurement and converts it with the active configuration.
    pub fn read_measurement(&mut self) -> Result<Measurement, CommE> {
        let raw = self.read_raw()?;
        Ok(raw.convert_with(&self.config))
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    fn wake(&mut self) -> Result<(), CommE> {
        self.write_register(REG_PWR_MGMT_1, u8::from(PowerManagement1::awake()))
    }

    fn apply_config(&mut self, config: &Config) -> Result<(), CommE> {
        self.write_register(REG_SMPLRT_DIV, config.sample_rate_divider)?;
        self.write_register(
            REG_CONFIG,
            u8::from(Configuration::new().with_dlpf_cfg(config.dlpf as u8)),
        )?;
        self.write_register(REG_GYRO_CONFIG, gyro_config_value(config.gyro_range))?;
        self.write_register(REG_ACCEL_CONFIG, accel_config_value(config.accel_range))?;
        Ok(())
    }

    #[inline]
    fn read_word(&mut self, high: u8, low: u8) -> Result<i16, CommE> {
        let msb = self.read_register(high)?;
        let lsb = self.read_register(low)?;
        Ok(combine_word(msb, lsb))
    }

    fn read_register(&mut self, register: u8) -> Result<u8, CommE> {
        self.interface.read_register(register).map_err(|err| {
            error!("read of register {=u8:#x} failed", register);
            Error::from(err)
        })
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        self.interface.write_register(register, value).map_err(|err| {
            error!("write of {=u8:#x} to register {=u8:#x} failed", value, register);
            Error::from(err)
        })
    }
}

fn gyro_config_value(range: GyroRange) -> u8 {
    u8::from(GyroConfig::new().with_full_scale(range))
}

fn accel_config_value(range: AccelRange) -> u8 {
    u8::from(AccelConfig::new().with_full_scale(range))
}
