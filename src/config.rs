//! Configuration primitives for the MPU6050 driver.

use crate::params::{AccelRange, DlpfBandwidth, GyroRange};

/// User-facing configuration for the MPU6050 sensor.
///
/// The driver keeps its own copy so that the ranges used to convert readings
/// are always the ones that were written to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Sample-rate divider written to `SMPLRT_DIV`.
    pub sample_rate_divider: u8,
    /// Digital low-pass filter selection.
    pub dlpf: DlpfBandwidth,
    /// Gyroscope full-scale range.
    pub gyro_range: GyroRange,
    /// Accelerometer full-scale range.
    pub accel_range: AccelRange,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Builds a configuration from raw register selectors.
    ///
    /// Every selector is checked before a value is produced, so an invalid
    /// range never reaches the bus.
    pub fn from_selectors(
        sample_rate_divider: u8,
        dlpf: u8,
        gyro_range: u8,
        accel_range: u8,
    ) -> core::result::Result<Self, ConfigError> {
        Ok(Self {
            sample_rate_divider,
            dlpf: DlpfBandwidth::try_from(dlpf)?,
            gyro_range: GyroRange::try_from(gyro_range)?,
            accel_range: AccelRange::try_from(accel_range)?,
        })
    }

    /// Effective output data rate in hertz.
    pub fn sample_rate_hz(&self) -> u32 {
        self.dlpf.gyro_output_rate_hz() / (1 + u32::from(self.sample_rate_divider))
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the sample-rate divider.
    pub fn sample_rate_divider(mut self, divider: u8) -> Self {
        self.config.sample_rate_divider = divider;
        self
    }

    /// Overrides the digital low-pass filter.
    pub fn dlpf(mut self, dlpf: DlpfBandwidth) -> Self {
        self.config.dlpf = dlpf;
        self
    }

    /// Overrides the gyroscope full-scale range.
    pub fn gyro_range(mut self, range: GyroRange) -> Self {
        self.config.gyro_range = range;
        self
    }

    /// Overrides the accelerometer full-scale range.
    pub fn accel_range(mut self, range: AccelRange) -> Self {
        self.config.accel_range = range;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate_divider: 0,
            dlpf: DlpfBandwidth::Hz44,
            gyro_range: GyroRange::Dps2000,
            accel_range: AccelRange::G2,
        }
    }
}

/// Validation errors generated while decoding configuration selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Accelerometer range selector outside `0..=3`.
    AccelRange(u8),
    /// Gyroscope range selector outside `0..=3`.
    GyroRange(u8),
    /// Reserved or out-of-range low-pass filter selector.
    DlpfBandwidth(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = Config::new()
            .sample_rate_divider(7)
            .dlpf(DlpfBandwidth::Hz5)
            .gyro_range(GyroRange::Dps500)
            .accel_range(AccelRange::G8)
            .build();

        assert_eq!(config.sample_rate_divider, 7);
        assert_eq!(config.dlpf, DlpfBandwidth::Hz5);
        assert_eq!(config.gyro_range, GyroRange::Dps500);
        assert_eq!(config.accel_range, AccelRange::G8);
    }

    #[test]
    fn from_selectors_accepts_valid_values() {
        let config = Config::from_selectors(9, 3, 3, 0).unwrap();
        assert_eq!(config.sample_rate_divider, 9);
        assert_eq!(config.dlpf, DlpfBandwidth::Hz44);
        assert_eq!(config.gyro_range, GyroRange::Dps2000);
        assert_eq!(config.accel_range, AccelRange::G2);
    }

    #[test]
    fn from_selectors_names_the_bad_selector() {
        assert_eq!(Config::from_selectors(0, 7, 0, 0), Err(ConfigError::DlpfBandwidth(7)));
        assert_eq!(Config::from_selectors(0, 0, 4, 0), Err(ConfigError::GyroRange(4)));
        assert_eq!(Config::from_selectors(0, 0, 0, 4), Err(ConfigError::AccelRange(4)));
    }

    #[test]
    fn sample_rate_follows_divider_and_filter() {
        let config = Config::default();
        assert_eq!(config.sample_rate_hz(), 1_000);

        let config = Config::new().sample_rate_divider(7).build();
        assert_eq!(config.sample_rate_hz(), 125);

        let config = Config::new()
            .dlpf(DlpfBandwidth::Hz260)
            .sample_rate_divider(7)
            .build();
        assert_eq!(config.sample_rate_hz(), 1_000);
    }
}
