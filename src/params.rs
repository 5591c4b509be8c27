//! Strongly typed parameter enumerations for the MPU6050 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use mpu6050_vib::params::{AccelRange, DlpfBandwidth, GyroRange};
//!
//! let accel = AccelRange::G2;
//! assert_eq!(accel.sensitivity(), 16384.0);
//! let gyro = GyroRange::Dps2000;
//! assert_eq!(gyro.sensitivity(), 16.4);
//! let _ = DlpfBandwidth::Hz44;
//! ```

use modular_bitfield::prelude::Specifier;

use crate::config::ConfigError;

/// Accelerometer sensitivity in LSB/g, indexed by `AFS_SEL`.
pub const ACCEL_SENSITIVITY: [f32; 4] = [16384.0, 8192.0, 4096.0, 2048.0];

/// Gyroscope sensitivity in LSB/(°/s), indexed by `FS_SEL`.
pub const GYRO_SENSITIVITY: [f32; 4] = [131.0, 65.5, 32.8, 16.4];

/// Looks up the accelerometer sensitivity for a raw `AFS_SEL` selector.
pub fn accel_sensitivity(selector: u8) -> core::result::Result<f32, ConfigError> {
    ACCEL_SENSITIVITY
        .get(usize::from(selector))
        .copied()
        .ok_or(ConfigError::AccelRange(selector))
}

/// Looks up the gyroscope sensitivity for a raw `FS_SEL` selector.
pub fn gyro_sensitivity(selector: u8) -> core::result::Result<f32, ConfigError> {
    GYRO_SENSITIVITY
        .get(usize::from(selector))
        .copied()
        .ok_or(ConfigError::GyroRange(selector))
}

/// Accelerometer full-scale ranges encoded in `ACCEL_CONFIG.AFS_SEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum AccelRange {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl AccelRange {
    /// Returns the sensitivity in LSB/g.
    pub const fn sensitivity(self) -> f32 {
        ACCEL_SENSITIVITY[self as usize]
    }

    /// Converts a raw reading into g.
    pub fn scale(self, raw: i16) -> f32 {
        f32::from(raw) / self.sensitivity()
    }
}

impl TryFrom<u8> for AccelRange {
    type Error = ConfigError;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::G2),
            1 => Ok(Self::G4),
            2 => Ok(Self::G8),
            3 => Ok(Self::G16),
            other => Err(ConfigError::AccelRange(other)),
        }
    }
}

/// Gyroscope full-scale ranges encoded in `GYRO_CONFIG.FS_SEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum GyroRange {
    /// ±250 °/s.
    Dps250 = 0b00,
    /// ±500 °/s.
    Dps500 = 0b01,
    /// ±1000 °/s.
    Dps1000 = 0b10,
    /// ±2000 °/s.
    Dps2000 = 0b11,
}

impl GyroRange {
    /// Returns the sensitivity in LSB/(°/s).
    pub const fn sensitivity(self) -> f32 {
        GYRO_SENSITIVITY[self as usize]
    }

    /// Converts a raw reading into degrees per second.
    pub fn scale(self, raw: i16) -> f32 {
        f32::from(raw) / self.sensitivity()
    }
}

impl TryFrom<u8> for GyroRange {
    type Error = ConfigError;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Dps250),
            1 => Ok(Self::Dps500),
            2 => Ok(Self::Dps1000),
            3 => Ok(Self::Dps2000),
            other => Err(ConfigError::GyroRange(other)),
        }
    }
}

/// Digital low-pass filter selections encoded in `CONFIG.DLPF_CFG`.
///
/// Bandwidths are the accelerometer figures; the gyroscope path is within a
/// few hertz of each. Value 7 is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DlpfBandwidth {
    /// 260 Hz, filter effectively disabled.
    Hz260 = 0,
    /// 184 Hz.
    Hz184 = 1,
    /// 94 Hz.
    Hz94 = 2,
    /// 44 Hz.
    Hz44 = 3,
    /// 21 Hz.
    Hz21 = 4,
    /// 10 Hz.
    Hz10 = 5,
    /// 5 Hz.
    Hz5 = 6,
}

impl DlpfBandwidth {
    /// Returns the nominal accelerometer bandwidth in hertz.
    pub const fn hz(self) -> u16 {
        match self {
            Self::Hz260 => 260,
            Self::Hz184 => 184,
            Self::Hz94 => 94,
            Self::Hz44 => 44,
            Self::Hz21 => 21,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }

    /// Returns the gyroscope output rate feeding the sample-rate divider.
    pub const fn gyro_output_rate_hz(self) -> u32 {
        match self {
            Self::Hz260 => 8_000,
            _ => 1_000,
        }
    }
}

impl TryFrom<u8> for DlpfBandwidth {
    type Error = ConfigError;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Hz260),
            1 => Ok(Self::Hz184),
            2 => Ok(Self::Hz94),
            3 => Ok(Self::Hz44),
            4 => Ok(Self::Hz21),
            5 => Ok(Self::Hz10),
            6 => Ok(Self::Hz5),
            other => Err(ConfigError::DlpfBandwidth(other)),
        }
    }
}

/// Clock source selections encoded in `PWR_MGMT_1.CLKSEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum ClockSource {
    /// Internal 8 MHz oscillator.
    Internal = 0b000,
    /// PLL with X axis gyroscope reference.
    PllGyroX = 0b001,
    /// PLL with Y axis gyroscope reference.
    PllGyroY = 0b010,
    /// PLL with Z axis gyroscope reference.
    PllGyroZ = 0b011,
    /// PLL with external 32.768 kHz reference.
    PllExternal32k = 0b100,
    /// PLL with external 19.2 MHz reference.
    PllExternal19M = 0b101,
    /// Stops the clock and keeps the timing generator in reset.
    Stopped = 0b111,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accel_table_matches_datasheet() {
        assert_eq!(accel_sensitivity(0), Ok(16384.0));
        assert_eq!(accel_sensitivity(1), Ok(8192.0));
        assert_eq!(accel_sensitivity(2), Ok(4096.0));
        assert_eq!(accel_sensitivity(3), Ok(2048.0));
        assert_eq!(accel_sensitivity(4), Err(ConfigError::AccelRange(4)));
        assert_eq!(accel_sensitivity(255), Err(ConfigError::AccelRange(255)));
    }

    #[test]
    fn gyro_table_matches_datasheet() {
        assert_eq!(gyro_sensitivity(0), Ok(131.0));
        assert_eq!(gyro_sensitivity(1), Ok(65.5));
        assert_eq!(gyro_sensitivity(2), Ok(32.8));
        assert_eq!(gyro_sensitivity(3), Ok(16.4));
        assert_eq!(gyro_sensitivity(4), Err(ConfigError::GyroRange(4)));
    }

    #[test]
    fn enum_sensitivity_agrees_with_selector_lookup() {
        for selector in 0..4u8 {
            let accel = AccelRange::try_from(selector).unwrap();
            assert_eq!(Ok(accel.sensitivity()), accel_sensitivity(selector));

            let gyro = GyroRange::try_from(selector).unwrap();
            assert_eq!(Ok(gyro.sensitivity()), gyro_sensitivity(selector));
        }
    }

    #[test]
    fn out_of_range_selectors_are_rejected() {
        assert_eq!(AccelRange::try_from(4), Err(ConfigError::AccelRange(4)));
        assert_eq!(GyroRange::try_from(9), Err(ConfigError::GyroRange(9)));
        assert_eq!(DlpfBandwidth::try_from(7), Err(ConfigError::DlpfBandwidth(7)));
    }

    #[test]
    fn full_scale_raw_value_maps_to_one_g() {
        assert_eq!(AccelRange::G2.scale(16384), 1.0);
        assert_eq!(AccelRange::G16.scale(-2048), -1.0);
        assert_eq!(GyroRange::Dps250.scale(131), 1.0);
    }

    #[test]
    fn disabled_filter_runs_gyro_at_8khz() {
        assert_eq!(DlpfBandwidth::Hz260.gyro_output_rate_hz(), 8_000);
        assert_eq!(DlpfBandwidth::Hz44.gyro_output_rate_hz(), 1_000);
    }
}
