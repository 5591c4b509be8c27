//! Register map definitions for the MPU6050.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{AccelRange, ClockSource, GyroRange};

/// Register address of `SMPLRT_DIV`.
pub const REG_SMPLRT_DIV: u8 = 0x19;
/// Register address of `CONFIG`.
pub const REG_CONFIG: u8 = 0x1A;
/// Register address of `GYRO_CONFIG`.
pub const REG_GYRO_CONFIG: u8 = 0x1B;
/// Register address of `ACCEL_CONFIG`.
pub const REG_ACCEL_CONFIG: u8 = 0x1C;
/// Register address of `ACCEL_XOUT_H`.
pub const REG_ACCEL_XOUT_H: u8 = 0x3B;
/// Register address of `ACCEL_XOUT_L`.
pub const REG_ACCEL_XOUT_L: u8 = 0x3C;
/// Register address of `ACCEL_YOUT_H`.
pub const REG_ACCEL_YOUT_H: u8 = 0x3D;
/// Register address of `ACCEL_YOUT_L`.
pub const REG_ACCEL_YOUT_L: u8 = 0x3E;
/// Register address of `ACCEL_ZOUT_H`.
pub const REG_ACCEL_ZOUT_H: u8 = 0x3F;
/// Register address of `ACCEL_ZOUT_L`.
pub const REG_ACCEL_ZOUT_L: u8 = 0x40;
/// Register address of `TEMP_OUT_H`.
pub const REG_TEMP_OUT_H: u8 = 0x41;
/// Register address of `TEMP_OUT_L`.
pub const REG_TEMP_OUT_L: u8 = 0x42;
/// Register address of `GYRO_XOUT_H`.
pub const REG_GYRO_XOUT_H: u8 = 0x43;
/// Register address of `GYRO_XOUT_L`.
pub const REG_GYRO_XOUT_L: u8 = 0x44;
/// Register address of `GYRO_YOUT_H`.
pub const REG_GYRO_YOUT_H: u8 = 0x45;
/// Register address of `GYRO_YOUT_L`.
pub const REG_GYRO_YOUT_L: u8 = 0x46;
/// Register address of `GYRO_ZOUT_H`.
pub const REG_GYRO_ZOUT_H: u8 = 0x47;
/// Register address of `GYRO_ZOUT_L`.
pub const REG_GYRO_ZOUT_L: u8 = 0x48;
/// Register address of `PWR_MGMT_1`.
pub const REG_PWR_MGMT_1: u8 = 0x6B;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x75;

/// Value reported by `WHO_AM_I` on a genuine MPU6050.
pub const EXPECTED_WHO_AM_I: u8 = 0x68;

/// Default 7-bit bus address (AD0 low).
pub const DEFAULT_ADDRESS: u8 = 0x68;
/// Alternate 7-bit bus address (AD0 high).
pub const ALTERNATE_ADDRESS: u8 = 0x69;

/// High/low register pairs of one measurement burst, in read order:
/// accel X/Y/Z, temperature, gyro X/Y/Z.
pub const MEASUREMENT_PAIRS: [(u8, u8); 7] = [
    (REG_ACCEL_XOUT_H, REG_ACCEL_XOUT_L),
    (REG_ACCEL_YOUT_H, REG_ACCEL_YOUT_L),
    (REG_ACCEL_ZOUT_H, REG_ACCEL_ZOUT_L),
    (REG_TEMP_OUT_H, REG_TEMP_OUT_L),
    (REG_GYRO_XOUT_H, REG_GYRO_XOUT_L),
    (REG_GYRO_YOUT_H, REG_GYRO_YOUT_L),
    (REG_GYRO_ZOUT_H, REG_GYRO_ZOUT_L),
];

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Register address as documented in the register map.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Power-on reset value.
    const RESET_VALUE: u8;
}

/// Bitfield representation of the `PWR_MGMT_1` register (address `0x6B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerManagement1 {
    // Clock source selection (bits 2:0).
    pub clock_source: ClockSource,
    // Temperature sensor disable (bit 3).
    pub temp_disable: bool,
    #[skip]
    __: B1,
    // Cycle between sleep and single samples (bit 5).
    pub cycle: bool,
    // Sleep mode (bit 6).
    pub sleep: bool,
    // Device reset (bit 7).
    pub device_reset: bool,
}

impl PowerManagement1 {
    /// Awake, internal oscillator, temperature sensor on.
    pub fn awake() -> Self {
        Self::new()
            .with_clock_source(ClockSource::Internal)
            .with_sleep(false)
    }
}

impl From<u8> for PowerManagement1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PowerManagement1> for u8 {
    fn from(value: PowerManagement1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CONFIG` register (address `0x1A`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    // Digital low-pass filter selector (bits 2:0).
    pub dlpf_cfg: B3,
    // FSYNC pin sampling location (bits 5:3).
    pub ext_sync_set: B3,
    #[skip]
    __: B2,
}

impl From<u8> for Configuration {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Configuration> for u8 {
    fn from(value: Configuration) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `GYRO_CONFIG` register (address `0x1B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GyroConfig {
    #[skip]
    __: B3,
    // Full-scale range (bits 4:3).
    pub full_scale: GyroRange,
    // Z axis self-test (bit 5).
    pub z_self_test: bool,
    // Y axis self-test (bit 6).
    pub y_self_test: bool,
    // X axis self-test (bit 7).
    pub x_self_test: bool,
}

impl From<u8> for GyroConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<GyroConfig> for u8 {
    fn from(value: GyroConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `ACCEL_CONFIG` register (address `0x1C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelConfig {
    #[skip]
    __: B3,
    // Full-scale range (bits 4:3).
    pub full_scale: AccelRange,
    // Z axis self-test (bit 5).
    pub z_self_test: bool,
    // Y axis self-test (bit 6).
    pub y_self_test: bool,
    // X axis self-test (bit 7).
    pub x_self_test: bool,
}

impl From<u8> for AccelConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<AccelConfig> for u8 {
    fn from(value: AccelConfig) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for PowerManagement1 {
    const ADDRESS: u8 = REG_PWR_MGMT_1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u8 = 0x40;
}

impl Register for Configuration {
    const ADDRESS: u8 = REG_CONFIG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u8 = 0x00;
}

impl Register for GyroConfig {
    const ADDRESS: u8 = REG_GYRO_CONFIG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u8 = 0x00;
}

impl Register for AccelConfig {
    const ADDRESS: u8 = REG_ACCEL_CONFIG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u8 = 0x00;
}

/// Reconstructs a signed 16-bit sample from its high and low register bytes.
#[inline]
pub const fn combine_word(high: u8, low: u8) -> i16 {
    i16::from_be_bytes([high, low])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn awake_power_management_is_zero() {
        assert_eq!(u8::from(PowerManagement1::awake()), 0x00);
        assert_eq!(PowerManagement1::RESET_VALUE, 0x40);
        assert!(PowerManagement1::from(PowerManagement1::RESET_VALUE).sleep());
    }

    #[test]
    fn range_fields_sit_in_bits_4_and_3() {
        let gyro = GyroConfig::new().with_full_scale(GyroRange::Dps2000);
        assert_eq!(u8::from(gyro), 0b0001_1000);
        assert_eq!(GyroConfig::from(0x08).full_scale(), GyroRange::Dps500);

        let accel = AccelConfig::new().with_full_scale(AccelRange::G8);
        assert_eq!(u8::from(accel), 0b0001_0000);
        assert_eq!(AccelConfig::from(0xF8).full_scale(), AccelRange::G16);
    }

    #[test]
    fn configuration_keeps_filter_in_low_bits() {
        let config = Configuration::new().with_dlpf_cfg(3);
        assert_eq!(u8::from(config), 0x03);
        assert_eq!(Configuration::from(0b0010_1110).dlpf_cfg(), 0b110);
    }

    #[test]
    fn measurement_pairs_cover_fourteen_consecutive_registers() {
        let mut expected = REG_ACCEL_XOUT_H;
        for (high, low) in MEASUREMENT_PAIRS {
            assert_eq!(high, expected);
            assert_eq!(low, expected + 1);
            expected += 2;
        }
        assert_eq!(expected - 1, REG_GYRO_ZOUT_L);
    }

    #[test]
    fn combine_word_is_twos_complement() {
        assert_eq!(combine_word(0x10, 0x00), 4096);
        assert_eq!(combine_word(0xFF, 0xFF), -1);
        assert_eq!(combine_word(0x80, 0x00), i16::MIN);
        assert_eq!(combine_word(0x7F, 0xFF), i16::MAX);
    }
}
