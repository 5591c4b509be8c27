//! Raw and converted measurement values.

use crate::config::Config;
use crate::params::{AccelRange, GyroRange};

/// Temperature sensitivity in LSB/°C.
pub const TEMPERATURE_SENSITIVITY: f32 = 340.0;
/// Temperature offset in °C applied after scaling.
pub const TEMPERATURE_OFFSET: f32 = 36.53;

/// Unconverted output of one measurement burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawMeasurement {
    /// Accelerometer X/Y/Z.
    pub accel: [i16; 3],
    /// Temperature sensor output.
    pub temperature: i16,
    /// Gyroscope X/Y/Z.
    pub gyro: [i16; 3],
}

impl RawMeasurement {
    /// Builds a measurement from the seven words in register order.
    pub const fn from_words(words: [i16; 7]) -> Self {
        Self {
            accel: [words[0], words[1], words[2]],
            temperature: words[3],
            gyro: [words[4], words[5], words[6]],
        }
    }

    /// Converts to physical units with the given full-scale ranges.
    pub fn convert(&self, accel_range: AccelRange, gyro_range: GyroRange) -> Measurement {
        Measurement {
            accel: self.accel.map(|raw| accel_range.scale(raw)),
            gyro: self.gyro.map(|raw| gyro_range.scale(raw)),
            temperature: celsius(self.temperature),
            raw: *self,
        }
    }

    /// Converts to physical units with the ranges held by `config`.
    pub fn convert_with(&self, config: &Config) -> Measurement {
        self.convert(config.accel_range, config.gyro_range)
    }
}

/// Measurement converted to physical units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Acceleration in g.
    pub accel: [f32; 3],
    /// Angular rate in °/s.
    pub gyro: [f32; 3],
    /// Die temperature in °C.
    pub temperature: f32,
    /// Source values the conversion was computed from.
    pub raw: RawMeasurement,
}

/// Converts a raw temperature word into degrees Celsius.
pub fn celsius(raw: i16) -> f32 {
    f32::from(raw) / TEMPERATURE_SENSITIVITY + TEMPERATURE_OFFSET
}
