//! Error handling primitives for the MPU6050 driver.

use crate::config::ConfigError;

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// The device answered, but `WHO_AM_I` held the contained value instead of the MPU6050 identity.
    IdentityMismatch(u8),
    /// A configuration selector lies outside the supported set.
    InvalidConfig(ConfigError),
    /// The requested motor duty exceeds the channel maximum.
    DutyOutOfRange(u16),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
