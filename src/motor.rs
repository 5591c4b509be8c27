//! PWM-driven vibration motor actuator.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::{Error, Result};

/// Vibration motor on one PWM channel.
///
/// Remembers the last duty written so callers can query it without touching
/// the peripheral.
pub struct VibrationMotor<P> {
    pwm: P,
    duty: u16,
}

impl<P> VibrationMotor<P>
where
    P: SetDutyCycle,
{
    /// Takes ownership of the channel and switches the motor off.
    pub fn new(mut pwm: P) -> Result<Self, P::Error> {
        pwm.set_duty_cycle_fully_off()?;
        Ok(Self { pwm, duty: 0 })
    }

    /// Sets the raw duty, rejecting values above [`VibrationMotor::max_duty`].
    pub fn set_duty(&mut self, duty: u16) -> Result<(), P::Error> {
        let max = self.pwm.max_duty_cycle();
        if duty > max {
            warn!("duty {=u16} above channel maximum {=u16}", duty, max);
            return Err(Error::DutyOutOfRange(duty));
        }

        self.pwm.set_duty_cycle(duty)?;
        self.duty = duty;
        Ok(())
    }

    /// Sets the duty as a percentage of full scale (`0..=100`).
    pub fn set_percent(&mut self, percent: u8) -> Result<(), P::Error> {
        if percent > 100 {
            return Err(Error::DutyOutOfRange(u16::from(percent)));
        }

        let max = u32::from(self.pwm.max_duty_cycle());
        // Fits in u16: percent <= 100 keeps the product at or below max.
        let duty = (max * u32::from(percent) / 100) as u16;
        self.set_duty(duty)
    }

    /// Switches the motor off.
    pub fn stop(&mut self) -> Result<(), P::Error> {
        self.set_duty(0)
    }

    /// Last duty successfully written.
    pub fn duty(&self) -> u16 {
        self.duty
    }

    /// Maximum duty supported by the channel.
    pub fn max_duty(&self) -> u16 {
        self.pwm.max_duty_cycle()
    }

    /// Consumes the motor and returns the owned PWM channel.
    pub fn release(self) -> P {
        self.pwm
    }
}

/// Triangular duty ramp in percent: `0` up to `100` and back down to `0`.
#[derive(Debug, Clone)]
pub struct Ramp {
    step: u8,
    next: Option<u8>,
    rising: bool,
}

impl Ramp {
    /// Creates a ramp moving `step` percent per item. A zero step is treated as 1.
    pub fn new(step: u8) -> Self {
        Self {
            step: step.clamp(1, 100),
            next: Some(0),
            rising: true,
        }
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Iterator for Ramp {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let current = self.next?;

        self.next = if self.rising {
            if current == 100 {
                self.rising = false;
                Some(100u8.saturating_sub(self.step))
            } else {
                Some(current.saturating_add(self.step).min(100))
            }
        } else if current == 0 {
            None
        } else {
            Some(current.saturating_sub(self.step))
        };

        Some(current)
    }
}
