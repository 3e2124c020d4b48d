//! Hobby servo on an embedded-hal PWM channel.

use embedded_hal::pwm::SetDutyCycle;

use super::Actuator;

/// Standard hobby servo frame: 20 ms (50 Hz).
pub const SERVO_PERIOD_US: u16 = 20_000;

/// Servo actuator over any `SetDutyCycle` channel.
///
/// Physical positions are pulse widths in microseconds within a fixed PWM
/// period. The channel must already run at `1 / period_us`. While detached the
/// channel is held fully off; the last written pulse is kept and re-applied on
/// the next attach.
#[derive(Debug)]
pub struct PwmServo<P> {
    pwm: P,
    period_us: u16,
    pulse_us: Option<u16>,
    attached: bool,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Wrap a channel running at the standard 50 Hz servo frame.
    pub fn new(pwm: P) -> Self {
        Self::with_period(pwm, SERVO_PERIOD_US)
    }

    /// Wrap a channel running at a custom frame period.
    pub fn with_period(pwm: P, period_us: u16) -> Self {
        Self {
            pwm,
            period_us: period_us.max(1),
            pulse_us: None,
            attached: false,
        }
    }

    /// PWM frame period in microseconds.
    #[inline]
    pub fn period_us(&self) -> u16 {
        self.period_us
    }

    /// Last commanded pulse width, if any.
    #[inline]
    pub fn pulse_us(&self) -> Option<u16> {
        self.pulse_us
    }

    /// Release the underlying channel.
    pub fn release(self) -> P {
        self.pwm
    }

    fn apply(&mut self, pulse_us: u16) -> Result<(), P::Error> {
        self.pwm
            .set_duty_cycle_fraction(pulse_us.min(self.period_us), self.period_us)
    }
}

impl<P: SetDutyCycle> Actuator for PwmServo<P> {
    type Error = P::Error;

    fn attach(&mut self) -> Result<(), Self::Error> {
        if let Some(pulse) = self.pulse_us {
            self.apply(pulse)?;
        }
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        self.pwm.set_duty_cycle_fully_off()?;
        self.attached = false;
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn write(&mut self, output: u16) -> Result<(), Self::Error> {
        self.pulse_us = Some(output);
        if self.attached {
            self.apply(output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    /// Channel whose counter runs at 1 µs per count over a 20 ms frame.
    struct FakeChannel {
        duty: u16,
    }

    impl ErrorType for FakeChannel {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakeChannel {
        fn max_duty_cycle(&self) -> u16 {
            20_000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_write_while_detached_is_deferred() {
        let mut servo = PwmServo::new(FakeChannel { duty: 0 });

        servo.write(1500).unwrap();
        assert!(!servo.is_attached());
        assert_eq!(servo.pulse_us(), Some(1500));

        servo.attach().unwrap();
        assert_eq!(servo.release().duty, 1500);
    }

    #[test]
    fn test_detach_turns_output_off() {
        let mut servo = PwmServo::new(FakeChannel { duty: 0 });
        servo.attach().unwrap();
        servo.write(2000).unwrap();

        servo.detach().unwrap();
        assert!(!servo.is_attached());
        assert_eq!(servo.pulse_us(), Some(2000));
        assert_eq!(servo.release().duty, 0);
    }

    #[test]
    fn test_pulse_clamped_to_period() {
        let mut servo = PwmServo::with_period(FakeChannel { duty: 0 }, 3000);
        servo.attach().unwrap();
        servo.write(5000).unwrap();

        assert_eq!(servo.release().duty, 20_000);
    }
}
