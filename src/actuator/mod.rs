//! Actuator and clock boundaries.
//!
//! The servo engine only ever writes a single scalar to its actuator and reads
//! a monotonic millisecond counter. Both are traits so any PWM peripheral or
//! time source can sit behind them.

mod clock;
mod pwm;

pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use pwm::{PwmServo, SERVO_PERIOD_US};

/// Output stage driving a position-controlled servo.
pub trait Actuator {
    /// Driver-specific error.
    type Error: core::fmt::Debug;

    /// Start driving the output signal.
    fn attach(&mut self) -> Result<(), Self::Error>;

    /// Stop driving the output signal.
    fn detach(&mut self) -> Result<(), Self::Error>;

    /// Whether the output signal is currently driven.
    fn is_attached(&self) -> bool;

    /// Command a physical position.
    fn write(&mut self, output: u16) -> Result<(), Self::Error>;
}

impl<T: Actuator + ?Sized> Actuator for &mut T {
    type Error = T::Error;

    fn attach(&mut self) -> Result<(), Self::Error> {
        T::attach(self)
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        T::detach(self)
    }

    fn is_attached(&self) -> bool {
        T::is_attached(self)
    }

    fn write(&mut self, output: u16) -> Result<(), Self::Error> {
        T::write(self, output)
    }
}
