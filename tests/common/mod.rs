//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use smart_servo::Actuator;

/// Error reported by [`RecordingActuator`] when told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeFault;

/// Actuator that records every command it receives.
#[derive(Debug, Default)]
pub struct RecordingActuator {
    pub attached: bool,
    pub attach_count: usize,
    pub detach_count: usize,
    pub writes: Vec<u16>,
    /// Fail every write once this many have succeeded.
    pub fail_after: Option<usize>,
    /// Fail the next write of this output, once.
    pub fail_once_on: Option<u16>,
}

impl RecordingActuator {
    pub fn failing_after(writes: usize) -> Self {
        Self {
            fail_after: Some(writes),
            ..Self::default()
        }
    }

    pub fn failing_once_on(output: u16) -> Self {
        Self {
            fail_once_on: Some(output),
            ..Self::default()
        }
    }

    pub fn last_write(&self) -> Option<u16> {
        self.writes.last().copied()
    }
}

impl Actuator for RecordingActuator {
    type Error = FakeFault;

    fn attach(&mut self) -> Result<(), FakeFault> {
        self.attached = true;
        self.attach_count += 1;
        Ok(())
    }

    fn detach(&mut self) -> Result<(), FakeFault> {
        self.attached = false;
        self.detach_count += 1;
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn write(&mut self, output: u16) -> Result<(), FakeFault> {
        if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
            return Err(FakeFault);
        }
        if self.fail_once_on == Some(output) {
            self.fail_once_on = None;
            return Err(FakeFault);
        }
        self.writes.push(output);
        Ok(())
    }
}

/// Millisecond counter advanced by hand or by [`ClockDelay`].
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<u32>>);

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u32 {
        self.0.get()
    }

    pub fn set(&self, ms: u32) {
        self.0.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }

    /// A closure usable as the servo's clock.
    pub fn reader(&self) -> impl Fn() -> u32 {
        let cell = Rc::clone(&self.0);
        move || cell.get()
    }

    pub fn delay(&self) -> ClockDelay {
        ClockDelay {
            clock: self.clone(),
            slept_ms: 0,
        }
    }
}

/// Delay that advances a [`ManualClock`] instead of sleeping.
#[derive(Debug)]
pub struct ClockDelay {
    clock: ManualClock,
    pub slept_ms: u64,
}

impl DelayNs for ClockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ms(us / 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.slept_ms += u64::from(ms);
        self.clock.advance(ms);
    }
}
