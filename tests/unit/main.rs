//! Unit test harness for smart-servo.
//!
//! This module organizes configuration tests that go through the public API.

mod config_parsing;
mod config_validation;
