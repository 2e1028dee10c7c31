//! Task execution module
//!
//! This module runs tasks one after another, wrapping each in start/finish
//! log lines and containing its failures.

pub mod runner;

pub use runner::TaskRunner;
