//! localbot Core Library
//!
//! This is the core library for the localbot demo bot. It runs an ordered
//! list of named tasks, logging a timestamped line when each one starts and
//! finishes and containing any failure so the remaining tasks still run.
//!
//! ## Architecture
//!
//! - [`bot`] - The built-in task table and the startup/shutdown sequence
//! - [`execution`] - Sequential task runner with failure containment
//! - [`task`] - The [`Task`](task::Task) trait and closure-backed tasks
//! - [`logger`] - `[time] message` line writer and clocks
//! - [`results`] - Per-task outcomes and run reports
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use localbot_core::{Bot, Logger};
//!
//! # async fn example() -> localbot_core::LocalbotResult<()> {
//! let report = Bot::builtin().run(&Logger::stdout()).await?;
//! assert_eq!(report.failed(), 0);
//! # Ok(())
//! # }
//! ```

pub mod bot;
pub mod execution;
pub mod logger;
pub mod results;
pub mod task;
pub mod types;

// Re-export the main types for easier usage
pub use bot::Bot;
pub use logger::Logger;
pub use types::{LocalbotError, LocalbotResult, TaskError};
