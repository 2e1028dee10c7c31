//! The built-in bot
//!
//! The bot logs a startup line, runs [`BUILTIN_TASKS`] in order and logs a
//! shutdown line. Each built-in task simulates work with a fixed delay and then
//! logs its completion message.

use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use crate::execution::TaskRunner;
use crate::logger::Logger;
use crate::results::RunReport;
use crate::task::{TaskFn, TaskRef};
use crate::types::{LocalbotResult, TaskError};

pub const STARTUP_MESSAGE: &str = "Bot started.";
pub const SHUTDOWN_MESSAGE: &str = "Bot finished.";

/// One row of the built-in task table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotTask {
    pub name: &'static str,
    /// Simulated work before the completion line
    pub work: Duration,
    pub message: &'static str,
}

pub const BUILTIN_TASKS: [BotTask; 3] = [
    BotTask {
        name: "Check internet connection",
        work: Duration::from_millis(1000),
        message: "Connection OK.",
    },
    BotTask {
        name: "Clean temporary files",
        work: Duration::from_millis(800),
        message: "Temporary files deleted.",
    },
    BotTask {
        name: "Check for updates",
        work: Duration::from_millis(1200),
        message: "No updates available.",
    },
];

impl BotTask {
    pub fn to_task(self) -> TaskRef {
        let BotTask {
            name,
            work,
            message,
        } = self;

        TaskFn::arc(name, move |log: Logger| async move {
            sleep(work).await;
            log.log(message)?;
            Ok::<_, TaskError>(())
        })
    }
}

/// An ordered task list wrapped in startup and shutdown lines
pub struct Bot {
    tasks: Vec<TaskRef>,
}

impl Bot {
    pub fn new(tasks: Vec<TaskRef>) -> Self {
        Self { tasks }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_TASKS.iter().map(|task| task.to_task()).collect())
    }

    /// Task names in execution order
    pub fn plan(&self) -> Vec<&str> {
        self.tasks.iter().map(|task| task.name()).collect()
    }

    pub async fn run(&self, logger: &Logger) -> LocalbotResult<RunReport> {
        logger.log(STARTUP_MESSAGE)?;
        info!(tasks = self.tasks.len(), "bot started");

        let report = TaskRunner::new(logger.clone()).run_all(&self.tasks).await?;

        logger.log(SHUTDOWN_MESSAGE)?;
        info!(
            completed = report.completed(),
            failed = report.failed(),
            "bot finished"
        );
        Ok(report)
    }
}
