//! Sequential task runner
//!
//! Each task is bracketed by a start and a finish line. A failing action is
//! reported with one error line and then absorbed, so the next task always
//! runs. The only error that leaves the runner is a failure to write a line.

use tokio::time::Instant;
use tracing::{debug, debug_span, warn, Instrument};

use crate::logger::Logger;
use crate::results::{RunReport, TaskOutcome};
use crate::task::{Task, TaskRef};
use crate::types::{LocalbotError, LocalbotResult};

pub fn start_message(task_name: &str) -> String {
    format!("Starting task: {}", task_name)
}

pub fn finish_message(task_name: &str) -> String {
    format!("Finished task: {}", task_name)
}

pub fn error_message(task_name: &str, failure: &str) -> String {
    format!("Error during task '{}': {}", task_name, failure)
}

/// Runs tasks in order against a shared logger
pub struct TaskRunner {
    logger: Logger,
}

impl TaskRunner {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Run every task in declaration order, each to completion before the next
    pub async fn run_all(&self, tasks: &[TaskRef]) -> LocalbotResult<RunReport> {
        let mut report = RunReport::default();
        for task in tasks {
            let outcome = self.run_task(task.as_ref()).await?;
            report.record(task.name(), outcome);
        }

        debug!(
            completed = report.completed(),
            failed = report.failed(),
            "run finished"
        );
        Ok(report)
    }

    /// Run a single task with start/finish logging and failure containment
    pub async fn run_task(&self, task: &dyn Task) -> LocalbotResult<TaskOutcome> {
        let name = task.name();
        let span = debug_span!("task", name = %name);

        async move {
            self.logger.log(&start_message(name))?;
            let started = Instant::now();

            let outcome = match task.run(self.logger.clone()).await {
                Ok(()) => {
                    debug!(elapsed = ?started.elapsed(), "task completed");
                    TaskOutcome::Completed
                }
                Err(err) => {
                    warn!(error = %err, elapsed = ?started.elapsed(), "task failed");
                    self.logger.error(&error_message(name, err.message()))?;
                    TaskOutcome::Failed {
                        message: err.message().to_string(),
                    }
                }
            };

            self.logger.log(&finish_message(name))?;
            Ok::<_, LocalbotError>(outcome)
        }
        .instrument(span)
        .await
    }
}
