//! Named units of work
//!
//! A [`Task`] is a name plus a fallible action. [`TaskFn`] builds one from a
//! closure that receives a [`Logger`] handle and returns a fresh future on
//! every call.

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::logger::Logger;
use crate::types::TaskError;

/// Boxed future returned by [`Task::run`]
pub type BoxTaskFuture = Pin<Box<dyn Future<Output = Result<(), TaskError>> + Send + 'static>>;

/// Shared handle to a task
pub type TaskRef = Arc<dyn Task>;

pub trait Task: Send + Sync {
    fn name(&self) -> &str;

    /// Start the action. The logger is the one the runner writes to.
    fn run(&self, logger: Logger) -> BoxTaskFuture;
}

/// Closure-backed task
pub struct TaskFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> TaskFn<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Create the task and return it as a [`TaskRef`].
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F, Fut> Task for TaskFn<F>
where
    F: Fn(Logger) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, logger: Logger) -> BoxTaskFuture {
        Box::pin((self.f)(logger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{FixedClock, MemorySink};
    use chrono::NaiveTime;

    fn logger(sink: &MemorySink) -> Logger {
        Logger::new(sink.clone(), FixedClock(NaiveTime::from_hms_opt(0, 0, 0).unwrap()))
    }

    #[tokio::test]
    async fn test_task_fn_runs_closure_with_logger() {
        let sink = MemorySink::new();
        let task: TaskRef = TaskFn::arc("greet", |log: Logger| async move {
            log.log("hello")?;
            Ok::<_, TaskError>(())
        });

        assert_eq!(task.name(), "greet");
        task.run(logger(&sink)).await.unwrap();
        assert_eq!(sink.messages(), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_each_run_builds_a_fresh_future() {
        let sink = MemorySink::new();
        let task = TaskFn::new("twice", |log: Logger| async move {
            log.log("tick")?;
            Ok::<_, TaskError>(())
        });

        task.run(logger(&sink)).await.unwrap();
        task.run(logger(&sink)).await.unwrap();
        assert_eq!(sink.messages(), vec!["tick", "tick"]);
    }

    #[tokio::test]
    async fn test_failure_is_returned_to_caller() {
        let sink = MemorySink::new();
        let task = TaskFn::new("broken", |_log: Logger| async {
            Err::<(), _>(TaskError::new("X"))
        });

        let err = task.run(logger(&sink)).await.unwrap_err();
        assert_eq!(err.message(), "X");
    }
}
