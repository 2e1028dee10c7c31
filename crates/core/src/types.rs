use thiserror::Error;

/// The main error type for localbot operations
#[derive(Debug, Error)]
pub enum LocalbotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for localbot operations
pub type LocalbotResult<T> = Result<T, LocalbotError>;

/// Failure raised by a task action.
///
/// Carries only a human-readable message; the runner logs it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TaskError {
    message: String,
}

impl TaskError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<LocalbotError> for TaskError {
    fn from(err: LocalbotError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<&str> for TaskError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for TaskError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_error_displays_message_verbatim() {
        let err = TaskError::new("disk full");
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(err.message(), "disk full");
    }

    #[test]
    fn test_logger_failure_becomes_task_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TaskError = LocalbotError::from(io).into();
        assert_eq!(err.message(), "IO error: pipe closed");
    }
}
