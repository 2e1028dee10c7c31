//! Result types for task runs
//!
//! Outcomes are informational: a failed task never changes how the run
//! continues or how the process exits.

/// What happened when a single task ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Completed,
    Failed { message: String },
}

impl TaskOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, TaskOutcome::Failed { .. })
    }
}

/// Outcome of every task in a run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<(String, TaskOutcome)>,
}

impl RunReport {
    pub fn record(&mut self, task_name: &str, outcome: TaskOutcome) {
        self.outcomes.push((task_name.to_string(), outcome));
    }

    pub fn completed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_failed())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_failed())
            .count()
    }
}
