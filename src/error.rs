//! Error types for exam scheduling operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// One or more required input collections is empty.
    #[error("Insufficient data: no {} supplied", .missing.join(", no "))]
    InsufficientData { missing: Vec<&'static str> },

    /// Export was requested before any schedule was generated.
    #[error("No schedule has been generated yet")]
    EmptySchedule,

    #[error("Dataset error: {0}")]
    Dataset(String),
}

impl ScheduleError {
    /// Create a dataset error
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
