use thiserror::Error;

use crate::workout::WorkoutId;

/// Shown to the user whenever a submitted form is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Inputs have to be positive numbers!";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("Inputs have to be positive numbers! ({field})")]
    InvalidInput { field: &'static str },

    #[error("A workout with id {0} already exists")]
    DuplicateId(WorkoutId),

    #[error("No workout with id {0}")]
    NotFound(WorkoutId),

    #[error("No map location selected for the new workout")]
    NoPendingLocation,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Text for the blocking alert shown in the browser.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { .. } => INVALID_INPUT_MESSAGE.to_owned(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
