use thiserror::Error;

/// Validation failures caught at the input boundary, before any formula runs.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("desired percentage must be within (0, 100], got {0}")]
    PercentOutOfRange(f64),
    #[error("attended classes ({attended}) cannot exceed total classes ({total})")]
    AttendedExceedsTotal { attended: u32, total: u32 },
    #[error("course index {index} is out of range for {count} courses")]
    CourseIndex { index: usize, count: usize },
}

/// Failures from the scraper backend, distinct from local validation errors.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered with an error payload; the message is user-facing.
    #[error("{0}")]
    Rejected(String),
    #[error("could not reach the scraper backend: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("a login attempt is already in flight")]
    LoginInFlight,
}
