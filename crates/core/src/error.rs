use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutomationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The alert condition uses a shape this library cannot represent (e.g. `range`).
    #[error("Unsupported alert condition shape: {0}")]
    UnsupportedConditionShape(String),

    /// The alert payload carries neither a comparison nor a relative condition.
    #[error("Alert payload has no condition")]
    MissingCondition,

    /// The automation is not in a state the operation can work on.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result alias for automation operations.
pub type Result<T> = std::result::Result<T, AutomationError>;
