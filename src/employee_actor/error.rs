//! Error types for employee operations.

use crate::model::EmployeeId;
use thiserror::Error;

/// Errors that can occur during employee operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    /// The requested employee does not exist.
    #[error("Could not find employee {0}")]
    NotFound(EmployeeId),

    /// The employee data provided is invalid.
    #[error("Employee validation error: {0}")]
    Validation(String),

    /// The employee store could not be reached.
    #[error("Employee store error: {0}")]
    Store(String),
}
