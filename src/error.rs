//! Error types for asg-scheduler
//!
//! Library code uses `crate::error::Result<T>` which returns `SchedulerError`.
//! The Lambda binary converts into `lambda_runtime::Error` at the handler
//! boundary, so the full error chain ends up in the invocation record.
//!
//! There is no retry logic on top of what the AWS SDK's default client
//! configuration already provides: any API failure propagates out of the
//! workflow and terminates the invocation.

use thiserror::Error;

/// Main error type for asg-scheduler
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("AWS SDK error: {0}")]
    Aws(String),

    #[error("Instances not running after {attempts} poll attempts: {pending:?}")]
    WaitTimeout { attempts: u32, pending: Vec<String> },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SchedulerError>;
