//! asg-scheduler library
//!
//! This library provides the workflow logic for the asg-scheduler Lambda.

pub mod aws;
pub mod config;
pub mod discovery;
pub mod error;
pub mod handler;
pub mod provider;
pub mod workflow;

// Re-export commonly used types
pub use config::{Action, Config};
pub use provider::{GroupCandidate, GroupMatch};
