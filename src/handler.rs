//! Lambda handler and success envelope

use crate::config::Config;
use crate::provider::ProviderFactory;
use crate::workflow;
use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use tracing::info;

/// Success envelope returned to the invoking platform.
///
/// Failures are not wrapped: they propagate as `lambda_runtime::Error` and
/// surface as an error-status invocation record.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status_code: 200,
            status: "ok".to_string(),
        }
    }
}

/// Handle one scheduled invocation.
///
/// The EventBridge payload only triggers the run; its contents are not
/// inspected.
pub async fn function_handler(
    _event: LambdaEvent<CloudWatchEvent>,
    config: &Config,
    factory: &dyn ProviderFactory,
) -> Result<StatusResponse, Error> {
    info!("Starting the operation.");

    workflow::run(config, factory).await?;

    info!("Operation completed successfully.");
    Ok(StatusResponse::ok())
}
