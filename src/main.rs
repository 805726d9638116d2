use asg_scheduler::aws::AwsProviderFactory;
use asg_scheduler::config::Config;
use asg_scheduler::handler::function_handler;
use lambda_runtime::{run, service_fn, Error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        // CloudWatch adds the ingestion time to every line.
        .without_time()
        .init();

    let config = Config::from_env()?;
    let factory = AwsProviderFactory;

    run(service_fn(|event| {
        function_handler(event, &config, &factory)
    }))
    .await
}
