//! Start/stop workflows and region dispatch
//!
//! Execution is strictly sequential: one region after another, one group
//! after another, one instance after another. The only blocking point is
//! the bounded poll for instances to reach running state during the start
//! workflow. Any API failure propagates immediately and aborts the rest of
//! the invocation.

use crate::config::{Action, Config};
use crate::discovery::discover;
use crate::error::{Result, SchedulerError};
use crate::provider::{AutoScalingOps, ComputeOps, GroupMatch, ProviderFactory};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Interval between instance-state polls during the start workflow.
pub const POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Poll attempts before the start workflow gives up on a group.
pub const MAX_ATTEMPTS: u32 = 30;

/// Process every configured region in order.
pub async fn run(config: &Config, factory: &dyn ProviderFactory) -> Result<()> {
    for region in &config.regions {
        info!(
            "Searching Auto Scaling groups in region {} having tag {}={}.",
            region, config.tag_key, config.tag_value
        );

        let ops = factory.for_region(region).await?;
        let groups = discover(ops.scaling.as_ref(), &config.tag_key, &config.tag_value).await?;

        info!(
            "Found {} Auto Scaling groups in region {} having tag {}={}.",
            groups.len(),
            region,
            config.tag_key,
            config.tag_value
        );

        if groups.is_empty() {
            continue;
        }

        match config.action {
            Action::Start => {
                start_groups(ops.scaling.as_ref(), ops.compute.as_ref(), &groups).await?
            }
            Action::Stop => {
                stop_groups(ops.scaling.as_ref(), ops.compute.as_ref(), &groups).await?
            }
        }
    }

    Ok(())
}

/// Stop the matched groups.
///
/// Scaling processes are suspended before any instance receives a stop
/// call, so the platform does not replace instances as they go down. There
/// is no wait for the instances to reach a stopped state.
pub async fn stop_groups(
    scaling: &dyn AutoScalingOps,
    compute: &dyn ComputeOps,
    groups: &[GroupMatch],
) -> Result<()> {
    info!("Stopping Auto Scaling groups.");
    for group in groups {
        debug!("Stopping Auto Scaling group {}.", group.name);

        scaling.suspend_processes(&group.name).await?;

        for instance_id in &group.instance_ids {
            debug!("Stopping instance {}.", instance_id);
            compute.stop_instance(instance_id).await?;
        }

        info!("Auto Scaling group {} => [STOPPED].", group.name);
    }
    Ok(())
}

/// Start the matched groups.
///
/// Scaling processes resume only after every member instance reports
/// running.
pub async fn start_groups(
    scaling: &dyn AutoScalingOps,
    compute: &dyn ComputeOps,
    groups: &[GroupMatch],
) -> Result<()> {
    info!("Starting Auto Scaling groups.");
    for group in groups {
        debug!("Starting Auto Scaling group {}.", group.name);

        for instance_id in &group.instance_ids {
            debug!("Starting instance {}.", instance_id);
            compute.start_instance(instance_id).await?;
        }

        wait_for_running(compute, &group.instance_ids).await?;

        scaling.resume_processes(&group.name).await?;

        info!("Auto Scaling group {} => [STARTED].", group.name);
    }
    Ok(())
}

/// Poll until every instance reports "running", bounded by `MAX_ATTEMPTS`.
async fn wait_for_running(compute: &dyn ComputeOps, instance_ids: &[String]) -> Result<()> {
    let mut pending: Vec<String> = instance_ids.to_vec();

    for attempt in 1..=MAX_ATTEMPTS {
        let states = compute.instance_states(instance_ids).await?;
        pending = instance_ids
            .iter()
            .filter(|id| {
                !states
                    .iter()
                    .any(|(state_id, state)| state_id == *id && state == "running")
            })
            .cloned()
            .collect();

        if pending.is_empty() {
            return Ok(());
        }

        debug!(
            "{} instances not yet running (attempt {}/{}).",
            pending.len(),
            attempt,
            MAX_ATTEMPTS
        );

        if attempt < MAX_ATTEMPTS {
            sleep(POLL_INTERVAL).await;
        }
    }

    Err(SchedulerError::WaitTimeout {
        attempts: MAX_ATTEMPTS,
        pending,
    })
}
