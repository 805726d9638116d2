//! Auto Scaling implementation of `AutoScalingOps`

use crate::error::{Result, SchedulerError};
use crate::provider::{AutoScalingOps, GroupCandidate};
use async_trait::async_trait;
use aws_sdk_autoscaling::Client;

pub struct AutoScalingClient {
    client: Client,
}

impl AutoScalingClient {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl AutoScalingOps for AutoScalingClient {
    async fn list_groups(&self) -> Result<Vec<GroupCandidate>> {
        let mut pages = self
            .client
            .describe_auto_scaling_groups()
            .into_paginator()
            .items()
            .send();

        let mut candidates = Vec::new();
        while let Some(item) = pages.next().await {
            let group = item.map_err(|e| {
                SchedulerError::Aws(format!("Failed to describe Auto Scaling groups: {}", e))
            })?;

            let name = match group.auto_scaling_group_name() {
                Some(name) => name.to_string(),
                None => continue,
            };
            let tags = group
                .tags()
                .iter()
                .filter_map(|tag| Some((tag.key()?.to_string(), tag.value()?.to_string())))
                .collect();
            let instance_ids = group
                .instances()
                .iter()
                .filter_map(|instance| instance.instance_id().map(str::to_string))
                .collect();

            candidates.push(GroupCandidate {
                name,
                tags,
                instance_ids,
            });
        }

        Ok(candidates)
    }

    async fn suspend_processes(&self, group_name: &str) -> Result<()> {
        // No process types given, so all scaling processes are suspended.
        self.client
            .suspend_processes()
            .auto_scaling_group_name(group_name)
            .send()
            .await
            .map_err(|e| {
                SchedulerError::Aws(format!(
                    "Failed to suspend processes for group {}: {}",
                    group_name, e
                ))
            })?;
        Ok(())
    }

    async fn resume_processes(&self, group_name: &str) -> Result<()> {
        self.client
            .resume_processes()
            .auto_scaling_group_name(group_name)
            .send()
            .await
            .map_err(|e| {
                SchedulerError::Aws(format!(
                    "Failed to resume processes for group {}: {}",
                    group_name, e
                ))
            })?;
        Ok(())
    }
}
