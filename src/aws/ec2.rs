//! EC2 implementation of `ComputeOps`

use crate::error::{Result, SchedulerError};
use crate::provider::ComputeOps;
use async_trait::async_trait;
use aws_sdk_ec2::Client;

pub struct Ec2Compute {
    client: Client,
}

impl Ec2Compute {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl ComputeOps for Ec2Compute {
    async fn start_instance(&self, instance_id: &str) -> Result<()> {
        self.client
            .start_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| {
                SchedulerError::Aws(format!("Failed to start instance {}: {}", instance_id, e))
            })?;
        Ok(())
    }

    async fn stop_instance(&self, instance_id: &str) -> Result<()> {
        self.client
            .stop_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| {
                SchedulerError::Aws(format!("Failed to stop instance {}: {}", instance_id, e))
            })?;
        Ok(())
    }

    async fn instance_states(&self, instance_ids: &[String]) -> Result<Vec<(String, String)>> {
        let response = self
            .client
            .describe_instances()
            .set_instance_ids(Some(instance_ids.to_vec()))
            .send()
            .await
            .map_err(|e| SchedulerError::Aws(format!("Failed to describe instances: {}", e)))?;

        let states = response
            .reservations()
            .iter()
            .flat_map(|reservation| reservation.instances())
            .filter_map(|instance| {
                let id = instance.instance_id()?.to_string();
                let state = instance
                    .state()
                    .and_then(|s| s.name())
                    .map(|name| name.as_str().to_string())?;
                Some((id, state))
            })
            .collect();

        Ok(states)
    }
}
