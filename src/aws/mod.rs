//! AWS SDK implementations of the provider traits
//!
//! Clients are built per region, on demand, from the default credential
//! provider chain. Regions are processed strictly in configuration order,
//! so nothing is cached across regions.

pub mod autoscaling;
pub mod ec2;

use crate::error::Result;
use crate::provider::{ProviderFactory, RegionOps};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};

/// Builds Auto Scaling and EC2 clients bound to a region.
pub struct AwsProviderFactory;

#[async_trait]
impl ProviderFactory for AwsProviderFactory {
    async fn for_region(&self, region: &str) -> Result<RegionOps> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Ok(RegionOps {
            scaling: Box::new(autoscaling::AutoScalingClient::new(&sdk_config)),
            compute: Box::new(ec2::Ec2Compute::new(&sdk_config)),
        })
    }
}
