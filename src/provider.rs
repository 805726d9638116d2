//! Trait seams over the scaling and compute APIs
//!
//! The workflow depends on these traits rather than on SDK clients so the
//! start/stop logic can be driven by mocks in tests. The concrete AWS
//! implementations live in `crate::aws`.

use crate::error::Result;
use async_trait::async_trait;

/// A group as returned by the listing API, before tag filtering.
#[derive(Debug, Clone)]
pub struct GroupCandidate {
    pub name: String,
    pub tags: Vec<(String, String)>,
    pub instance_ids: Vec<String>,
}

/// A group selected for the start/stop workflow.
///
/// Built transiently per invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMatch {
    pub name: String,
    pub instance_ids: Vec<String>,
}

/// Auto Scaling group operations for one region.
#[async_trait]
pub trait AutoScalingOps: Send + Sync {
    /// List every group in the region, following pagination.
    async fn list_groups(&self) -> Result<Vec<GroupCandidate>>;

    /// Suspend the group's scaling processes.
    async fn suspend_processes(&self, group_name: &str) -> Result<()>;

    /// Resume the group's scaling processes.
    async fn resume_processes(&self, group_name: &str) -> Result<()>;
}

/// Instance operations for one region.
#[async_trait]
pub trait ComputeOps: Send + Sync {
    async fn start_instance(&self, instance_id: &str) -> Result<()>;

    async fn stop_instance(&self, instance_id: &str) -> Result<()>;

    /// Current state name for each of the given instances, e.g. "running".
    async fn instance_states(&self, instance_ids: &[String]) -> Result<Vec<(String, String)>>;
}

/// Client pair bound to a single region.
pub struct RegionOps {
    pub scaling: Box<dyn AutoScalingOps>,
    pub compute: Box<dyn ComputeOps>,
}

/// Builds region-bound clients on demand, in region order.
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    async fn for_region(&self, region: &str) -> Result<RegionOps>;
}
