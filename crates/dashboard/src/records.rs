//! Typed resource records at the provider boundary.
//!
//! Each Kubernetes object is reduced to the handful of fields the classifier
//! reads, with defaults applied here so the classifier never deals with
//! partially-populated API objects.

use chrono::{DateTime, Utc};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::batch::v1::CronJob;
use k8s_openapi::api::core::v1::{Node, Pod};

/// A typed status condition (e.g. `Ready=True`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionRecord {
    /// Condition type: "Ready", "MemoryPressure", "DiskPressure", etc.
    pub condition_type: String,
    /// Status: "True", "False", "Unknown"
    pub status: String,
}

/// Node as seen by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeRecord {
    pub name: String,
    pub conditions: Vec<ConditionRecord>,
    /// Allocatable CPU quantity, if reported.
    pub cpu_allocatable: Option<String>,
    /// Allocatable memory quantity, if reported.
    pub memory_allocatable: Option<String>,
}

/// Cron-job as seen by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CronJobRecord {
    pub namespace: String,
    pub name: String,
    pub last_schedule_time: Option<DateTime<Utc>>,
}

/// Pod as seen by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodRecord {
    pub namespace: String,
    pub name: String,
    /// Raw phase string; `None` when the API omitted it.
    pub phase: Option<String>,
    /// One entry per container status; empty when none were reported.
    pub container_restart_counts: Vec<u32>,
}

/// Deployment as seen by the classifier.
///
/// Replica counts stay optional here; the classifier treats unset as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentRecord {
    pub namespace: String,
    pub name: String,
    pub desired_replicas: Option<i32>,
    pub ready_replicas: Option<i32>,
    pub updated_replicas: Option<i32>,
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        let status = node.status.as_ref();

        let conditions = status
            .and_then(|s| s.conditions.as_ref())
            .map(|conditions| {
                conditions
                    .iter()
                    .map(|c| ConditionRecord {
                        condition_type: c.type_.clone(),
                        status: c.status.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let allocatable = status.and_then(|s| s.allocatable.as_ref());
        let quantity = |key: &str| allocatable.and_then(|a| a.get(key)).map(|q| q.0.clone());

        Self {
            name: node.metadata.name.clone().unwrap_or_default(),
            conditions,
            cpu_allocatable: quantity("cpu"),
            memory_allocatable: quantity("memory"),
        }
    }
}

impl From<&CronJob> for CronJobRecord {
    fn from(job: &CronJob) -> Self {
        Self {
            namespace: job.metadata.namespace.clone().unwrap_or_default(),
            name: job.metadata.name.clone().unwrap_or_default(),
            // Kubernetes `Time` always carries a zone; chrono keeps it in UTC.
            last_schedule_time: job
                .status
                .as_ref()
                .and_then(|s| s.last_schedule_time.as_ref())
                .map(|t| t.0),
        }
    }
}

impl From<&Pod> for PodRecord {
    fn from(pod: &Pod) -> Self {
        let status = pod.status.as_ref();

        let container_restart_counts = status
            .and_then(|s| s.container_statuses.as_ref())
            .map(|statuses| {
                statuses
                    .iter()
                    .map(|c| u32::try_from(c.restart_count).unwrap_or(0))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            namespace: pod.metadata.namespace.clone().unwrap_or_default(),
            name: pod.metadata.name.clone().unwrap_or_default(),
            phase: status.and_then(|s| s.phase.clone()),
            container_restart_counts,
        }
    }
}

impl From<&Deployment> for DeploymentRecord {
    fn from(deploy: &Deployment) -> Self {
        let status = deploy.status.as_ref();

        Self {
            namespace: deploy.metadata.namespace.clone().unwrap_or_default(),
            name: deploy.metadata.name.clone().unwrap_or_default(),
            desired_replicas: deploy.spec.as_ref().and_then(|s| s.replicas),
            ready_replicas: status.and_then(|s| s.ready_replicas),
            updated_replicas: status.and_then(|s| s.updated_replicas),
        }
    }
}
