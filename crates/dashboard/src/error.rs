//! Error types for cluster access.

use thiserror::Error;

/// Resource kinds queried from the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Nodes,
    CronJobs,
    Pods,
    Deployments,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nodes => write!(f, "nodes"),
            Self::CronJobs => write!(f, "cron-jobs"),
            Self::Pods => write!(f, "pods"),
            Self::Deployments => write!(f, "deployments"),
        }
    }
}

/// Errors that can occur while talking to the cluster.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Kubeconfig could not be loaded or the client could not be built.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A single list query failed.
    #[error("Failed to list {resource}: {source}")]
    Query {
        resource: Resource,
        #[source]
        source: kube::Error,
    },

    /// Any other per-resource failure (used by non-kube providers).
    #[error("Failed to list {resource}: {message}")]
    Provider { resource: Resource, message: String },
}

impl DashboardError {
    /// Resource the error belongs to, if it is a per-resource failure.
    #[must_use]
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Self::Connection(_) => None,
            Self::Query { resource, .. } | Self::Provider { resource, .. } => Some(*resource),
        }
    }

    /// True for failures that must abort the run.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
