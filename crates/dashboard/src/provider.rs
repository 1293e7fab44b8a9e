//! Cluster data provider.
//!
//! The classifier never talks to the API server directly. It consumes typed
//! records from a [`ClusterProvider`], which keeps connection setup and
//! credentials out of the health rules and lets tests feed fixed snapshots.

use std::path::PathBuf;

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::batch::v1::CronJob;
use k8s_openapi::api::core::v1::{Node, Pod};
use kube::api::{Api, ListParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::{debug, info};

use crate::error::{DashboardError, Resource};
use crate::records::{CronJobRecord, DeploymentRecord, NodeRecord, PodRecord};

/// Excludes terminal pods at the source.
pub const NON_TERMINAL_POD_SELECTOR: &str = "status.phase!=Succeeded,status.phase!=Failed";

/// Read-only access to the four resource collections the dashboard needs.
///
/// Each method may fail independently of the others.
#[async_trait]
pub trait ClusterProvider: Send + Sync {
    /// List all nodes.
    async fn list_nodes(&self) -> Result<Vec<NodeRecord>, DashboardError>;

    /// List cron-jobs across all namespaces.
    async fn list_cron_jobs(&self) -> Result<Vec<CronJobRecord>, DashboardError>;

    /// List non-terminal pods across all namespaces.
    async fn list_pods(&self) -> Result<Vec<PodRecord>, DashboardError>;

    /// List deployments across all namespaces.
    async fn list_deployments(&self) -> Result<Vec<DeploymentRecord>, DashboardError>;
}

/// How to locate the cluster.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Explicit kubeconfig path. Falls back to `KUBECONFIG` / `~/.kube/config`.
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use instead of the current one.
    pub context: Option<String>,
}

/// Provider backed by the Kubernetes API.
pub struct KubeProvider {
    client: Client,
}

impl KubeProvider {
    /// Wrap an existing client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Load the local kubeconfig and build a client.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Connection`] if the kubeconfig cannot be read
    /// or the client cannot be created.
    pub async fn connect(options: &ConnectOptions) -> Result<Self, DashboardError> {
        let kube_options = KubeConfigOptions {
            context: options.context.clone(),
            ..Default::default()
        };

        let config = match &options.kubeconfig {
            Some(path) => {
                debug!(path = %path.display(), "Reading kubeconfig");
                let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                    DashboardError::Connection(format!(
                        "failed to read kubeconfig from {}: {e}",
                        path.display()
                    ))
                })?;
                Config::from_custom_kubeconfig(kubeconfig, &kube_options).await
            }
            None => Config::from_kubeconfig(&kube_options).await,
        }
        .map_err(|e| DashboardError::Connection(format!("failed to load kubeconfig: {e}")))?;

        info!(cluster_url = %config.cluster_url, "Connecting to Kubernetes cluster");

        let client = Client::try_from(config).map_err(|e| {
            DashboardError::Connection(format!("failed to create Kubernetes client: {e}"))
        })?;

        Ok(Self::new(client))
    }
}

#[async_trait]
impl ClusterProvider for KubeProvider {
    async fn list_nodes(&self) -> Result<Vec<NodeRecord>, DashboardError> {
        let api: Api<Node> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|source| DashboardError::Query {
                resource: Resource::Nodes,
                source,
            })?;

        debug!(count = list.items.len(), "Listed nodes");
        Ok(list.items.iter().map(NodeRecord::from).collect())
    }

    async fn list_cron_jobs(&self) -> Result<Vec<CronJobRecord>, DashboardError> {
        let api: Api<CronJob> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|source| DashboardError::Query {
                resource: Resource::CronJobs,
                source,
            })?;

        debug!(count = list.items.len(), "Listed cron-jobs");
        Ok(list.items.iter().map(CronJobRecord::from).collect())
    }

    async fn list_pods(&self) -> Result<Vec<PodRecord>, DashboardError> {
        let api: Api<Pod> = Api::all(self.client.clone());
        let lp = ListParams::default().fields(NON_TERMINAL_POD_SELECTOR);
        let list = api
            .list(&lp)
            .await
            .map_err(|source| DashboardError::Query {
                resource: Resource::Pods,
                source,
            })?;

        debug!(count = list.items.len(), "Listed pods");
        Ok(list.items.iter().map(PodRecord::from).collect())
    }

    async fn list_deployments(&self) -> Result<Vec<DeploymentRecord>, DashboardError> {
        let api: Api<Deployment> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|source| DashboardError::Query {
                resource: Resource::Deployments,
                source,
            })?;

        debug!(count = list.items.len(), "Listed deployments");
        Ok(list.items.iter().map(DeploymentRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pod_selector_excludes_terminal_phases() {
        assert!(NON_TERMINAL_POD_SELECTOR.contains("status.phase!=Succeeded"));
        assert!(NON_TERMINAL_POD_SELECTOR.contains("status.phase!=Failed"));
    }

    #[tokio::test]
    async fn test_connect_with_missing_kubeconfig_is_connection_error() {
        let options = ConnectOptions {
            kubeconfig: Some(PathBuf::from("/nonexistent/dashboard/kubeconfig")),
            context: None,
        };

        let err = KubeProvider::connect(&options).await.err().unwrap();
        assert!(err.is_connection());
        assert!(err.to_string().contains("/nonexistent/dashboard/kubeconfig"));
    }
}
