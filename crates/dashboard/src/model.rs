//! Classified snapshots and the aggregate health report.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Sentinel shown for allocatable quantities the node did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Three-level severity used for per-row indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Ok,
    Warn,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Readiness of a single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub name: String,
    /// True iff a `Ready` condition has status exactly `"True"`.
    pub ready: bool,
    pub cpu_allocatable: String,
    pub memory_allocatable: String,
}

/// Freshness verdict for the backup cron-job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupStatus {
    /// Last schedule is younger than the max age.
    Ok,
    /// Last schedule is at or beyond the max age.
    Overdue,
    /// A backup job exists but has never been scheduled.
    NeverRan,
    /// No cron-job name matched the backup pattern.
    NotFound,
    /// The cron-job query failed.
    Error,
}

impl BackupStatus {
    /// Severity used for the block border.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Ok => Severity::Ok,
            Self::Overdue | Self::Error => Severity::Error,
            Self::NeverRan | Self::NotFound => Severity::Warn,
        }
    }
}

impl std::fmt::Display for BackupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Overdue => write!(f, "overdue"),
            Self::NeverRan => write!(f, "never_ran"),
            Self::NotFound => write!(f, "not_found"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Observation of the selected backup cron-job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackupObservation {
    pub status: BackupStatus,
    /// `namespace/name` of the job the observation came from.
    pub job: Option<String>,
    pub last_schedule_time: Option<DateTime<Utc>>,
    pub age_hours: Option<f64>,
    /// Query error, set only when `status` is `Error`.
    pub error: Option<String>,
}

impl BackupObservation {
    /// Observation for a run where no cron-job matched.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            status: BackupStatus::NotFound,
            job: None,
            last_schedule_time: None,
            age_hours: None,
            error: None,
        }
    }

    /// Observation for a failed cron-job query.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: BackupStatus::Error,
            error: Some(message.into()),
            ..Self::not_found()
        }
    }
}

/// Pod lifecycle phase as far as the classifier cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodPhase {
    Running,
    Pending,
    /// Any other phase string, including an absent one (`Unknown`).
    Other(String),
}

impl PodPhase {
    /// Parse a raw phase string from the API.
    #[must_use]
    pub fn parse(phase: Option<&str>) -> Self {
        match phase {
            Some("Running") => Self::Running,
            Some("Pending") => Self::Pending,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Other("Unknown".to_string()),
        }
    }
}

impl std::fmt::Display for PodPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::Pending => write!(f, "Pending"),
            Self::Other(phase) => write!(f, "{phase}"),
        }
    }
}

impl Serialize for PodPhase {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Health of a single pod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodSnapshot {
    pub namespace: String,
    pub name: String,
    pub phase: PodPhase,
    /// Sum of all container restart counts.
    pub restart_count: u32,
    pub severity: Severity,
}

/// Rollout state of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloutState {
    Ready,
    Progressing,
    NotReady,
}

impl RolloutState {
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Ready => Severity::Ok,
            Self::Progressing => Severity::Warn,
            Self::NotReady => Severity::Error,
        }
    }
}

/// Replica counts and rollout state of a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentSnapshot {
    pub namespace: String,
    pub name: String,
    pub desired_replicas: i32,
    pub ready_replicas: i32,
    pub updated_replicas: i32,
    pub rollout_state: RolloutState,
}

/// Report sections, one per resource query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Nodes,
    Backups,
    Pods,
    Deployments,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nodes => write!(f, "nodes"),
            Self::Backups => write!(f, "backups"),
            Self::Pods => write!(f, "pods"),
            Self::Deployments => write!(f, "deployments"),
        }
    }
}

/// A non-fatal failure that degraded one section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionWarning {
    pub section: Section,
    pub message: String,
}

/// Point-in-time health report for one run.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub generated_at: DateTime<Utc>,
    /// Provider order.
    pub nodes: Vec<NodeSnapshot>,
    pub backup: BackupObservation,
    /// Sorted by namespace, then name.
    pub pods: Vec<PodSnapshot>,
    /// Provider order.
    pub deployments: Vec<DeploymentSnapshot>,
    pub all_healthy: bool,
    pub warnings: Vec<SectionWarning>,
}

impl HealthReport {
    /// True when every node reported `Ready=True` (vacuously true without nodes).
    #[must_use]
    pub fn all_nodes_ready(&self) -> bool {
        self.nodes.iter().all(|n| n.ready)
    }
}
