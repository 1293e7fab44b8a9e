//! Infrastructure health dashboard.
//!
//! Polls a Kubernetes cluster once and turns the raw resource state into a
//! point-in-time health report:
//!
//! - node readiness
//! - scheduled-backup freshness
//! - deployment rollout state
//! - per-pod health with restart counts
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐   records   ┌──────────────┐   HealthReport   ┌───────────┐
//! │ ClusterProvider  │────────────►│   classify   │─────────────────►│    ui     │
//! │ (KubeProvider)   │             │ (pure rules) │                  │ (terminal)│
//! └──────────────────┘             └──────────────┘                  └───────────┘
//! ```
//!
//! The four resource queries are independent. A failed query degrades its own
//! section of the report and never blocks the others.
//!
//! ## Example
//!
//! ```ignore
//! use dashboard::{collect_report, ConnectOptions, DashboardConfig, KubeProvider};
//!
//! let provider = KubeProvider::connect(&ConnectOptions::default()).await?;
//! let report = collect_report(&provider, &DashboardConfig::default(), chrono::Utc::now()).await;
//! dashboard::ui::print_report(&report, &DashboardConfig::default());
//! ```

pub mod classify;
pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod records;
pub mod ui;

pub use collector::collect_report;
pub use config::DashboardConfig;
pub use error::{DashboardError, Resource};
pub use model::{
    BackupObservation, BackupStatus, DeploymentSnapshot, HealthReport, NodeSnapshot, PodPhase,
    PodSnapshot, RolloutState, Section, SectionWarning, Severity,
};
pub use provider::{ClusterProvider, ConnectOptions, KubeProvider};
pub use records::{ConditionRecord, CronJobRecord, DeploymentRecord, NodeRecord, PodRecord};
