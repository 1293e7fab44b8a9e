//! One poll-classify cycle.
//!
//! The four queries run concurrently into independent result slots. Each slot
//! is classified on its own, so one failed query only degrades its section.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::classify::{
    classify_backup, classify_deployments, classify_nodes, classify_pods, overall_verdict,
};
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::model::{BackupObservation, HealthReport, Section, SectionWarning};
use crate::provider::ClusterProvider;

/// Convert a failed slot into a warning, logging it on the way.
fn degrade(section: Section, err: &DashboardError, warnings: &mut Vec<SectionWarning>) {
    warn!(
        section = %section,
        resource = ?err.resource(),
        error = %err,
        "Section degraded"
    );
    warnings.push(SectionWarning {
        section,
        message: err.to_string(),
    });
}

/// Poll the provider once and build the health report.
pub async fn collect_report(
    provider: &dyn ClusterProvider,
    config: &DashboardConfig,
    now: DateTime<Utc>,
) -> HealthReport {
    let (nodes, cron_jobs, pods, deployments) = tokio::join!(
        provider.list_nodes(),
        provider.list_cron_jobs(),
        provider.list_pods(),
        provider.list_deployments(),
    );

    let mut warnings = Vec::new();

    let nodes = match nodes {
        Ok(records) => classify_nodes(&records),
        Err(e) => {
            degrade(Section::Nodes, &e, &mut warnings);
            Vec::new()
        }
    };

    let backup = match cron_jobs {
        Ok(records) => classify_backup(&records, config, now),
        Err(e) => {
            degrade(Section::Backups, &e, &mut warnings);
            BackupObservation::error(e.to_string())
        }
    };

    let (pods, all_healthy) = match pods {
        Ok(records) => {
            let pods = classify_pods(&records, config);
            let healthy = overall_verdict(Some(pods.as_slice()), config);
            (pods, healthy)
        }
        Err(e) => {
            degrade(Section::Pods, &e, &mut warnings);
            (Vec::new(), overall_verdict(None, config))
        }
    };

    let deployments = match deployments {
        Ok(records) => classify_deployments(&records, config),
        Err(e) => {
            degrade(Section::Deployments, &e, &mut warnings);
            Vec::new()
        }
    };

    info!(
        nodes = nodes.len(),
        backup = %backup.status,
        pods = pods.len(),
        deployments = deployments.len(),
        all_healthy,
        "Health report collected"
    );

    HealthReport {
        generated_at: now,
        nodes,
        backup,
        pods,
        deployments,
        all_healthy,
        warnings,
    }
}
