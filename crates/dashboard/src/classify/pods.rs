//! Pod health.

use crate::config::DashboardConfig;
use crate::model::{PodPhase, PodSnapshot, Severity};
use crate::records::PodRecord;

/// Severity derived from the phase alone.
///
/// Restart counts are handled by the verdict, not here.
#[must_use]
pub fn pod_severity(phase: &PodPhase) -> Severity {
    match phase {
        PodPhase::Running => Severity::Ok,
        PodPhase::Pending => Severity::Warn,
        PodPhase::Other(_) => Severity::Error,
    }
}

/// Classify pods outside the excluded namespaces, sorted by namespace then name.
#[must_use]
pub fn classify_pods(pods: &[PodRecord], config: &DashboardConfig) -> Vec<PodSnapshot> {
    let mut snapshots: Vec<PodSnapshot> = pods
        .iter()
        .filter(|pod| !config.is_excluded_namespace(&pod.namespace))
        .map(|pod| {
            let phase = PodPhase::parse(pod.phase.as_deref());
            let severity = pod_severity(&phase);
            PodSnapshot {
                namespace: pod.namespace.clone(),
                name: pod.name.clone(),
                phase,
                restart_count: pod
                    .container_restart_counts
                    .iter()
                    .fold(0u32, |acc, n| acc.saturating_add(*n)),
                severity,
            }
        })
        .collect();

    // Stable sort; ties keep provider order
    snapshots.sort_by(|a, b| (&a.namespace, &a.name).cmp(&(&b.namespace, &b.name)));
    snapshots
}
