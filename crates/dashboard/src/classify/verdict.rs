//! Overall healthy / needs-attention verdict.
//!
//! Only pods can lower the verdict. Node readiness, backup freshness and
//! deployment rollout state are shown but never counted.

use crate::config::DashboardConfig;
use crate::model::{PodSnapshot, Severity};

/// Reduce classified pods to a single flag.
///
/// `None` means the pod query failed, which always yields `false`.
#[must_use]
pub fn overall_verdict(pods: Option<&[PodSnapshot]>, config: &DashboardConfig) -> bool {
    let Some(pods) = pods else {
        return false;
    };

    pods.iter().all(|pod| {
        pod.severity != Severity::Error && pod.restart_count <= config.restart_threshold
    })
}
