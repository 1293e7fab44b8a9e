//! Classification thresholds and filters.

/// Namespaces never shown in the pod and deployment sections.
pub const DEFAULT_EXCLUDED_NAMESPACES: &[&str] = &["kube-system", "kube-node-lease", "tailscale"];

/// Substring a cron-job name must contain to count as a backup job.
pub const DEFAULT_BACKUP_NAME_PATTERN: &str = "backup";

/// Backups are expected daily; one extra hour of grace on top.
pub const DEFAULT_BACKUP_MAX_AGE_HOURS: f64 = 25.0;

/// Restart count above which a pod marks the run unhealthy.
pub const DEFAULT_RESTART_THRESHOLD: u32 = 5;

/// Configuration for the health classifier.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Namespaces excluded from pod and deployment classification.
    pub excluded_namespaces: Vec<String>,
    /// Case-sensitive substring identifying backup cron-jobs.
    pub backup_name_pattern: String,
    /// Backups at or beyond this age (hours) are overdue.
    pub backup_max_age_hours: f64,
    /// Pods restarting more than this many times are flagged.
    pub restart_threshold: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            excluded_namespaces: DEFAULT_EXCLUDED_NAMESPACES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            backup_name_pattern: DEFAULT_BACKUP_NAME_PATTERN.to_string(),
            backup_max_age_hours: DEFAULT_BACKUP_MAX_AGE_HOURS,
            restart_threshold: DEFAULT_RESTART_THRESHOLD,
        }
    }
}

impl DashboardConfig {
    /// Check if a namespace is on the denylist.
    #[must_use]
    pub fn is_excluded_namespace(&self, namespace: &str) -> bool {
        self.excluded_namespaces.iter().any(|ns| ns == namespace)
    }

    /// Check if a cron-job name identifies a backup job.
    #[must_use]
    pub fn is_backup_job(&self, name: &str) -> bool {
        name.contains(&self.backup_name_pattern)
    }
}
