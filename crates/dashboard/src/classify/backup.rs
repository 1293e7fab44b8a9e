//! Backup freshness.
//!
//! Every cron-job whose name contains the backup pattern is inspected in
//! provider order and the last one processed determines the observation.
//! With several matching jobs the result is arbitrary but deterministic for a
//! fixed input order.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::DashboardConfig;
use crate::model::{BackupObservation, BackupStatus};
use crate::records::CronJobRecord;

/// Hours elapsed between `then` and `now`.
///
/// Negative when `then` lies in the future (clock skew).
#[must_use]
pub fn age_hours(then: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - then).num_milliseconds() as f64 / 3_600_000.0
}

/// Observe a single matching job.
fn observe(
    job: &CronJobRecord,
    config: &DashboardConfig,
    now: DateTime<Utc>,
) -> BackupObservation {
    let job_id = format!("{}/{}", job.namespace, job.name);

    let Some(last) = job.last_schedule_time else {
        return BackupObservation {
            status: BackupStatus::NeverRan,
            job: Some(job_id),
            last_schedule_time: None,
            age_hours: None,
            error: None,
        };
    };

    let hours = age_hours(last, now);
    let status = if hours < config.backup_max_age_hours {
        BackupStatus::Ok
    } else {
        BackupStatus::Overdue
    };

    BackupObservation {
        status,
        job: Some(job_id),
        last_schedule_time: Some(last),
        age_hours: Some(hours),
        error: None,
    }
}

/// Classify backup freshness from all cron-jobs in the cluster.
#[must_use]
pub fn classify_backup(
    jobs: &[CronJobRecord],
    config: &DashboardConfig,
    now: DateTime<Utc>,
) -> BackupObservation {
    let mut observation = BackupObservation::not_found();

    for job in jobs.iter().filter(|j| config.is_backup_job(&j.name)) {
        debug!(namespace = %job.namespace, name = %job.name, "Inspecting backup cron-job");
        observation = observe(job, config, now);
    }

    observation
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn job(name: &str, hours_ago: Option<i64>) -> CronJobRecord {
        CronJobRecord {
            namespace: "infra".into(),
            name: name.into(),
            last_schedule_time: hours_ago.map(|h| now() - Duration::hours(h)),
        }
    }

    #[test]
    fn test_recent_backup_is_ok() {
        let jobs = [job("nightly-backup", Some(3))];
        let obs = classify_backup(&jobs, &DashboardConfig::default(), now());
        assert_eq!(obs.status, BackupStatus::Ok);
        assert_eq!(obs.job.as_deref(), Some("infra/nightly-backup"));
        assert!((obs.age_hours.unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_boundary() {
        let config = DashboardConfig::default();
        let just_under = CronJobRecord {
            last_schedule_time: Some(now() - Duration::hours(25) + Duration::seconds(1)),
            ..job("backup", None)
        };
        assert_eq!(
            classify_backup(&[just_under], &config, now()).status,
            BackupStatus::Ok
        );

        let exactly = job("backup", Some(25));
        assert_eq!(
            classify_backup(&[exactly], &config, now()).status,
            BackupStatus::Overdue
        );
    }

    #[test]
    fn test_old_backup_is_overdue() {
        let jobs = [job("nightly-backup", Some(30))];
        let obs = classify_backup(&jobs, &DashboardConfig::default(), now());
        assert_eq!(obs.status, BackupStatus::Overdue);
        assert!((obs.age_hours.unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_never_ran() {
        let jobs = [job("nightly-backup", None)];
        let obs = classify_backup(&jobs, &DashboardConfig::default(), now());
        assert_eq!(obs.status, BackupStatus::NeverRan);
        assert!(obs.age_hours.is_none());
        assert!(obs.last_schedule_time.is_none());
    }

    #[test]
    fn test_not_found() {
        let jobs = vec![job("log-rotate", Some(1)), job("Nightly-Backup", Some(1))];
        let obs = classify_backup(&jobs, &DashboardConfig::default(), now());
        assert_eq!(obs.status, BackupStatus::NotFound);
        assert!(obs.job.is_none());

        let obs = classify_backup(&[], &DashboardConfig::default(), now());
        assert_eq!(obs.status, BackupStatus::NotFound);
    }

    #[test]
    fn test_last_matching_job_wins() {
        let jobs = vec![
            job("db-backup", Some(2)),
            job("cleanup", Some(100)),
            job("files-backup", Some(40)),
        ];
        let obs = classify_backup(&jobs, &DashboardConfig::default(), now());
        assert_eq!(obs.job.as_deref(), Some("infra/files-backup"));
        assert_eq!(obs.status, BackupStatus::Overdue);

        let reversed = vec![jobs[2].clone(), jobs[1].clone(), jobs[0].clone()];
        let obs = classify_backup(&reversed, &DashboardConfig::default(), now());
        assert_eq!(obs.job.as_deref(), Some("infra/db-backup"));
        assert_eq!(obs.status, BackupStatus::Ok);
    }

    #[test]
    fn test_last_match_never_ran_overrides_earlier_ok() {
        let jobs = vec![job("db-backup", Some(1)), job("files-backup", None)];
        let obs = classify_backup(&jobs, &DashboardConfig::default(), now());
        assert_eq!(obs.status, BackupStatus::NeverRan);
        assert_eq!(obs.job.as_deref(), Some("infra/files-backup"));
    }

    #[test]
    fn test_future_schedule_counts_as_fresh() {
        let future = CronJobRecord {
            last_schedule_time: Some(now() + Duration::minutes(5)),
            ..job("backup", None)
        };
        let obs = classify_backup(&[future], &DashboardConfig::default(), now());
        assert_eq!(obs.status, BackupStatus::Ok);
        assert!(obs.age_hours.unwrap() < 0.0);
    }
}
