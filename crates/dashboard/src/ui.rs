//! Terminal presenter for the health report.
//!
//! Rendering only: every decision is already made by the classifier.

use std::fmt::Write as _;
use std::time::Duration;

use colored::{Color, Colorize};
use comfy_table::{Attribute, Cell, CellAlignment, Color as TableColor, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::DashboardConfig;
use crate::model::{
    BackupObservation, BackupStatus, DeploymentSnapshot, HealthReport, NodeSnapshot, PodSnapshot,
    RolloutState, Severity,
};

pub const ICON_OK: &str = "🟢";
pub const ICON_WARN: &str = "🟡";
pub const ICON_ERROR: &str = "🔴";
pub const ICON_UNKNOWN: &str = "⚪";

const RULE_WIDTH: usize = 60;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Ok => Color::Green,
        Severity::Warn => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Ok => ICON_OK,
        Severity::Warn => ICON_WARN,
        Severity::Error => ICON_ERROR,
    }
}

/// Render a titled block with a colored left border.
fn block(title: &str, lines: &[String], border: Color) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "┌─".color(border), title.bold());
    for line in lines {
        let _ = writeln!(out, "{} {line}", "│".color(border));
    }
    let _ = writeln!(out, "{}", format!("└{}", "─".repeat(RULE_WIDTH)).color(border));
    out
}

/// One line per node.
#[must_use]
pub fn node_line(node: &NodeSnapshot) -> String {
    let icon = if node.ready { ICON_OK } else { ICON_ERROR };
    format!(
        "{icon} {} (CPU: {}, Mem: {})",
        node.name, node.cpu_allocatable, node.memory_allocatable
    )
}

/// Text shown inside the backup block.
#[must_use]
pub fn backup_line(backup: &BackupObservation) -> String {
    let when = backup
        .last_schedule_time
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default();
    let hours = backup.age_hours.unwrap_or_default();

    match backup.status {
        BackupStatus::Ok => format!("{ICON_OK} Last Backup: {hours:.1} hours ago ({when})"),
        BackupStatus::Overdue => {
            format!("{ICON_ERROR} Last Backup: {hours:.1} hours ago! ({when})")
        }
        BackupStatus::NeverRan => format!("{ICON_WARN} Backup Job exists but never ran"),
        BackupStatus::NotFound => format!("{ICON_UNKNOWN} No Backup Job Found"),
        BackupStatus::Error => format!(
            "{ICON_ERROR} Error checking backups: {}",
            backup.error.as_deref().unwrap_or("unknown error")
        ),
    }
}

/// Status text for a deployment row, without color.
#[must_use]
pub fn deployment_status(deploy: &DeploymentSnapshot) -> String {
    let icon = severity_icon(deploy.rollout_state.severity());
    match deploy.rollout_state {
        RolloutState::Ready => format!("{icon} Ready"),
        RolloutState::Progressing => format!(
            "{icon} Progressing ({}/{})",
            deploy.ready_replicas, deploy.desired_replicas
        ),
        RolloutState::NotReady => format!(
            "{icon} Not Ready ({}/{})",
            deploy.ready_replicas, deploy.desired_replicas
        ),
    }
}

fn deployment_line(deploy: &DeploymentSnapshot) -> String {
    let color = severity_color(deploy.rollout_state.severity());
    format!(
        "  {} {}/{}",
        deployment_status(deploy).color(color),
        deploy.namespace,
        deploy.name
    )
}

/// Restart counts above the threshold are highlighted in red.
fn restart_color(restart_count: u32, config: &DashboardConfig) -> TableColor {
    if restart_count > config.restart_threshold {
        TableColor::Red
    } else {
        TableColor::White
    }
}

/// Build the pod table.
#[must_use]
pub fn pod_table(pods: &[PodSnapshot], config: &DashboardConfig) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header = |name: &str| {
        Cell::new(name)
            .fg(TableColor::Magenta)
            .add_attribute(Attribute::Bold)
    };
    table.set_header(vec![
        header("Namespace"),
        header("Pod Name"),
        header("Status"),
        header("Restarts"),
    ]);

    for pod in pods {
        let status_color = match pod.severity {
            Severity::Ok => TableColor::Green,
            Severity::Warn => TableColor::Yellow,
            Severity::Error => TableColor::Red,
        };

        table.add_row(vec![
            Cell::new(&pod.namespace).fg(TableColor::Cyan),
            Cell::new(&pod.name).fg(TableColor::Green),
            Cell::new(format!("{} {}", severity_icon(pod.severity), pod.phase)).fg(status_color),
            Cell::new(pod.restart_count)
                .fg(restart_color(pod.restart_count, config))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Closing verdict text.
#[must_use]
pub fn verdict_line(all_healthy: bool) -> &'static str {
    if all_healthy {
        "✓ All systems operational"
    } else {
        "⚠ Check warnings above"
    }
}

/// Render the whole report as terminal text.
#[must_use]
pub fn render_report(report: &HealthReport, config: &DashboardConfig) -> String {
    let mut out = String::new();

    for warning in &report.warnings {
        let _ = writeln!(
            out,
            "{} {}",
            format!("Warning ({}):", warning.section).yellow().bold(),
            warning.message
        );
    }
    out.push('\n');

    let node_lines: Vec<String> = if report.nodes.is_empty() {
        vec!["No nodes found".to_string()]
    } else {
        report.nodes.iter().map(node_line).collect()
    };
    let node_border = if report.all_nodes_ready() {
        Color::Green
    } else {
        Color::Red
    };
    out.push_str(&block("🖥️  Infrastructure", &node_lines, node_border));

    out.push_str(&block(
        "💾 Backup Status",
        &[backup_line(&report.backup)],
        severity_color(report.backup.status.severity()),
    ));

    let deploy_lines: Vec<String> = if report.deployments.is_empty() {
        vec!["No deployments found".to_string()]
    } else {
        report.deployments.iter().map(deployment_line).collect()
    };
    out.push_str(&block("📦 Deployments", &deploy_lines, Color::Blue));

    let _ = writeln!(out, "{}", pod_table(&report.pods, config));
    out.push('\n');

    let verdict_color = if report.all_healthy {
        Color::Green
    } else {
        Color::Yellow
    };
    out.push_str(&block(
        &verdict_line(report.all_healthy).color(verdict_color).to_string(),
        &[],
        verdict_color,
    ));

    out
}

/// Print the report to stdout.
pub fn print_report(report: &HealthReport, config: &DashboardConfig) {
    println!("{}", render_report(report, config));
}

/// Render the report as pretty JSON.
pub fn render_json(report: &HealthReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Spinner shown on stderr while the cluster is polled.
#[must_use]
pub fn connecting_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Connecting to Kubernetes cluster...".green().bold().to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print an unrecoverable error.
pub fn print_fatal(message: &str) {
    eprintln!("{} {}", "Fatal error:".red().bold(), message.red());
}

/// Print the interrupt notice.
pub fn print_interrupted() {
    println!();
    println!("{}", "Interrupted by user".yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PodPhase, Section, SectionWarning};
    use chrono::{TimeZone, Utc};

    fn report() -> HealthReport {
        HealthReport {
            generated_at: Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap(),
            nodes: vec![],
            backup: BackupObservation::not_found(),
            pods: vec![],
            deployments: vec![],
            all_healthy: true,
            warnings: vec![],
        }
    }

    #[test]
    fn test_node_line() {
        let node = NodeSnapshot {
            name: "node-1".into(),
            ready: true,
            cpu_allocatable: "4".into(),
            memory_allocatable: "16Gi".into(),
        };
        assert_eq!(node_line(&node), "🟢 node-1 (CPU: 4, Mem: 16Gi)");

        let node = NodeSnapshot {
            ready: false,
            ..node
        };
        assert!(node_line(&node).starts_with(ICON_ERROR));
    }

    #[test]
    fn test_backup_lines() {
        let when = Utc.with_ymd_and_hms(2026, 10, 17, 6, 0, 0).unwrap();
        let overdue = BackupObservation {
            status: BackupStatus::Overdue,
            job: Some("infra/nightly-backup".into()),
            last_schedule_time: Some(when),
            age_hours: Some(30.0),
            error: None,
        };
        assert_eq!(
            backup_line(&overdue),
            "🔴 Last Backup: 30.0 hours ago! (2026-10-17 06:00 UTC)"
        );

        let ok = BackupObservation {
            status: BackupStatus::Ok,
            age_hours: Some(3.21),
            ..overdue
        };
        assert_eq!(
            backup_line(&ok),
            "🟢 Last Backup: 3.2 hours ago (2026-10-17 06:00 UTC)"
        );

        assert_eq!(
            backup_line(&BackupObservation::not_found()),
            "⚪ No Backup Job Found"
        );
        assert_eq!(
            backup_line(&BackupObservation::error("forbidden")),
            "🔴 Error checking backups: forbidden"
        );
    }

    #[test]
    fn test_deployment_status() {
        let mut deploy = DeploymentSnapshot {
            namespace: "app".into(),
            name: "api".into(),
            desired_replicas: 3,
            ready_replicas: 1,
            updated_replicas: 3,
            rollout_state: RolloutState::Progressing,
        };
        assert_eq!(deployment_status(&deploy), "🟡 Progressing (1/3)");

        deploy.ready_replicas = 0;
        deploy.rollout_state = RolloutState::NotReady;
        assert_eq!(deployment_status(&deploy), "🔴 Not Ready (0/3)");

        deploy.ready_replicas = 3;
        deploy.rollout_state = RolloutState::Ready;
        assert_eq!(deployment_status(&deploy), "🟢 Ready");
    }

    #[test]
    fn test_pod_table_rows() {
        let pods = vec![PodSnapshot {
            namespace: "app".into(),
            name: "web-0".into(),
            phase: PodPhase::Running,
            restart_count: 7,
            severity: Severity::Ok,
        }];
        let rendered = pod_table(&pods, &DashboardConfig::default()).to_string();
        assert!(rendered.contains("Namespace"));
        assert!(rendered.contains("Restarts"));
        assert!(rendered.contains("web-0"));
        assert!(rendered.contains("🟢 Running"));
        assert!(rendered.contains('7'));
    }

    #[test]
    fn test_restart_color_threshold() {
        let config = DashboardConfig::default();
        assert_eq!(restart_color(0, &config), TableColor::White);
        assert_eq!(restart_color(5, &config), TableColor::White);
        assert_eq!(restart_color(6, &config), TableColor::Red);
    }

    #[test]
    fn test_pod_table_highlights_restarts() {
        let pods = vec![PodSnapshot {
            namespace: "app".into(),
            name: "web-0".into(),
            phase: PodPhase::Running,
            restart_count: 7,
            severity: Severity::Ok,
        }];
        let mut table = pod_table(&pods, &DashboardConfig::default());
        table.enforce_styling();
        table.style_text_only();
        let rendered = table.to_string();
        assert!(
            rendered.contains("\u{1b}[38;5;9m7\u{1b}[39m"),
            "restart count should be rendered in red: {rendered:?}"
        );
    }

    #[test]
    fn test_render_empty_report() {
        colored::control::set_override(false);
        let rendered = render_report(&report(), &DashboardConfig::default());
        assert!(rendered.contains("No nodes found"));
        assert!(rendered.contains("No deployments found"));
        assert!(rendered.contains("No Backup Job Found"));
        assert!(rendered.contains("All systems operational"));
    }

    #[test]
    fn test_render_warnings_and_verdict() {
        colored::control::set_override(false);
        let mut report = report();
        report.all_healthy = false;
        report.warnings.push(SectionWarning {
            section: Section::Pods,
            message: "Failed to list pods: timeout".into(),
        });

        let rendered = render_report(&report, &DashboardConfig::default());
        assert!(rendered.contains("Warning (pods): Failed to list pods: timeout"));
        assert!(rendered.contains("Check warnings above"));
        assert!(!rendered.contains("All systems operational"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["all_healthy"], true);
        assert_eq!(value["backup"]["status"], "not_found");
    }
}
