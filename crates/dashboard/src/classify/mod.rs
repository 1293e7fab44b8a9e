//! Health classification rules.
//!
//! Pure functions turning provider records into classified snapshots:
//!
//! - `nodes`: readiness from the `Ready` condition
//! - `backup`: freshness of the last matching backup cron-job
//! - `pods`: phase severity and restart counts
//! - `deployments`: rollout state from replica counts
//! - `verdict`: the overall healthy / needs-attention flag
//!
//! Nothing here performs I/O or reads the clock; callers pass `now` in.

pub mod backup;
pub mod deployments;
pub mod nodes;
pub mod pods;
pub mod verdict;

pub use backup::classify_backup;
pub use deployments::{classify_deployments, rollout_state};
pub use nodes::{classify_nodes, is_ready};
pub use pods::{classify_pods, pod_severity};
pub use verdict::overall_verdict;
