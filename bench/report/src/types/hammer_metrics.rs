use crate::utils::{round_float, round_floats};
use serde::{Deserialize, Serialize};

/// Outcome of one hammer that completed all of its throws.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HammerMetrics {
    pub hammer_id: u32,
    pub throws: u32,
    #[serde(serialize_with = "round_float")]
    pub total_time_secs: f64,
    #[serde(serialize_with = "round_float")]
    pub average_elapsed_secs: f64,
    /// Elapsed time of every throw, in throw order
    #[serde(serialize_with = "round_floats")]
    pub throw_elapsed_secs: Vec<f64>,
}
