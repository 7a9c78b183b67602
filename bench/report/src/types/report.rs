use crate::hammer_metrics::HammerMetrics;
use crate::params::BenchmarkParams;
use crate::utils::round_float;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const REPORT_FILE_NAME: &str = "report.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BenchmarkReport {
    /// Benchmark unique identifier
    pub uuid: Uuid,

    /// Timestamp when the benchmark was finished
    pub timestamp: String,

    /// Identifier of the machine the benchmark was run from
    pub identifier: String,

    /// Benchmark parameters
    pub params: BenchmarkParams,

    /// Results of every hammer, ordered by hammer id
    pub hammer_metrics: Vec<HammerMetrics>,

    /// Unweighted mean of the per-hammer averages
    #[serde(serialize_with = "round_float")]
    pub total_average_elapsed_secs: f64,
}

impl BenchmarkReport {
    /// Writes the report as `report.json` into `output_dir`, creating the directory if needed.
    pub fn dump_to_json(&self, output_dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let report_path = output_dir.join(REPORT_FILE_NAME);
        let report_json = serde_json::to_string_pretty(self)?;
        std::fs::write(&report_path, report_json)?;
        Ok(report_path)
    }
}
