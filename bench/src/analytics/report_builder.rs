use super::metrics::group::total_average_elapsed_secs;
use chrono::Utc;
use thor_report::{
    hammer_metrics::HammerMetrics, params::BenchmarkParams, report::BenchmarkReport,
};

pub struct BenchmarkReportBuilder;

impl BenchmarkReportBuilder {
    pub fn build(
        identifier: String,
        params: BenchmarkParams,
        mut hammer_metrics: Vec<HammerMetrics>,
    ) -> BenchmarkReport {
        let uuid = uuid::Uuid::new_v4();
        let timestamp = Utc::now().to_rfc3339();

        // Hammers finish in any order
        hammer_metrics.sort_by_key(|m| m.hammer_id);
        let total_average_elapsed_secs = total_average_elapsed_secs(&hammer_metrics);

        BenchmarkReport {
            uuid,
            timestamp,
            identifier,
            params,
            hammer_metrics,
            total_average_elapsed_secs,
        }
    }
}
