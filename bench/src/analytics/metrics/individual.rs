use crate::analytics::record::ThrowRecord;
use thor_report::hammer_metrics::HammerMetrics;

pub fn from_records(hammer_id: u32, records: &[ThrowRecord]) -> HammerMetrics {
    if records.is_empty() {
        return HammerMetrics {
            hammer_id,
            ..Default::default()
        };
    }

    let throw_elapsed_secs: Vec<f64> = records
        .iter()
        .map(|r| r.latency_us as f64 / 1_000_000.0)
        .collect();
    let average_elapsed_secs =
        throw_elapsed_secs.iter().sum::<f64>() / throw_elapsed_secs.len() as f64;
    let total_time_secs = records
        .last()
        .map(|r| r.elapsed_time_us as f64 / 1_000_000.0)
        .unwrap_or_default();

    HammerMetrics {
        hammer_id,
        throws: records.len() as u32,
        total_time_secs,
        average_elapsed_secs,
        throw_elapsed_secs,
    }
}
