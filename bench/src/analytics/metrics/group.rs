use thor_report::hammer_metrics::HammerMetrics;

/// Unweighted mean of the per-hammer averages.
pub fn total_average_elapsed_secs(metrics: &[HammerMetrics]) -> f64 {
    if metrics.is_empty() {
        return 0.0;
    }

    metrics.iter().map(|m| m.average_elapsed_secs).sum::<f64>() / metrics.len() as f64
}
