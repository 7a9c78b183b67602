use colored::{ColoredString, Colorize};
use tracing::info;

use crate::{hammer_metrics::HammerMetrics, report::BenchmarkReport};

impl BenchmarkReport {
    pub fn print_summary(&self) {
        let params_print = format!(
            "Benchmark: {}, url: {}, {} hammers, {} throws per hammer, total requests: {}, identifier: {}",
            self.params.pretty_name,
            self.params.url,
            self.params.hammers,
            self.params.throws,
            self.params.hammers as u64 * self.params.throws as u64,
            self.identifier,
        )
        .blue();

        info!("{}", params_print);

        self.hammer_metrics
            .iter()
            .for_each(|m| info!("{}", m.formatted_string()));

        info!(
            "{}",
            format!(
                "Aggregate Results: total average elapsed time: {:.2} s",
                self.total_average_elapsed_secs
            )
            .red()
        );
    }
}

impl HammerMetrics {
    pub fn formatted_string(&self) -> ColoredString {
        format!(
            "Hammer #{} Results: {} throws in {:.2} s, average elapsed time: {:.2} s",
            self.hammer_id, self.throws, self.total_time_secs, self.average_elapsed_secs,
        )
        .green()
    }
}
