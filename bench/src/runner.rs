use crate::analytics::report_builder::BenchmarkReportBuilder;
use crate::args::common::ThorArgs;
use crate::benchmark::{HammerBenchmark, HammerHandles};
use crate::client_factory::ClientFactory;
use crate::error::ThorError;
use crate::http::HttpClientFactory;
use crate::logging::PRINT_TARGET;
use futures::future::select_all;
use std::path::Path;
use std::sync::Arc;
use thor_report::hammer_metrics::HammerMetrics;
use thor_report::params::BenchmarkParams;
use thor_report::report::BenchmarkReport;
use tracing::{error, info};

pub struct BenchmarkRunner {
    args: ThorArgs,
    client_factory: Arc<dyn ClientFactory>,
}

impl BenchmarkRunner {
    pub fn new(args: ThorArgs) -> Self {
        let client_factory = Arc::new(HttpClientFactory::new(args.timeout()));
        Self::with_client_factory(args, client_factory)
    }

    pub fn with_client_factory(args: ThorArgs, client_factory: Arc<dyn ClientFactory>) -> Self {
        Self {
            args,
            client_factory,
        }
    }

    pub async fn run(&self) -> Result<BenchmarkReport, ThorError> {
        let args = &self.args;
        info!(
            "Starting to hammer: {} with {} hammer(s), {} throw(s) each",
            args.url(),
            args.hammers(),
            args.throws()
        );

        let benchmark = HammerBenchmark::new(
            args.url().clone(),
            args.hammers(),
            args.throws(),
            args.verbose(),
            self.client_factory.clone(),
        );
        let join_handles = benchmark.run()?;
        let hammer_metrics = collect_hammer_metrics(join_handles).await?;
        info!("All hammers finished");

        let report = BenchmarkReportBuilder::build(
            args.identifier(),
            BenchmarkParams::from(args),
            hammer_metrics,
        );
        info!(
            target: PRINT_TARGET,
            "TOTAL AVERAGE ELAPSED TIME: {:.2}", report.total_average_elapsed_secs
        );

        report.print_summary();

        if let Some(output_dir) = args.output_dir() {
            let full_output_path = Path::new(&output_dir).join(args.generate_dir_name());
            let report_path = report.dump_to_json(&full_output_path).map_err(|source| {
                error!("Failed to write the benchmark report: {source}");
                ThorError::CannotWriteReport {
                    path: full_output_path.to_string_lossy().to_string(),
                    source,
                }
            })?;
            info!("Benchmark report saved to {}", report_path.display());
        }

        Ok(report)
    }
}

/// Waits for every hammer, or for the first one that fails. In the latter case the
/// remaining hammers are aborted and the failure is returned.
async fn collect_hammer_metrics(
    mut join_handles: HammerHandles,
) -> Result<Vec<HammerMetrics>, ThorError> {
    let mut hammer_metrics = Vec::with_capacity(join_handles.len());

    while !join_handles.is_empty() {
        let (result, _index, remaining) = select_all(join_handles).await;
        join_handles = remaining;

        let failure = match result {
            Ok(Ok(metrics)) => {
                hammer_metrics.push(metrics);
                continue;
            }
            Ok(Err(error)) => error,
            Err(join_error) => ThorError::HammerPanicked(join_error),
        };

        error!(
            "Hammer failed, aborting {} remaining hammer(s)",
            join_handles.len()
        );
        join_handles.iter().for_each(|handle| handle.abort());
        return Err(failure);
    }

    Ok(hammer_metrics)
}
