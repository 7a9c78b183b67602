use crate::actors::hammer::{Hammer, HammerJob};
use crate::client_factory::ClientFactory;
use crate::error::ThorError;
use reqwest::Url;
use std::sync::Arc;
use thor_report::hammer_metrics::HammerMetrics;
use tokio::task::JoinHandle;
use tracing::info;

pub type HammerHandles = Vec<JoinHandle<Result<HammerMetrics, ThorError>>>;

/// Fans the same URL out to a fixed number of hammers.
pub struct HammerBenchmark {
    url: Url,
    hammers: u32,
    throws: u32,
    verbose: bool,
    client_factory: Arc<dyn ClientFactory>,
}

impl HammerBenchmark {
    pub fn new(
        url: Url,
        hammers: u32,
        throws: u32,
        verbose: bool,
        client_factory: Arc<dyn ClientFactory>,
    ) -> Self {
        Self {
            url,
            hammers,
            throws,
            verbose,
            client_factory,
        }
    }

    /// Builds one job per hammer with ids `0..hammers`.
    pub fn jobs(&self) -> Result<Vec<HammerJob>, ThorError> {
        if self.hammers == 0 {
            return Err(ThorError::InvalidConfiguration(
                "number of hammers must be at least 1".to_owned(),
            ));
        }

        (0..self.hammers)
            .map(|hammer_id| {
                HammerJob::new(self.url.clone(), self.throws, self.verbose, hammer_id)
            })
            .collect()
    }

    /// Spawns every hammer as its own task; nothing is spawned if any job is invalid.
    pub fn run(&self) -> Result<HammerHandles, ThorError> {
        let jobs = self.jobs()?;
        info!("Creating {} hammer(s)...", jobs.len());

        let mut handles = Vec::with_capacity(jobs.len());
        for job in jobs {
            info!("Executing the benchmark on hammer #{}...", job.hammer_id());
            let hammer = Hammer::new(self.client_factory.clone(), job);
            handles.push(tokio::spawn(async move { hammer.run().await }));
        }
        info!("Created {} hammer(s).", handles.len());
        Ok(handles)
    }
}
