use crate::analytics::metrics::individual::from_records;
use crate::analytics::record::ThrowRecord;
use crate::client_factory::ClientFactory;
use crate::error::ThorError;
use crate::logging::PRINT_TARGET;
use reqwest::Url;
use std::num::NonZeroU32;
use std::sync::Arc;
use thor_report::hammer_metrics::HammerMetrics;
use tokio::time::Instant;
use tracing::{debug, info};

/// Work assigned to one hammer, fixed at dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub struct HammerJob {
    url: Url,
    throws: NonZeroU32,
    verbose: bool,
    hammer_id: u32,
}

impl HammerJob {
    pub fn new(url: Url, throws: u32, verbose: bool, hammer_id: u32) -> Result<Self, ThorError> {
        let throws = NonZeroU32::new(throws).ok_or_else(|| {
            ThorError::InvalidConfiguration("number of throws must be at least 1".to_owned())
        })?;
        Ok(Self {
            url,
            throws,
            verbose,
            hammer_id,
        })
    }

    pub fn hammer_id(&self) -> u32 {
        self.hammer_id
    }
}

pub struct Hammer {
    client_factory: Arc<dyn ClientFactory>,
    job: HammerJob,
}

impl Hammer {
    pub fn new(client_factory: Arc<dyn ClientFactory>, job: HammerJob) -> Self {
        Hammer {
            client_factory,
            job,
        }
    }

    /// Performs the throws one after another and returns their average elapsed time.
    /// The first failing throw ends the hammer, later throws are never issued.
    pub async fn run(&self) -> Result<HammerMetrics, ThorError> {
        let hammer_id = self.job.hammer_id;
        let throws = self.job.throws.get();
        let client = self.client_factory.create_client()?;
        debug!(
            "Hammer #{} → throwing {} request(s) at {}...",
            hammer_id, throws, self.job.url
        );

        let start_timestamp = Instant::now();
        let mut records = Vec::with_capacity(throws as usize);
        for throw in 0..throws {
            let before_request = Instant::now();
            let response = client.get(&self.job.url).await?;
            let latency = before_request.elapsed();

            if response.status.as_u16() >= 400 {
                debug!(
                    "Hammer #{} → throw {} failed with status {}",
                    hammer_id, throw, response.status
                );
                return Err(ThorError::HttpStatus {
                    status: response.status,
                    url: self.job.url.clone(),
                });
            }

            if self.job.verbose {
                info!(target: PRINT_TARGET, "{}", response.body);
            }

            info!(
                target: PRINT_TARGET,
                "Hammer {}, Throw:    {}, Elapsed Time: {:.2}",
                hammer_id,
                throw,
                latency.as_secs_f64()
            );

            records.push(ThrowRecord {
                elapsed_time_us: start_timestamp.elapsed().as_micros() as u64,
                latency_us: latency.as_micros() as u64,
            });
        }

        let metrics = from_records(hammer_id, &records);
        info!(
            target: PRINT_TARGET,
            "Hammer {}, AVERAGE    , Elapsed Time: {:.2}",
            hammer_id,
            metrics.average_elapsed_secs
        );

        Ok(metrics)
    }
}
