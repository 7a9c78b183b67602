use std::path::Path;
use tracing_appender::non_blocking::{NonBlockingBuilder, WorkerGuard};
use tracing_subscriber::{
    filter::{self, EnvFilter, LevelFilter},
    fmt::{self},
    layer::{Layer, SubscriberExt},
};

/// Target of the events that form the console report, the only ones printed to stdout.
pub(crate) const PRINT_TARGET: &str = "thor::print";

/// Keeps the non-blocking writers alive, dropping it flushes all pending output.
pub(crate) struct Logging {
    file_guard: Option<WorkerGuard>,
    stdout_guard: Option<WorkerGuard>,
    stderr_guard: Option<WorkerGuard>,
}

impl Logging {
    pub(crate) fn new() -> Self {
        Logging {
            file_guard: None,
            stdout_guard: None,
            stderr_guard: None,
        }
    }

    pub(crate) fn init(&mut self, debug: Option<&Path>) -> std::io::Result<&mut Self> {
        let mut layers = vec![];

        let stdout_filter = filter::filter_fn(|metadata| metadata.target() == PRINT_TARGET);
        // Report lines must never be dropped, even when stdout is slower than the hammers.
        let (stdout_writer, stdout_guard) = NonBlockingBuilder::default()
            .lossy(false)
            .finish(std::io::stdout());

        let stdout_layer = fmt::Layer::default()
            .without_time()
            .with_level(false)
            .with_target(false)
            .with_ansi(false)
            .with_writer(stdout_writer)
            .with_filter(LevelFilter::INFO)
            .with_filter(stdout_filter)
            .boxed();

        self.stdout_guard = Some(stdout_guard);
        layers.push(stdout_layer);

        // Diagnostics on stderr only when explicitly requested through RUST_LOG.
        if let Ok(env_filter) = EnvFilter::try_from_default_env() {
            let (stderr_writer, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());
            let stderr_layer = fmt::layer()
                .with_writer(stderr_writer)
                .with_filter(filter::filter_fn(|metadata| {
                    metadata.target() != PRINT_TARGET
                }))
                .with_filter(env_filter)
                .boxed();
            self.stderr_guard = Some(stderr_guard);
            layers.push(stderr_layer);
        }

        if let Some(file_path) = debug {
            if file_path.exists() {
                std::fs::remove_file(file_path)?;
            }
            let file_appender = tracing_appender::rolling::never("", file_path);
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking_file)
                .with_filter(LevelFilter::TRACE)
                .boxed();
            self.file_guard = Some(file_guard);

            layers.push(file_layer);
        }

        let subscriber = tracing_subscriber::registry().with(layers);
        tracing::subscriber::set_global_default(subscriber).map_err(std::io::Error::other)?;

        Ok(self)
    }
}
