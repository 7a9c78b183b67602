use super::defaults::*;
use crate::error::ThorError;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use reqwest::Url;
use std::ffi::OsString;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;
use thor_report::params::BenchmarkParams;

/// Hammer a URL with concurrent streams of sequential HTTP GET requests
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    arg_required_else_help = true
)]
pub struct ThorArgs {
    /// Number of hammers (concurrent workers) to utilize
    #[arg(short = 'h', long, default_value_t = DEFAULT_NUMBER_OF_HAMMERS)]
    pub hammers: NonZeroU32,

    /// Number of throws (sequential requests) per hammer
    #[arg(short = 't', long, default_value_t = DEFAULT_NUMBER_OF_THROWS)]
    pub throws: NonZeroU32,

    /// Display the body of every successful response
    #[arg(short = 'v', long, default_value_t = DEFAULT_VERBOSE)]
    pub verbose: bool,

    /// Per-request timeout in human readable format, e.g. "500ms" or "5s". Requests never time out if not provided
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Output directory path for storing the benchmark report
    #[arg(long, short = 'o')]
    pub output_dir: Option<String>,

    /// Identifier for the benchmark run (defaults to hostname if not provided)
    #[arg(long, requires = "output_dir")]
    pub identifier: Option<String>,

    /// Additional remark for the benchmark (e.g., cold-cache)
    #[arg(long, requires = "output_dir")]
    pub remark: Option<String>,

    /// Write diagnostic logs with TRACE level to the given file
    #[arg(long)]
    pub debug: Option<PathBuf>,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    _help: Option<bool>,

    /// URL to request
    #[arg(value_parser = parse_url)]
    pub url: Url,
}

fn parse_url(value: &str) -> Result<Url, String> {
    let url =
        Url::parse(value).map_err(|error| format!("Provided URL '{value}' is invalid: {error}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!(
            "Provided URL '{value}' has unsupported scheme '{scheme}', expected http or https"
        )),
    }
}

impl ThorArgs {
    /// Maps the raw command line tokens (program name first) to a validated configuration.
    pub fn parse_args<I, T>(tokens: I) -> Result<Self, ThorError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(tokens).map_err(ThorError::Usage)
    }

    /// Text printed for a rejected command line. Every failure carries the usage line,
    /// including the value errors for which clap only renders the message.
    pub fn usage_message(error: &clap::Error) -> String {
        let mut message = error.render().to_string();
        let shows_usage = matches!(
            error.kind(),
            ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) || message.contains("Usage:");
        if !shows_usage {
            if !message.ends_with('\n') {
                message.push('\n');
            }
            message.push('\n');
            message.push_str(&Self::command().render_usage().to_string());
            message.push('\n');
        }
        message
    }

    pub fn hammers(&self) -> u32 {
        self.hammers.get()
    }

    pub fn throws(&self) -> u32 {
        self.throws.get()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn output_dir(&self) -> Option<String> {
        self.output_dir.clone()
    }

    pub fn remark(&self) -> Option<String> {
        self.remark.clone()
    }

    pub fn identifier(&self) -> String {
        self.identifier.clone().unwrap_or_else(|| {
            hostname::get()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|_| "unknown".to_owned())
        })
    }

    /// Generates the output directory name based on benchmark parameters.
    pub fn generate_dir_name(&self) -> String {
        let mut parts = vec![
            "hammer".to_owned(),
            self.hammers().to_string(),
            self.throws().to_string(),
            self.url.host_str().unwrap_or("unknown").to_owned(),
        ];

        if let Some(remark) = &self.remark {
            parts.push(remark.replace(' ', "_"));
        }

        parts.push(self.identifier());

        parts.join("_")
    }

    /// Generates a human-readable pretty name for the benchmark
    pub fn generate_pretty_name(&self) -> String {
        let mut name = format!(
            "{} hammers, {} throws per hammer",
            self.hammers(),
            self.throws()
        );

        if let Some(remark) = &self.remark {
            name.push_str(&format!(" ({})", remark));
        }

        name
    }
}

fn recreate_bench_command(args: &ThorArgs) -> String {
    let mut parts = vec!["thor".to_owned()];

    if args.hammers != DEFAULT_NUMBER_OF_HAMMERS {
        parts.push(format!("-h {}", args.hammers()));
    }

    if args.throws != DEFAULT_NUMBER_OF_THROWS {
        parts.push(format!("-t {}", args.throws()));
    }

    if args.verbose != DEFAULT_VERBOSE {
        parts.push("-v".to_owned());
    }

    if let Some(timeout) = args.timeout {
        parts.push(format!("--timeout {}", humantime::format_duration(timeout)));
    }

    if let Some(ref output_dir) = args.output_dir {
        parts.push(format!("--output-dir '{}'", output_dir));
    }

    if let Some(ref identifier) = args.identifier {
        parts.push(format!("--identifier '{}'", identifier));
    }

    if let Some(ref remark) = args.remark {
        parts.push(format!("--remark '{}'", remark));
    }

    parts.push(args.url.to_string());
    parts.join(" ")
}

impl From<&ThorArgs> for BenchmarkParams {
    fn from(args: &ThorArgs) -> Self {
        BenchmarkParams {
            url: args.url.to_string(),
            hammers: args.hammers(),
            throws: args.throws(),
            verbose: args.verbose,
            timeout: args
                .timeout
                .map(|timeout| humantime::format_duration(timeout).to_string()),
            remark: args.remark(),
            pretty_name: args.generate_pretty_name(),
            bench_command: recreate_bench_command(args),
        }
    }
}
