use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BenchmarkParams {
    pub url: String,
    pub hammers: u32,
    pub throws: u32,
    pub verbose: bool,
    /// Per-request timeout in human readable format, `None` when requests may block forever
    pub timeout: Option<String>,
    pub remark: Option<String>,
    pub pretty_name: String,
    /// Command line that reproduces this run
    pub bench_command: String,
}
