/// Timing of one successful throw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowRecord {
    /// Time since the hammer started its first throw, taken when this throw finished
    pub elapsed_time_us: u64,
    pub latency_us: u64,
}
