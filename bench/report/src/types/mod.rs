pub mod hammer_metrics;
pub mod params;
pub mod report;
