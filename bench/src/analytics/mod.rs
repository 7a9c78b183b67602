pub mod metrics;
pub mod record;
pub mod report_builder;
