use serde::Serializer;

/// Rounds to microsecond resolution, latencies below that are noise for HTTP round trips.
pub(crate) fn round_float<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((value * 1_000_000.0).round() / 1_000_000.0)
}

pub(crate) fn round_floats<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter().map(|v| (v * 1_000_000.0).round() / 1_000_000.0))
}
