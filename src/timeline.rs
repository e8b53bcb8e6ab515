use chrono::{Duration, NaiveDateTime};

/// Evenly spaced instants covering `days` from `start`: point k is
/// `start + k * step_minutes` for k = 0..(days * 24 * 60) / step_minutes.
///
/// The point count floor-divides, so a step that does not evenly divide the
/// span silently drops the remainder.
pub fn timeline(start: NaiveDateTime, days: u32, step_minutes: u32) -> Vec<NaiveDateTime> {
    let points = (days as i64 * 24 * 60) / step_minutes as i64;
    (0..points)
        .map(|k| start + Duration::minutes(k * step_minutes as i64))
        .collect()
}
