use chrono::Duration;

use super::types::Point;

/// Keeps the trailing `days` calendar window anchored at the final point.
/// The last point is always retained; an empty series is returned unchanged.
pub fn trailing_slice(series: &[Point], days: i64) -> Vec<Point> {
    let Some(last) = series.last().and_then(Point::date) else {
        return series.to_vec();
    };
    let cutoff = last - Duration::days(days);
    series
        .iter()
        .filter(|p| p.date().is_some_and(|d| d >= cutoff))
        .cloned()
        .collect()
}

/// Slices to the inclusive `[start, end]` ISO date range. A missing bound
/// means "no filter" and returns the full series; a range that matches no
/// points also falls back to the full series so a degenerate selection never
/// surfaces an empty chart. The result is re-indexed with 0-based `x`.
pub fn range_slice(series: &[Point], start: Option<&str>, end: Option<&str>) -> Vec<Point> {
    let sliced = match (start, end) {
        (Some(s), Some(e)) => {
            // Zero-padded ISO dates compare correctly as strings.
            let inside: Vec<Point> = series
                .iter()
                .filter(|p| p.t.as_str() >= s && p.t.as_str() <= e)
                .cloned()
                .collect();
            if inside.is_empty() {
                series.to_vec()
            } else {
                inside
            }
        }
        _ => series.to_vec(),
    };
    reindex(sliced)
}

fn reindex(mut points: Vec<Point>) -> Vec<Point> {
    for (i, p) in points.iter_mut().enumerate() {
        p.x = Some(i);
    }
    points
}
