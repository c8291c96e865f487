use super::types::{Point, Row};

/// Maps validated rows into display-ready points, order-preserving and
/// one-to-one. Rows without strategy/benchmark values fall back to the
/// wealth `baseline` so a price-only CSV still renders both curves.
pub fn build_series(rows: &[Row], baseline: f64) -> Vec<Point> {
    rows.iter()
        .map(|r| Point {
            t: r.date.format("%Y-%m-%d").to_string(),
            strategy_value: r.strategy.unwrap_or(baseline),
            benchmark_value: r.benchmark.unwrap_or(baseline),
            close_price: r.close,
            signal: Some(r.signal),
            outcome: r.outcome,
            x: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::types::Signal;
    use chrono::NaiveDate;

    fn row(date: &str, close: f64, strategy: Option<f64>, benchmark: Option<f64>) -> Row {
        Row {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            close,
            signal: Signal::Hold,
            benchmark,
            strategy,
            outcome: None,
        }
    }

    #[test]
    fn test_empty_rows_yield_empty_series() {
        assert!(build_series(&[], 1000.0).is_empty());
    }

    #[test]
    fn test_fallback_baseline_applied() {
        let series = build_series(&[row("2024-01-01", 100.0, None, None)], 1000.0);
        assert_eq!(series[0].strategy_value, 1000.0);
        assert_eq!(series[0].benchmark_value, 1000.0);
        assert_eq!(series[0].close_price, 100.0);
    }

    #[test]
    fn test_explicit_values_pass_through() {
        let series = build_series(
            &[row("2024-01-01", 100.0, Some(2500.0), Some(1800.0))],
            1000.0,
        );
        assert_eq!(series[0].strategy_value, 2500.0);
        assert_eq!(series[0].benchmark_value, 1800.0);
    }

    #[test]
    fn test_order_preserved_one_to_one() {
        let rows = vec![
            row("2024-01-01", 100.0, None, None),
            row("2024-01-02", 101.0, None, None),
            row("2024-01-03", 102.0, None, None),
        ];
        let series = build_series(&rows, 1000.0);
        assert_eq!(series.len(), 3);
        let dates: Vec<&str> = series.iter().map(|p| p.t.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert!(series.iter().all(|p| p.x.is_none()));
    }
}
