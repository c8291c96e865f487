use serde::Serialize;

use super::stats::{PERIODS_PER_YEAR, Stats};
use crate::domain::series::Point;

/// Fewest points a window may hold before a summary is attempted.
const MIN_SUMMARY_POINTS: usize = 3;

/// Days per calendar year used when converting a window span to years.
const DAYS_PER_YEAR: f64 = 365.0;

/// Performance snapshot of one wealth curve over one window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveStats {
    /// Cumulative return over the window.
    pub total: f64,
    /// Annualized Sharpe ratio.
    pub sharpe: f64,
    /// Positive magnitude of the worst peak-to-trough loss.
    pub max_drawdown: f64,
    pub cagr: f64,
    /// Annualized return volatility.
    pub volatility: f64,
    pub cvar95: f64,
    /// Share of positive daily returns.
    pub hit_rate: f64,
}

/// Read-only snapshot covering one strategy/benchmark pair over one window.
/// Recomputed from scratch on every input change, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    pub strategy: CurveStats,
    pub benchmark: CurveStats,
    /// `(1 + strategy.total) / (1 + benchmark.total) - 1`.
    pub relative_roi: f64,
}

/// Summarizes a sliced window of points.
///
/// Returns `None` when fewer than 3 usable points remain, or when
/// normalizing either curve to a 1.0 baseline produces a non-finite value.
/// Rows where either curve is non-positive (seed rows before the first
/// fill) are filtered out before normalization.
pub fn summarize(points: &[Point]) -> Option<StatsSummary> {
    if points.len() < MIN_SUMMARY_POINTS {
        return None;
    }

    let valid: Vec<&Point> = points
        .iter()
        .filter(|p| p.strategy_value > 0.0 && p.benchmark_value > 0.0)
        .collect();
    if valid.len() < MIN_SUMMARY_POINTS {
        return None;
    }

    let base_strategy = valid[0].strategy_value;
    let base_benchmark = valid[0].benchmark_value;
    if !base_strategy.is_finite()
        || !base_benchmark.is_finite()
        || base_strategy <= 0.0
        || base_benchmark <= 0.0
    {
        return None;
    }

    let wealth_strategy: Vec<f64> = valid
        .iter()
        .map(|p| p.strategy_value / base_strategy)
        .collect();
    let wealth_benchmark: Vec<f64> = valid
        .iter()
        .map(|p| p.benchmark_value / base_benchmark)
        .collect();
    if wealth_strategy
        .iter()
        .chain(wealth_benchmark.iter())
        .any(|w| !w.is_finite())
    {
        return None;
    }

    let years = elapsed_years(valid.first()?, valid.last()?)?;

    let strategy = curve_stats(&wealth_strategy, years);
    let benchmark = curve_stats(&wealth_benchmark, years);
    // Normalized curves stay positive, so benchmark.total > -1 here.
    let relative_roi = Stats::relative_roi(strategy.total, benchmark.total);

    Some(StatsSummary {
        strategy,
        benchmark,
        relative_roi,
    })
}

fn curve_stats(wealth: &[f64], years: f64) -> CurveStats {
    let returns = Stats::daily_returns(wealth);
    CurveStats {
        total: wealth.last().copied().unwrap_or(1.0) - 1.0,
        sharpe: Stats::sharpe(&returns),
        max_drawdown: Stats::max_drawdown(wealth),
        cagr: Stats::cagr(wealth, years),
        volatility: Stats::stdev(&returns) * PERIODS_PER_YEAR.sqrt(),
        cvar95: Stats::cvar95(&returns),
        hit_rate: Stats::hit_rate(&returns),
    }
}

fn elapsed_years(first: &Point, last: &Point) -> Option<f64> {
    let d0 = first.date()?;
    let d1 = last.date()?;
    Some((d1 - d0).num_days() as f64 / DAYS_PER_YEAR)
}
