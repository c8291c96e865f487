/// Trading days per year used for annualization.
pub const PERIODS_PER_YEAR: f64 = 252.0;

/// Shared statistics utilities for wealth-curve analysis.
///
/// All functions are pure, operate on plain `f64` slices, and resolve
/// degenerate inputs to 0 rather than panicking.
pub struct Stats;

impl Stats {
    /// Arithmetic mean; 0 for empty input.
    pub fn mean(xs: &[f64]) -> f64 {
        if xs.is_empty() {
            return 0.0;
        }
        xs.iter().sum::<f64>() / xs.len() as f64
    }

    /// Population standard deviation; 0 for fewer than 2 samples.
    pub fn stdev(xs: &[f64]) -> f64 {
        if xs.len() < 2 {
            return 0.0;
        }
        let m = Self::mean(xs);
        let squared: Vec<f64> = xs.iter().map(|x| (x - m) * (x - m)).collect();
        Self::mean(&squared).sqrt()
    }

    /// Per-period simple returns of a wealth curve: `w[i]/w[i-1] - 1`.
    /// Output length is `n - 1`.
    pub fn daily_returns(wealth: &[f64]) -> Vec<f64> {
        wealth.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
    }

    /// Annualized Sharpe ratio with no risk-free adjustment; 0 when the
    /// return series has zero volatility.
    pub fn sharpe(returns: &[f64]) -> f64 {
        let s = Self::stdev(returns);
        if s == 0.0 {
            0.0
        } else {
            Self::mean(returns) / s * PERIODS_PER_YEAR.sqrt()
        }
    }

    /// Worst peak-to-trough loss as a positive magnitude; 0 for an
    /// all-increasing curve.
    pub fn max_drawdown(wealth: &[f64]) -> f64 {
        let Some(&first) = wealth.first() else {
            return 0.0;
        };
        let mut peak = first;
        let mut worst = 0.0_f64;
        for &w in wealth {
            peak = peak.max(w);
            worst = worst.min((w - peak) / peak);
        }
        -worst
    }

    /// Compound annual growth rate of a curve expressed as a growth
    /// multiple starting at 1.0, over `years` of elapsed time.
    pub fn cagr(wealth: &[f64], years: f64) -> f64 {
        let Some(&last) = wealth.last() else {
            return 0.0;
        };
        last.powf(1.0 / years.max(1e-6)) - 1.0
    }

    /// Proportional advantage of one total return over another:
    /// `(1 + strat) / (1 + bench) - 1`. Caller must guard `bench != -1`.
    pub fn relative_roi(strat_total: f64, bench_total: f64) -> f64 {
        (1.0 + strat_total) / (1.0 + bench_total) - 1.0
    }

    /// Average magnitude of the worst 5% of daily losses (conditional
    /// value at risk); 0 when there are no losses.
    pub fn cvar95(returns: &[f64]) -> f64 {
        let mut losses: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
        if losses.is_empty() {
            return 0.0;
        }
        losses.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let cut = (0.95 * losses.len() as f64).floor() as usize;
        let tail_len = (losses.len() - cut).max(1);
        -Self::mean(&losses[..tail_len])
    }

    /// Share of positive daily returns.
    pub fn hit_rate(returns: &[f64]) -> f64 {
        let wins = returns.iter().filter(|r| **r > 0.0).count();
        wins as f64 / returns.len().max(1) as f64
    }
}
