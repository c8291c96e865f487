use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use signalcurve::config::AnalyticsConfig;
use signalcurve::domain::performance::{StatsSummary, summarize};
use signalcurve::domain::series::{
    build_series, latest_signal, outcome_counts, range_slice, signal_changes, trailing_slice,
};
use signalcurve::infrastructure::csv_source::{load_or_demo, parse_rows};

/// Summarize a buy-signal strategy CSV against its benchmark.
#[derive(Parser, Debug)]
#[command(name = "report", version)]
struct Args {
    /// Path to the CSV file; falls back to the embedded demo data.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Trailing window in calendar days (defaults to the configured window).
    #[arg(long)]
    days: Option<i64>,

    /// Explicit window start, YYYY-MM-DD (used together with --to).
    #[arg(long)]
    from: Option<String>,

    /// Explicit window end, YYYY-MM-DD (used together with --from).
    #[arg(long)]
    to: Option<String>,

    /// Emit the summary as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let cfg = AnalyticsConfig::from_env()?;

    let text = load_or_demo(args.csv.as_deref(), &cfg);
    let rows = parse_rows(&text)?;
    info!(rows = rows.len(), "parsed csv");

    if let Some(signal) = latest_signal(&rows) {
        info!(?signal, "today");
    }
    for change in signal_changes(&rows) {
        info!(date = %change.date, signal = ?change.signal, "signal flip");
    }
    let counts = outcome_counts(&rows);
    info!(
        tp = counts.true_positives,
        tn = counts.true_negatives,
        fp = counts.false_positives,
        fn_ = counts.false_negatives,
        "outcome counts"
    );

    let series = build_series(&rows, cfg.fallback_baseline);
    let days = args.days.unwrap_or(cfg.trailing_window_days);
    let windowed = trailing_slice(&series, days);
    let windowed = range_slice(&windowed, args.from.as_deref(), args.to.as_deref());
    info!(points = windowed.len(), days, "sliced window");

    match summarize(&windowed) {
        Some(summary) if args.json => println!("{}", serde_json::to_string_pretty(&summary)?),
        Some(summary) => print_table(&summary),
        None => println!("not enough data for a summary"),
    }

    Ok(())
}

fn print_table(summary: &StatsSummary) {
    println!("{:<16}{:>12}{:>12}", "", "strategy", "benchmark");
    println!(
        "{:<16}{:>12}{:>12}",
        "total",
        pct(summary.strategy.total),
        pct(summary.benchmark.total)
    );
    println!(
        "{:<16}{:>12.2}{:>12.2}",
        "sharpe", summary.strategy.sharpe, summary.benchmark.sharpe
    );
    println!(
        "{:<16}{:>12}{:>12}",
        "max drawdown",
        pct(-summary.strategy.max_drawdown),
        pct(-summary.benchmark.max_drawdown)
    );
    println!(
        "{:<16}{:>12}{:>12}",
        "cagr",
        pct(summary.strategy.cagr),
        pct(summary.benchmark.cagr)
    );
    println!(
        "{:<16}{:>12}{:>12}",
        "volatility",
        pct(summary.strategy.volatility),
        pct(summary.benchmark.volatility)
    );
    println!(
        "{:<16}{:>12}{:>12}",
        "cvar 95%",
        pct(-summary.strategy.cvar95),
        pct(-summary.benchmark.cvar95)
    );
    println!(
        "{:<16}{:>12}{:>12}",
        "hit rate",
        pct(summary.strategy.hit_rate),
        pct(summary.benchmark.hit_rate)
    );
    println!("{:<16}{:>12}", "relative roi", pct(summary.relative_roi));
}

fn pct(n: f64) -> String {
    // Avoid "+-0.00%" for negative zero.
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{}{:.2}%", if n >= 0.0 { "+" } else { "" }, n * 100.0)
}
