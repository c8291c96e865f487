use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::config::AnalyticsConfig;
use crate::domain::errors::ParseError;
use crate::domain::series::{Outcome, Row, Signal};
use crate::infrastructure::demo::DEMO_CSV;

// Column aliases, matched case-insensitively against the header.
const DATE_ALIASES: &[&str] = &["date", "timestamp"];
const CLOSE_ALIASES: &[&str] = &["close", "price", "adjclose", "adj_close", "nav"];
const SIGNAL_ALIASES: &[&str] = &["signal", "recommendation", "state"];
const OUTCOME_ALIASES: &[&str] = &["tn_tp_fp_fn", "outcome", "result"];
const BENCHMARK_ALIASES: &[&str] = &["benchmark", "qqq", "nasdaq", "ndx", "dca value", "dca_value"];
const STRATEGY_ALIASES: &[&str] = &[
    "strategy",
    "wealth",
    "portfolio",
    "equity value",
    "equity_value",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Header positions of the recognized columns. Unrecognized columns are
/// ignored; column order is free.
struct ColumnMap {
    date: Option<usize>,
    close: Option<usize>,
    signal: Option<usize>,
    outcome: Option<usize>,
    benchmark: Option<usize>,
    strategy: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &StringRecord) -> Self {
        let cols: Vec<String> = header.iter().map(|c| c.trim().to_lowercase()).collect();
        let find = |aliases: &[&str]| cols.iter().position(|c| aliases.contains(&c.as_str()));
        Self {
            date: find(DATE_ALIASES),
            close: find(CLOSE_ALIASES),
            signal: find(SIGNAL_ALIASES),
            outcome: find(OUTCOME_ALIASES),
            benchmark: find(BENCHMARK_ALIASES),
            strategy: find(STRATEGY_ALIASES),
        }
    }
}

/// Parses raw delimited text into date-sorted rows.
///
/// Malformed individual rows (unparseable date, non-finite close) are
/// dropped silently and never abort the parse. The function fails only
/// when the input cannot be tokenized as tabular text at all.
pub fn parse_rows(text: &str) -> Result<Vec<Row>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let header = reader.headers()?.clone();
    let cols = ColumnMap::from_header(&header);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(err) => {
                // A mangled line is a malformed row, not a parse failure.
                debug!(%err, "dropping untokenizable record");
                continue;
            }
        };
        if let Some(row) = row_from_record(&record, &cols) {
            rows.push(row);
        }
    }

    rows.sort_by_key(|r| r.date);
    Ok(rows)
}

fn row_from_record(record: &StringRecord, cols: &ColumnMap) -> Option<Row> {
    let cell = |i: Option<usize>| i.and_then(|i| record.get(i)).filter(|c| !c.is_empty());

    let date = parse_date(cell(cols.date)?)?;
    let close = cell(cols.close)?
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite())?;
    let signal = Signal::normalize(cell(cols.signal));
    let outcome = Outcome::normalize(cell(cols.outcome));
    let benchmark = finite_number(cell(cols.benchmark));
    let strategy = finite_number(cell(cols.strategy));

    Some(Row {
        date,
        close,
        signal,
        benchmark,
        strategy,
        outcome,
    })
}

fn finite_number(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    // Accept a leading date in datetime cells like "2024-01-02T00:00:00".
    let head = raw.split(['T', ' ']).next().unwrap_or(raw);
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(head, f).ok())
}

/// Reads the CSV at `path`, falling back to the embedded demo dataset when
/// the file is missing, unreadable, or too small to be plausible data.
/// Absence of external data never blocks rendering.
pub fn load_or_demo(path: Option<&Path>, cfg: &AnalyticsConfig) -> String {
    let Some(path) = path else {
        debug!("no csv path given, using embedded demo data");
        return DEMO_CSV.to_string();
    };
    match std::fs::read_to_string(path) {
        Ok(text) if text.trim().len() >= cfg.min_plausible_csv_bytes => text,
        Ok(text) => {
            warn!(
                path = %path.display(),
                bytes = text.trim().len(),
                "csv too small to be plausible, using embedded demo data"
            );
            DEMO_CSV.to_string()
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read csv, using embedded demo data");
            DEMO_CSV.to_string()
        }
    }
}
