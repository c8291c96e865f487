use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized recommendation state for one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Hold,
}

impl Signal {
    /// Normalizes a raw cell: case-insensitive "BUY" maps to `Buy`,
    /// everything else (including an absent cell) maps to `Hold`.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("BUY") => Signal::Buy,
            _ => Signal::Hold,
        }
    }
}

/// Classification label for a signal against the realized outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Tp,
    Tn,
    Fp,
    Fn,
}

impl Outcome {
    /// Maps a raw cell to a label only on an exact (case-insensitive)
    /// match. Invalid values are dropped, never defaulted.
    pub fn normalize(raw: Option<&str>) -> Option<Self> {
        match raw?.trim().to_ascii_uppercase().as_str() {
            "TP" => Some(Outcome::Tp),
            "TN" => Some(Outcome::Tn),
            "FP" => Some(Outcome::Fp),
            "FN" => Some(Outcome::Fn),
            _ => None,
        }
    }
}

/// One parsed input record. Collections of rows are always kept sorted
/// ascending by date; rows are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub date: NaiveDate,
    pub close: f64,
    pub signal: Signal,
    pub benchmark: Option<f64>,
    pub strategy: Option<f64>,
    pub outcome: Option<Outcome>,
}

/// One display-ready sample derived from a [`Row`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// ISO calendar date, `YYYY-MM-DD`.
    pub t: String,
    pub strategy_value: f64,
    pub benchmark_value: f64,
    pub close_price: f64,
    pub signal: Option<Signal>,
    pub outcome: Option<Outcome>,
    /// 0-based axis index, assigned only after slicing.
    pub x: Option<usize>,
}

impl Point {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.t, "%Y-%m-%d").ok()
    }
}
