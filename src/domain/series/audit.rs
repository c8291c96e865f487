use serde::Serialize;

use super::types::{Outcome, Row, Signal};

/// How many signal flips the audit trail retains.
const AUDIT_TRAIL_LEN: usize = 12;

/// One entry in the signal audit trail: the date a recommendation flipped
/// and the signal it flipped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalChange {
    pub date: String,
    pub signal: Signal,
}

/// Extracts the signal flips (changes only) from a date-sorted row set,
/// most recent first, capped at the last twelve.
pub fn signal_changes(rows: &[Row]) -> Vec<SignalChange> {
    let mut changes = Vec::new();
    let mut prev: Option<Signal> = None;
    for r in rows {
        if prev != Some(r.signal) {
            changes.push(SignalChange {
                date: r.date.format("%Y-%m-%d").to_string(),
                signal: r.signal,
            });
            prev = Some(r.signal);
        }
    }
    let drop_front = changes.len().saturating_sub(AUDIT_TRAIL_LEN);
    changes.drain(..drop_front);
    changes.reverse();
    changes
}

/// Tally of TP/TN/FP/FN classification labels over a row set. `total` is
/// floored at 1 so share calculations never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub total: usize,
}

pub fn outcome_counts(rows: &[Row]) -> OutcomeCounts {
    let mut tp = 0;
    let mut tn = 0;
    let mut fp = 0;
    let mut fnn = 0;
    for r in rows {
        match r.outcome {
            Some(Outcome::Tp) => tp += 1,
            Some(Outcome::Tn) => tn += 1,
            Some(Outcome::Fp) => fp += 1,
            Some(Outcome::Fn) => fnn += 1,
            None => {}
        }
    }
    OutcomeCounts {
        true_positives: tp,
        true_negatives: tn,
        false_positives: fp,
        false_negatives: fnn,
        total: (tp + tn + fp + fnn).max(1),
    }
}

/// The latest row's signal ("today"), if any rows exist.
pub fn latest_signal(rows: &[Row]) -> Option<Signal> {
    rows.last().map(|r| r.signal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(day: u32, signal: Signal, outcome: Option<Outcome>) -> Row {
        Row {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            close: 100.0,
            signal,
            benchmark: None,
            strategy: None,
            outcome,
        }
    }

    #[test]
    fn test_signal_changes_records_flips_only() {
        let rows = vec![
            row(1, Signal::Hold, None),
            row(2, Signal::Hold, None),
            row(3, Signal::Buy, None),
            row(4, Signal::Buy, None),
            row(5, Signal::Hold, None),
        ];
        let changes = signal_changes(&rows);
        assert_eq!(changes.len(), 3);
        // Newest first
        assert_eq!(changes[0].date, "2024-01-05");
        assert_eq!(changes[0].signal, Signal::Hold);
        assert_eq!(changes[2].date, "2024-01-01");
    }

    #[test]
    fn test_signal_changes_capped_at_twelve() {
        let rows: Vec<Row> = (1..=28)
            .map(|d| {
                let s = if d % 2 == 0 { Signal::Buy } else { Signal::Hold };
                row(d, s, None)
            })
            .collect();
        let changes = signal_changes(&rows);
        assert_eq!(changes.len(), 12);
        assert_eq!(changes[0].date, "2024-01-28");
    }

    #[test]
    fn test_outcome_counts_total_floored_at_one() {
        let counts = outcome_counts(&[row(1, Signal::Hold, None)]);
        assert_eq!(counts.total, 1);
        assert_eq!(counts.true_positives, 0);
    }

    #[test]
    fn test_outcome_counts_tally() {
        let rows = vec![
            row(1, Signal::Buy, Some(Outcome::Tp)),
            row(2, Signal::Hold, Some(Outcome::Tn)),
            row(3, Signal::Buy, Some(Outcome::Fp)),
            row(4, Signal::Hold, Some(Outcome::Fn)),
            row(5, Signal::Hold, Some(Outcome::Tn)),
            row(6, Signal::Hold, None),
        ];
        let counts = outcome_counts(&rows);
        assert_eq!(counts.true_positives, 1);
        assert_eq!(counts.true_negatives, 2);
        assert_eq!(counts.false_positives, 1);
        assert_eq!(counts.false_negatives, 1);
        assert_eq!(counts.total, 5);
    }

    #[test]
    fn test_latest_signal() {
        assert_eq!(latest_signal(&[]), None);
        let rows = vec![row(1, Signal::Hold, None), row(2, Signal::Buy, None)];
        assert_eq!(latest_signal(&rows), Some(Signal::Buy));
    }
}
