use thiserror::Error;

/// Errors raised while turning raw text into rows.
///
/// Malformed individual rows are never errors; they are dropped during
/// parsing. Parsing fails only when the input cannot be tokenized as
/// tabular text at all.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("failed to tokenize input as tabular text: {0}")]
    Tokenize(#[from] csv::Error),
}
