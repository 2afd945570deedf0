use thiserror::Error;

/// Everything that can go wrong while fetching a month of calendar data.
///
/// The UI only ever shows `to_string()` of this, next to a retry action.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API Error: {status} - {body}")]
    Http { status: u16, body: String },
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
