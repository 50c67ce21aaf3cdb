use thiserror::Error;

use crate::model::catalog::CatalogError;

/// A recognized line that does not carry what the page layout promises.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("anchor {anchor:?} not found in {text:?}")]
    MissingAnchor { anchor: String, text: String },
    #[error("expected a number, got {0:?}")]
    InvalidNumber(String),
    #[error("weapon stat block not closed by </span>: {0:?}")]
    UnterminatedStatBlock(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Text strictly between the first `start` and the first `end` after it.
/// `None` for `start` means the beginning of `text`, `None` for `end` the rest.
pub fn between<'a>(
    text: &'a str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<&'a str, ExtractionError> {
    let from = match start {
        Some(anchor) => text.find(anchor).map(|i| i + anchor.len()).ok_or_else(|| {
            ExtractionError::MissingAnchor {
                anchor: anchor.to_string(),
                text: text.to_string(),
            }
        })?,
        None => 0,
    };
    let rest = &text[from..];
    match end {
        Some(anchor) => rest
            .find(anchor)
            .map(|i| &rest[..i])
            .ok_or_else(|| ExtractionError::MissingAnchor {
                anchor: anchor.to_string(),
                text: text.to_string(),
            }),
        None => Ok(rest),
    }
}

/// Everything after the first `anchor`.
pub fn after<'a>(text: &'a str, anchor: &str) -> Result<&'a str, ExtractionError> {
    between(text, Some(anchor), None)
}

/// Everything before the first `anchor`.
pub fn before<'a>(text: &'a str, anchor: &str) -> Result<&'a str, ExtractionError> {
    between(text, None, Some(anchor))
}

pub fn to_int(s: &str) -> Result<i64, ExtractionError> {
    let t = s.trim();
    if t.is_empty() || !t.trim_start_matches('-').bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExtractionError::InvalidNumber(s.to_string()));
    }
    t.parse().map_err(|_| ExtractionError::InvalidNumber(s.to_string()))
}

pub fn to_float(s: &str) -> Result<f64, ExtractionError> {
    s.trim()
        .parse()
        .map_err(|_| ExtractionError::InvalidNumber(s.to_string()))
}
