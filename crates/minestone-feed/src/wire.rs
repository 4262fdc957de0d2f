//! Wire-format parsing for feed payloads.

use chrono::DateTime;
use minestone_types::FeedSample;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while parsing feed payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The payload was not valid JSON or did not match the expected shape.
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// The payload was syntactically valid but contained no samples.
    #[error("Payload contained no samples")]
    Empty,

    /// A record carried a timestamp outside the representable range.
    #[error("Unrepresentable timestamp: {0}")]
    BadTimestamp(i64),
}

/// A single block record as the primary endpoint reports it.
///
/// Unknown fields are ignored; public block-explorer payloads carry many.
#[derive(Debug, Deserialize)]
struct BlockRecord {
    height: u64,
    time: i64,
}

/// The two payload shapes the primary endpoint may use: a bare array of
/// records, or an object wrapping them in a `blocks` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BlockPayload {
    Wrapped { blocks: Vec<BlockRecord> },
    Bare(Vec<BlockRecord>),
}

impl BlockPayload {
    fn into_records(self) -> Vec<BlockRecord> {
        match self {
            Self::Wrapped { blocks } => blocks,
            Self::Bare(records) => records,
        }
    }
}

/// Parses the primary endpoint's JSON batch into feed samples.
///
/// The batch is returned in payload order; callers sort. A valid payload
/// must contain at least one record.
///
/// # Errors
///
/// Returns an error if the payload is malformed, empty, or carries an
/// unrepresentable timestamp.
pub fn parse_block_batch(data: &[u8]) -> Result<Vec<FeedSample>, ParseError> {
    let payload: BlockPayload =
        serde_json::from_slice(data).map_err(|e| ParseError::Malformed(e.to_string()))?;

    let records = payload.into_records();
    if records.is_empty() {
        return Err(ParseError::Empty);
    }

    records
        .into_iter()
        .map(|record| {
            let timestamp = DateTime::from_timestamp(record.time, 0)
                .ok_or(ParseError::BadTimestamp(record.time))?;
            Ok(FeedSample::new(record.height, timestamp))
        })
        .collect()
}

/// Parses the fallback endpoint's plain-text height.
///
/// Accepts an integer or an integral float body; non-finite, negative, or
/// absent values are failures.
///
/// # Errors
///
/// Returns an error if the body is empty or not a usable number.
pub fn parse_height(text: &str) -> Result<u64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Ok(height) = trimmed.parse::<u64>() {
        return Ok(height);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseError::Malformed(format!("not a number: {trimmed:?}")))?;
    if !value.is_finite() || value < 0.0 || value > u64::MAX as f64 {
        return Err(ParseError::Malformed(format!("not a usable height: {value}")));
    }

    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wrapped_batch() {
        let payload = br#"{"blocks":[
            {"height":868423,"time":1730000000,"hash":"00000000abc"},
            {"height":868422,"time":1729999400}
        ]}"#;

        let samples = parse_block_batch(payload).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].height, 868_423);
        assert_eq!(samples[0].timestamp.timestamp(), 1_730_000_000);
    }

    #[test]
    fn test_parse_bare_array() {
        let payload = br#"[{"height":100,"time":1600000000},{"height":99,"time":1599999400}]"#;

        let samples = parse_block_batch(payload).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].height, 99);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let payload = br#"[{"height":1,"time":1600000000,"tx_count":2104,"size":998877}]"#;
        assert_eq!(parse_block_batch(payload).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_batch_is_failure() {
        assert_eq!(parse_block_batch(br#"{"blocks":[]}"#), Err(ParseError::Empty));
        assert_eq!(parse_block_batch(b"[]"), Err(ParseError::Empty));
    }

    #[test]
    fn test_malformed_batch() {
        assert!(matches!(
            parse_block_batch(b"not json"),
            Err(ParseError::Malformed(_))
        ));
        // Negative heights do not fit the record shape.
        assert!(matches!(
            parse_block_batch(br#"[{"height":-5,"time":1600000000}]"#),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_height() {
        assert_eq!(parse_height("868423"), Ok(868_423));
        assert_eq!(parse_height("  868423\n"), Ok(868_423));
        assert_eq!(parse_height("868423.0"), Ok(868_423));
        assert_eq!(parse_height("0"), Ok(0));
    }

    #[test]
    fn test_parse_height_rejects_unusable() {
        assert_eq!(parse_height(""), Err(ParseError::Empty));
        assert_eq!(parse_height("   "), Err(ParseError::Empty));
        assert!(parse_height("NaN").is_err());
        assert!(parse_height("inf").is_err());
        assert!(parse_height("-1").is_err());
        assert!(parse_height("height").is_err());
    }
}
