//! Parser for the leaderboard text blob: `(id,name,score),(id,name,score),...`
//!
//! Malformed segments are skipped, never fatal.

use crate::constants::{RECORD_FIELD_COUNT, RECORD_SEPARATOR};
use crate::error::UtilError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPlayer {
    pub public_id: String,
    pub name: String,
    pub score: i64,
}

/// Outcome of parsing a whole blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordParse {
    pub players: Vec<TopPlayer>,
    pub rejected: Vec<UtilError>,
}

impl RecordParse {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse a single `id,name,score` segment. Parentheses anywhere in the
/// segment are ignored and fields are trimmed.
pub fn parse_record(segment: &str) -> Result<TopPlayer, UtilError> {
    let cleaned: String = segment.chars().filter(|c| *c != '(' && *c != ')').collect();
    let fields: Vec<&str> = cleaned
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    if fields.len() != RECORD_FIELD_COUNT {
        return Err(UtilError::FieldCount {
            segment: segment.to_string(),
            found: fields.len(),
        });
    }

    let score = fields[2]
        .parse::<i64>()
        .map_err(|_| UtilError::InvalidScore {
            segment: segment.to_string(),
            value: fields[2].to_string(),
        })?;

    Ok(TopPlayer {
        public_id: fields[0].to_string(),
        name: fields[1].to_string(),
        score,
    })
}

/// Parse every segment, keeping both the good records and the failures.
pub fn parse_records_report(text: &str) -> RecordParse {
    let mut report = RecordParse::default();
    for segment in text
        .split(RECORD_SEPARATOR)
        .filter(|s| !s.trim().is_empty())
    {
        match parse_record(segment) {
            Ok(player) => report.players.push(player),
            Err(e) => report.rejected.push(e),
        }
    }
    report
}

/// Parse the blob, logging and dropping malformed segments.
pub fn parse_records(text: &str) -> Vec<TopPlayer> {
    let report = parse_records_report(text);
    for error in &report.rejected {
        warn!("skipping top player record: {}", error);
    }
    report.players
}
