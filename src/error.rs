//! Error types for the fallible (`try_*`) variants of the utilities.

use thiserror::Error;

/// Broad category a [`UtilError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller asked for something the inputs cannot satisfy.
    InvalidArgument,
    /// A text field could not be converted to the expected type.
    ParseFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilError {
    #[error("cannot draw {requested} unique values from a population of {available}")]
    SampleTooLarge { requested: usize, available: u64 },

    #[error("record `{segment}` has {found} fields, expected 3")]
    FieldCount { segment: String, found: usize },

    #[error("record `{segment}` has a non-numeric score `{value}`")]
    InvalidScore { segment: String, value: String },
}

impl UtilError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UtilError::SampleTooLarge { .. } | UtilError::FieldCount { .. } => {
                ErrorKind::InvalidArgument
            }
            UtilError::InvalidScore { .. } => ErrorKind::ParseFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let too_large = UtilError::SampleTooLarge {
            requested: 5,
            available: 3,
        };
        assert_eq!(too_large.kind(), ErrorKind::InvalidArgument);

        let fields = UtilError::FieldCount {
            segment: "id3,OnlyTwoFields".to_string(),
            found: 2,
        };
        assert_eq!(fields.kind(), ErrorKind::InvalidArgument);

        let score = UtilError::InvalidScore {
            segment: "id1,Alice,ten".to_string(),
            value: "ten".to_string(),
        };
        assert_eq!(score.kind(), ErrorKind::ParseFailure);
    }

    #[test]
    fn test_display_mentions_sizes() {
        let err = UtilError::SampleTooLarge {
            requested: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot draw 5 unique values from a population of 3"
        );
    }
}
