/// Failure raised while processing a single batch item.
///
/// These never escape the batch processor; they are logged with the item
/// index and the item is left out of the results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("{field} cannot be negative")]
    NegativeValue { field: &'static str },
    #[error("invalid user data structure: {0}")]
    InvalidStructure(String),
    #[error("record has no `{field}` attribute")]
    MissingAttribute { field: &'static str },
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ScoringError {
    pub const fn kind(&self) -> &'static str {
        match self {
            ScoringError::NegativeValue { .. } => "negative_value",
            ScoringError::InvalidStructure(_) => "invalid_structure",
            ScoringError::MissingAttribute { .. } => "missing_attribute",
            ScoringError::Unexpected(_) => "unexpected",
        }
    }
}
