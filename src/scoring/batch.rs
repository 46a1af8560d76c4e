use serde::Serialize;

use super::category::{apply_country_multiplier, categorize, round_score};
use super::diagnostics::DiagnosticSink;
use super::domain::{UserInput, UserResult};
use super::error::ScoringError;
use super::rubric::ScoringRubric;
use super::rules::calculate_score;
use super::validation::validate_input;

/// Upper bound on items visited per batch, successful or not.
pub const MAX_VISITED: usize = 1000;

/// An item that was left out of the results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFailure {
    pub index: usize,
    pub kind: &'static str,
    pub message: String,
    #[serde(skip)]
    pub error: ScoringError,
}

impl ItemFailure {
    fn new(index: usize, error: ScoringError) -> Self {
        Self {
            index,
            kind: error.kind(),
            message: error.to_string(),
            error,
        }
    }
}

/// Everything one batch run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub results: Vec<UserResult>,
    pub failures: Vec<ItemFailure>,
    pub visited: usize,
    pub truncated: bool,
}

/// Stateless processor applying the rubric to every item of a batch.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    rubric: ScoringRubric,
}

impl ScoringEngine {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    /// Runs one item through validation, scoring, categorization and the
    /// country multiplier. The category is taken from the merit score before
    /// the multiplier; the reported score is the adjusted, rounded one.
    pub fn score_user(
        &self,
        input: &UserInput,
        sink: &dyn DiagnosticSink,
    ) -> Result<UserResult, ScoringError> {
        let record = validate_input(input, sink)?;
        let merit = calculate_score(&record, &self.rubric, sink);
        let category = categorize(merit, &self.rubric);

        let adjusted = apply_country_multiplier(merit, &record.country, &self.rubric);
        // Only reachable with a custom rubric; validated counts keep the
        // standard weights finite.
        if !adjusted.is_finite() {
            return Err(ScoringError::Unexpected(format!(
                "score for user {} is not a finite number",
                record.id
            )));
        }

        Ok(UserResult {
            user_id: record.id,
            score: round_score(adjusted),
            category,
        })
    }

    pub fn run(&self, inputs: &[UserInput], sink: &dyn DiagnosticSink) -> BatchOutcome {
        sink.info(&format!("Processing {} users...", inputs.len()));

        let mut results = Vec::new();
        let mut failures = Vec::new();
        let mut visited = 0;

        for (index, input) in inputs.iter().enumerate().take(MAX_VISITED) {
            visited += 1;
            match self.score_user(input, sink) {
                Ok(result) => results.push(result),
                Err(error) => {
                    let prefix = match error {
                        ScoringError::Unexpected(_) => "unexpected error processing user",
                        _ => "error processing user",
                    };
                    sink.error(&format!("{prefix} at index {index}: {error}"));
                    failures.push(ItemFailure::new(index, error));
                }
            }
        }

        let truncated = inputs.len() > visited;
        if truncated {
            sink.warn(&format!(
                "stopped after {visited} users; {} remaining users were not processed",
                inputs.len() - visited
            ));
        }

        if results.is_empty() {
            sink.warn("no users were successfully processed");
        } else {
            sink.info(&format!("successfully processed {} users", results.len()));
        }

        BatchOutcome {
            results,
            failures,
            visited,
            truncated,
        }
    }
}

/// Scores a batch with the standard rubric, returning only the successful
/// results in input order.
pub fn process_users(inputs: &[UserInput], sink: &dyn DiagnosticSink) -> Vec<UserResult> {
    ScoringEngine::default().run(inputs, sink).results
}
