//! User engagement scoring.
//!
//! A batch of raw items is validated into [`UserRecord`]s, scored through a
//! fixed sequence of rubric stages, categorized on the merit score, and then
//! adjusted per country. Failures are isolated per item.

pub mod batch;
pub mod category;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod intake;
pub mod report;
pub mod rubric;
pub mod rules;
pub mod sample;
pub mod validation;

#[cfg(test)]
mod tests;

pub use batch::{process_users, BatchOutcome, ItemFailure, ScoringEngine, MAX_VISITED};
pub use category::{apply_country_multiplier, categorize, country_multiplier, round_score};
pub use diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticSink, MemorySink, TracingSink};
pub use domain::{AccountStatus, ScoreCategory, UserInput, UserRecord, UserResult};
pub use error::ScoringError;
pub use intake::{BatchFormat, IntakeError};
pub use report::{CategoryCount, ScoreReport, ScoreSummary};
pub use rubric::ScoringRubric;
pub use rules::{
    calculate_score, score_breakdown, Adjustment, ScoreBreakdown, ScoreComponent, ScoreStage,
};
pub use validation::validate_input;
