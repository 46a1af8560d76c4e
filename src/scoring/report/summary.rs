use serde::Serialize;

use super::super::batch::BatchOutcome;
use super::super::domain::{ScoreCategory, UserResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: ScoreCategory,
    pub label: &'static str,
    pub count: usize,
}

/// Aggregate statistics over a non-empty result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub total_users: usize,
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    /// Ordered by first appearance in the results.
    pub category_counts: Vec<CategoryCount>,
}

impl ScoreSummary {
    pub fn from_results(results: &[UserResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let total: f64 = results.iter().map(|result| result.score).sum();
        let highest_score = results
            .iter()
            .map(|result| result.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let lowest_score = results
            .iter()
            .map(|result| result.score)
            .fold(f64::INFINITY, f64::min);

        let mut category_counts: Vec<CategoryCount> = Vec::new();
        for result in results {
            match category_counts
                .iter_mut()
                .find(|entry| entry.category == result.category)
            {
                Some(entry) => entry.count += 1,
                None => category_counts.push(CategoryCount {
                    category: result.category,
                    label: result.category.label(),
                    count: 1,
                }),
            }
        }

        Some(Self {
            total_users: results.len(),
            average_score: total / results.len() as f64,
            highest_score,
            lowest_score,
            category_counts,
        })
    }

    pub fn count_for(&self, category: ScoreCategory) -> usize {
        self.category_counts
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

/// Machine-readable report: the batch outcome plus its summary.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport<'a> {
    #[serde(flatten)]
    pub outcome: &'a BatchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ScoreSummary>,
}

impl<'a> ScoreReport<'a> {
    pub fn new(outcome: &'a BatchOutcome) -> Self {
        Self {
            outcome,
            summary: ScoreSummary::from_results(&outcome.results),
        }
    }
}
