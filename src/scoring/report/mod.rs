mod summary;
mod text;

pub use summary::{CategoryCount, ScoreReport, ScoreSummary};
pub use text::{render_breakdowns, render_results};
