use std::io::{self, Write};

use super::super::domain::UserResult;
use super::super::rules::{Adjustment, ScoreBreakdown};
use super::summary::ScoreSummary;

const RULE_WIDTH: usize = 50;

/// Writes the human-readable results block. Nothing is written for an empty
/// result set.
pub fn render_results<W: Write>(out: &mut W, results: &[UserResult]) -> io::Result<()> {
    let Some(summary) = ScoreSummary::from_results(results) else {
        return Ok(());
    };
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "USER SCORING RESULTS")?;
    writeln!(out, "{rule}")?;

    for result in results {
        writeln!(
            out,
            "User {}: {:.2} ({})",
            result.user_id, result.score, result.category
        )?;
    }

    writeln!(out, "\nSummary:")?;
    writeln!(out, "Average Score: {:.2}", summary.average_score)?;
    writeln!(out, "Highest Score: {:.2}", summary.highest_score)?;
    writeln!(out, "Lowest Score: {:.2}", summary.lowest_score)?;

    writeln!(out, "\nCategory Distribution:")?;
    for entry in &summary.category_counts {
        writeln!(out, "  {}: {}", entry.label, entry.count)?;
    }

    Ok(())
}

pub fn render_breakdowns<W: Write>(out: &mut W, breakdowns: &[ScoreBreakdown]) -> io::Result<()> {
    for (position, breakdown) in breakdowns.iter().enumerate() {
        if position > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "User {} (merit score {:.2})",
            breakdown.user_id, breakdown.total
        )?;
        for component in &breakdown.components {
            let change = match component.adjustment {
                Adjustment::Base(value) => format!("={value:.2}"),
                Adjustment::Bonus(value) => format!("+{value:.2}"),
                Adjustment::Multiplier(factor) => format!("x{factor:.2}"),
            };
            writeln!(
                out,
                "- {}: {} ({}) -> {:.2}",
                component.stage.label(),
                change,
                component.notes,
                component.running_total
            )?;
        }
    }
    Ok(())
}
