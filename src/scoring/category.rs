use super::domain::ScoreCategory;
use super::rubric::ScoringRubric;

/// Maps a score onto its category. Total over `f64`; NaN compares false
/// against every threshold and lands in `Poor`.
pub fn categorize(score: f64, rubric: &ScoringRubric) -> ScoreCategory {
    if score > rubric.excellent_threshold {
        ScoreCategory::Excellent
    } else if score > rubric.good_threshold {
        ScoreCategory::Good
    } else if score > rubric.average_threshold {
        ScoreCategory::Average
    } else {
        ScoreCategory::Poor
    }
}

/// Multiplier for an exact, case-sensitive country code.
pub fn country_multiplier(country: &str, rubric: &ScoringRubric) -> f64 {
    rubric
        .country_multipliers
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(rubric.default_country_multiplier)
}

pub fn apply_country_multiplier(score: f64, country: &str, rubric: &ScoringRubric) -> f64 {
    score * country_multiplier(country, rubric)
}

/// Rounds half away from zero to two decimals.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rubric() -> ScoringRubric {
        ScoringRubric::standard()
    }

    #[test]
    fn breakpoints_are_exclusive() {
        let rubric = rubric();
        assert_eq!(categorize(150.0, &rubric), ScoreCategory::Good);
        assert_eq!(categorize(150.01, &rubric), ScoreCategory::Excellent);
        assert_eq!(categorize(100.0, &rubric), ScoreCategory::Average);
        assert_eq!(categorize(100.5, &rubric), ScoreCategory::Good);
        assert_eq!(categorize(50.0, &rubric), ScoreCategory::Poor);
        assert_eq!(categorize(50.1, &rubric), ScoreCategory::Average);
    }

    #[test]
    fn every_real_score_gets_exactly_one_category() {
        let rubric = rubric();
        assert_eq!(categorize(f64::NEG_INFINITY, &rubric), ScoreCategory::Poor);
        assert_eq!(categorize(-12.0, &rubric), ScoreCategory::Poor);
        assert_eq!(categorize(f64::INFINITY, &rubric), ScoreCategory::Excellent);
        assert_eq!(categorize(f64::NAN, &rubric), ScoreCategory::Poor);

        let mut previous = ScoreCategory::Poor;
        let mut changes = 0;
        for step in 0..=400 {
            let category = categorize(step as f64 * 0.5, &rubric);
            if category != previous {
                changes += 1;
                previous = category;
            }
        }
        assert_eq!(changes, 3, "category should only change at 50, 100 and 150");
    }

    #[test]
    fn country_codes_match_exactly() {
        let rubric = rubric();
        assert_eq!(country_multiplier("US", &rubric), 1.1);
        assert_eq!(country_multiplier("UK", &rubric), 1.05);
        assert_eq!(country_multiplier("us", &rubric), 1.0);
        assert_eq!(country_multiplier(" US", &rubric), 1.0);
        assert_eq!(country_multiplier("DE", &rubric), 1.0);
        assert_eq!(apply_country_multiplier(80.0, "CA", &rubric), 80.0);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round_score(176.0 * 1.1), 193.6);
        assert_eq!(round_score(151.360_000_000_001), 151.36);
        assert_eq!(round_score(44.0), 44.0);
    }
}
