/// Fixed weights and thresholds of the scoring pipeline.
///
/// Every threshold is an exclusive lower bound: a value must be strictly
/// greater than the threshold to land in the higher bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRubric {
    pub adult_age_threshold: u32,
    pub adult_base_score: f64,
    pub minor_base_score: f64,

    pub high_post_count: u64,
    pub medium_post_count: u64,
    pub high_post_bonus: f64,
    pub medium_post_bonus: f64,

    pub high_follower_count: u64,
    pub medium_follower_count: u64,
    pub high_follower_multiplier: f64,
    pub medium_follower_multiplier: f64,

    pub active_status_bonus: f64,
    pub inactive_status_bonus: f64,
    pub other_status_bonus: f64,

    pub high_avg_likes: f64,
    pub medium_avg_likes: f64,
    pub high_avg_likes_bonus: f64,
    pub medium_avg_likes_bonus: f64,
    pub low_avg_likes_bonus: f64,

    pub final_score_multiplier: f64,

    pub excellent_threshold: f64,
    pub good_threshold: f64,
    pub average_threshold: f64,

    pub country_multipliers: &'static [(&'static str, f64)],
    pub default_country_multiplier: f64,
}

const COUNTRY_MULTIPLIERS: &[(&str, f64)] = &[("US", 1.1), ("UK", 1.05)];

impl ScoringRubric {
    pub const fn standard() -> Self {
        Self {
            adult_age_threshold: 18,
            adult_base_score: 100.0,
            minor_base_score: 50.0,

            high_post_count: 10,
            medium_post_count: 5,
            high_post_bonus: 20.0,
            medium_post_bonus: 10.0,

            high_follower_count: 1000,
            medium_follower_count: 500,
            high_follower_multiplier: 1.5,
            medium_follower_multiplier: 1.2,

            active_status_bonus: 25.0,
            inactive_status_bonus: 0.0,
            other_status_bonus: 5.0,

            high_avg_likes: 50.0,
            medium_avg_likes: 20.0,
            high_avg_likes_bonus: 30.0,
            medium_avg_likes_bonus: 15.0,
            low_avg_likes_bonus: 5.0,

            final_score_multiplier: 0.8,

            excellent_threshold: 150.0,
            good_threshold: 100.0,
            average_threshold: 50.0,

            country_multipliers: COUNTRY_MULTIPLIERS,
            default_country_multiplier: 1.0,
        }
    }
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self::standard()
    }
}
