use serde::Serialize;

use super::diagnostics::DiagnosticSink;
use super::domain::{AccountStatus, UserRecord};
use super::rubric::ScoringRubric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStage {
    AgeBase,
    PostBonus,
    FollowerMultiplier,
    StatusBonus,
    AverageLikesBonus,
    FinalScale,
}

impl ScoreStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AgeBase => "Age base",
            Self::PostBonus => "Post bonus",
            Self::FollowerMultiplier => "Follower multiplier",
            Self::StatusBonus => "Status bonus",
            Self::AverageLikesBonus => "Average likes bonus",
            Self::FinalScale => "Final scale",
        }
    }
}

/// How a stage changed the running total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Adjustment {
    Base(f64),
    Bonus(f64),
    Multiplier(f64),
}

impl Adjustment {
    fn apply(self, running: f64) -> f64 {
        match self {
            Adjustment::Base(value) => value,
            Adjustment::Bonus(value) => running + value,
            Adjustment::Multiplier(factor) => running * factor,
        }
    }
}

/// One step of the score audit trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub stage: ScoreStage,
    pub adjustment: Adjustment,
    pub running_total: f64,
    pub notes: String,
}

/// Raw score of a record together with the trail that produced it.
/// The total is neither rounded nor country-adjusted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub user_id: i64,
    pub total: f64,
    pub components: Vec<ScoreComponent>,
}

pub fn base_score(age: u32, rubric: &ScoringRubric) -> f64 {
    if age > rubric.adult_age_threshold {
        rubric.adult_base_score
    } else {
        rubric.minor_base_score
    }
}

pub fn post_bonus(posts: u64, rubric: &ScoringRubric) -> f64 {
    if posts > rubric.high_post_count {
        rubric.high_post_bonus
    } else if posts > rubric.medium_post_count {
        rubric.medium_post_bonus
    } else {
        0.0
    }
}

pub fn follower_multiplier(followers: u64, rubric: &ScoringRubric) -> f64 {
    if followers > rubric.high_follower_count {
        rubric.high_follower_multiplier
    } else if followers > rubric.medium_follower_count {
        rubric.medium_follower_multiplier
    } else {
        1.0
    }
}

pub fn status_bonus(status: &AccountStatus, rubric: &ScoringRubric) -> f64 {
    match status {
        AccountStatus::Active => rubric.active_status_bonus,
        AccountStatus::Inactive => rubric.inactive_status_bonus,
        AccountStatus::Unrecognized(_) => rubric.other_status_bonus,
    }
}

/// Likes per post; zero when the user has no posts.
pub fn average_likes(record: &UserRecord, sink: &dyn DiagnosticSink) -> f64 {
    if record.posts == 0 {
        sink.warn(&format!(
            "user {} has 0 posts, skipping average likes calculation",
            record.id
        ));
        return 0.0;
    }
    record.total_likes as f64 / record.posts as f64
}

pub fn likes_bonus(avg_likes: f64, rubric: &ScoringRubric) -> f64 {
    if avg_likes > rubric.high_avg_likes {
        rubric.high_avg_likes_bonus
    } else if avg_likes > rubric.medium_avg_likes {
        rubric.medium_avg_likes_bonus
    } else {
        rubric.low_avg_likes_bonus
    }
}

pub fn score_breakdown(
    record: &UserRecord,
    rubric: &ScoringRubric,
    sink: &dyn DiagnosticSink,
) -> ScoreBreakdown {
    let avg_likes = average_likes(record, sink);

    let stages = [
        (
            ScoreStage::AgeBase,
            Adjustment::Base(base_score(record.age, rubric)),
            format!("age {}", record.age),
        ),
        (
            ScoreStage::PostBonus,
            Adjustment::Bonus(post_bonus(record.posts, rubric)),
            format!("{} posts", record.posts),
        ),
        (
            ScoreStage::FollowerMultiplier,
            Adjustment::Multiplier(follower_multiplier(record.followers, rubric)),
            format!("{} followers", record.followers),
        ),
        (
            ScoreStage::StatusBonus,
            Adjustment::Bonus(status_bonus(&record.status, rubric)),
            format!("status '{}'", record.status),
        ),
        (
            ScoreStage::AverageLikesBonus,
            Adjustment::Bonus(likes_bonus(avg_likes, rubric)),
            format!("{avg_likes:.2} average likes per post"),
        ),
        (
            ScoreStage::FinalScale,
            Adjustment::Multiplier(rubric.final_score_multiplier),
            "final scale".to_string(),
        ),
    ];

    let mut total = 0.0;
    let mut components = Vec::with_capacity(stages.len());
    for (stage, adjustment, notes) in stages {
        total = adjustment.apply(total);
        components.push(ScoreComponent {
            stage,
            adjustment,
            running_total: total,
            notes,
        });
    }

    ScoreBreakdown {
        user_id: record.id,
        total,
        components,
    }
}

/// Raw merit score of a validated record, before rounding and the country
/// multiplier.
pub fn calculate_score(
    record: &UserRecord,
    rubric: &ScoringRubric,
    sink: &dyn DiagnosticSink,
) -> f64 {
    score_breakdown(record, rubric, sink).total
}
