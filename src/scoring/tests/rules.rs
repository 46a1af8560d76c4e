use super::common::*;
use crate::scoring::diagnostics::DiagnosticLevel;
use crate::scoring::domain::AccountStatus;
use crate::scoring::rules::{
    average_likes, base_score, calculate_score, follower_multiplier, likes_bonus, post_bonus,
    score_breakdown, status_bonus, Adjustment, ScoreStage,
};

#[test]
fn breakdown_walks_every_stage_in_order() {
    let sink = sink();
    let breakdown = score_breakdown(&engaged_record(), &rubric(), &sink);

    let stages: Vec<ScoreStage> = breakdown
        .components
        .iter()
        .map(|component| component.stage)
        .collect();
    assert_eq!(
        stages,
        vec![
            ScoreStage::AgeBase,
            ScoreStage::PostBonus,
            ScoreStage::FollowerMultiplier,
            ScoreStage::StatusBonus,
            ScoreStage::AverageLikesBonus,
            ScoreStage::FinalScale,
        ]
    );

    let totals: Vec<f64> = breakdown
        .components
        .iter()
        .map(|component| component.running_total)
        .collect();
    for (actual, expected) in totals.iter().zip([100.0, 120.0, 180.0, 205.0, 220.0, 176.0]) {
        assert_close(*actual, expected);
    }
    assert_close(breakdown.total, 176.0);
    assert_eq!(breakdown.user_id, 1);
    assert_eq!(
        breakdown.components[2].adjustment,
        Adjustment::Multiplier(1.5)
    );
    assert!(sink.events().is_empty());
}

#[test]
fn calculate_score_matches_breakdown_total() {
    let record = record_with("US");
    let sink = sink();
    let breakdown = score_breakdown(&record, &rubric(), &sink);
    assert_eq!(calculate_score(&record, &rubric(), &sink), breakdown.total);
    assert_close(breakdown.total, 137.6);
}

#[test]
fn adult_threshold_is_exclusive() {
    let rubric = rubric();
    assert_eq!(base_score(0, &rubric), 50.0);
    assert_eq!(base_score(18, &rubric), 50.0);
    assert_eq!(base_score(19, &rubric), 100.0);
}

#[test]
fn post_bonus_buckets() {
    let rubric = rubric();
    assert_eq!(post_bonus(0, &rubric), 0.0);
    assert_eq!(post_bonus(5, &rubric), 0.0);
    assert_eq!(post_bonus(6, &rubric), 10.0);
    assert_eq!(post_bonus(10, &rubric), 10.0);
    assert_eq!(post_bonus(11, &rubric), 20.0);
}

#[test]
fn follower_multiplier_buckets() {
    let rubric = rubric();
    assert_eq!(follower_multiplier(500, &rubric), 1.0);
    assert_eq!(follower_multiplier(501, &rubric), 1.2);
    assert_eq!(follower_multiplier(1000, &rubric), 1.2);
    assert_eq!(follower_multiplier(1001, &rubric), 1.5);
}

#[test]
fn unrecognized_status_earns_small_bonus() {
    let rubric = rubric();
    assert_eq!(status_bonus(&AccountStatus::Active, &rubric), 25.0);
    assert_eq!(status_bonus(&AccountStatus::Inactive, &rubric), 0.0);
    assert_eq!(
        status_bonus(&AccountStatus::Unrecognized("banned".to_string()), &rubric),
        5.0
    );
}

#[test]
fn likes_bonus_low_bucket_is_not_zero() {
    let rubric = rubric();
    assert_eq!(likes_bonus(0.0, &rubric), 5.0);
    assert_eq!(likes_bonus(20.0, &rubric), 5.0);
    assert_eq!(likes_bonus(20.5, &rubric), 15.0);
    assert_eq!(likes_bonus(50.0, &rubric), 15.0);
    assert_eq!(likes_bonus(50.5, &rubric), 30.0);
}

#[test]
fn zero_posts_skip_average_and_warn() {
    let mut record = engaged_record();
    record.posts = 0;
    record.total_likes = 9_000;
    let sink = sink();

    assert_eq!(average_likes(&record, &sink), 0.0);

    let warnings = sink.messages(DiagnosticLevel::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("0 posts"));

    let breakdown = score_breakdown(&record, &rubric(), &sink);
    let likes = breakdown
        .components
        .iter()
        .find(|component| component.stage == ScoreStage::AverageLikesBonus)
        .expect("likes stage present");
    assert_eq!(likes.adjustment, Adjustment::Bonus(5.0));
}

#[test]
fn average_uses_real_division() {
    let record = engaged_record();
    let sink = sink();
    assert_close(average_likes(&record, &sink), 500.0 / 15.0);
}
