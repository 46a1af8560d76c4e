use serde_json::{json, Value};

use crate::scoring::diagnostics::MemorySink;
use crate::scoring::domain::{AccountStatus, UserInput, UserRecord};
use crate::scoring::{ScoringEngine, ScoringRubric};

pub(super) fn rubric() -> ScoringRubric {
    ScoringRubric::standard()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(rubric())
}

pub(super) fn sink() -> MemorySink {
    MemorySink::default()
}

pub(super) fn mapping_value(
    id: i64,
    age: i64,
    posts: i64,
    followers: i64,
    status: &str,
    total_likes: i64,
    country: &str,
) -> Value {
    json!({
        "id": id,
        "age": age,
        "posts": posts,
        "followers": followers,
        "status": status,
        "total_likes": total_likes,
        "country": country,
    })
}

pub(super) fn mapping(
    id: i64,
    age: i64,
    posts: i64,
    followers: i64,
    status: &str,
    total_likes: i64,
    country: &str,
) -> UserInput {
    UserInput::from(mapping_value(
        id,
        age,
        posts,
        followers,
        status,
        total_likes,
        country,
    ))
}

/// Adult, highly followed, active user from the United States.
pub(super) fn engaged_record() -> UserRecord {
    UserRecord {
        id: 1,
        age: 25,
        posts: 15,
        followers: 1200,
        status: AccountStatus::Active,
        total_likes: 500,
        country: "US".to_string(),
    }
}

pub(super) fn record_with(country: &str) -> UserRecord {
    UserRecord {
        id: 4,
        age: 22,
        posts: 8,
        followers: 800,
        status: AccountStatus::Active,
        total_likes: 200,
        country: country.to_string(),
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
