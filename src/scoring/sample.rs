use serde_json::json;

use super::domain::{AccountStatus, UserInput, UserRecord};

/// Demonstration batch mixing mappings, a typed record, and one malformed
/// item (negative age and a misspelled `status` key).
pub fn demo_batch() -> Vec<UserInput> {
    vec![
        UserInput::from(json!({
            "id": 1, "age": 25, "posts": 15, "followers": 1200,
            "status": "active", "total_likes": 500, "country": "US"
        })),
        UserInput::from(json!({
            "id": 2, "age": 16, "posts": 3, "followers": 100,
            "status": "inactive", "total_likes": 20, "country": "CA"
        })),
        UserInput::from(json!({
            "id": 3, "age": 30, "posts": 0, "followers": 50,
            "status": "active", "total_likes": 0, "country": "UK"
        })),
        UserInput::Record(UserRecord {
            id: 4,
            age: 22,
            posts: 8,
            followers: 800,
            status: AccountStatus::Active,
            total_likes: 200,
            country: "US".to_string(),
        }),
        UserInput::from(json!({
            "id": 5, "age": -5, "posts": 10, "followers": 100,
            "statuss": "active", "total_likes": 50, "country": "DE"
        })),
    ]
}
