use serde::Deserialize;
use serde_json::{Map, Value};

use super::diagnostics::DiagnosticSink;
use super::domain::{AccountStatus, UserInput, UserRecord};
use super::error::ScoringError;

/// Wire shape of a mapping item. Keys must match exactly: unknown keys and
/// missing keys are both structural errors, nothing is defaulted.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUserRecord {
    id: i64,
    age: i64,
    posts: i64,
    followers: i64,
    status: String,
    total_likes: i64,
    country: String,
}

/// Normalizes one batch item into a canonical [`UserRecord`].
pub fn validate_input(
    input: &UserInput,
    sink: &dyn DiagnosticSink,
) -> Result<UserRecord, ScoringError> {
    match input {
        UserInput::Record(record) => Ok(record.clone()),
        UserInput::Mapping(map) => record_from_mapping(map, sink),
        UserInput::Opaque(Value::Null) => Err(ScoringError::MissingAttribute { field: "id" }),
        UserInput::Opaque(other) => Err(ScoringError::InvalidStructure(format!(
            "expected an object, found {}",
            json_kind(other)
        ))),
    }
}

fn record_from_mapping(
    map: &Map<String, Value>,
    sink: &dyn DiagnosticSink,
) -> Result<UserRecord, ScoringError> {
    let raw: RawUserRecord = serde_json::from_value(Value::Object(map.clone()))
        .map_err(|err| ScoringError::InvalidStructure(err.to_string()))?;

    let age = non_negative("age", raw.age)?;
    let posts = non_negative("posts", raw.posts)?;
    let followers = non_negative("followers", raw.followers)?;
    let total_likes = non_negative("total_likes", raw.total_likes)?;

    let age = u32::try_from(age)
        .map_err(|_| ScoringError::InvalidStructure(format!("age {age} is out of range")))?;

    let status = AccountStatus::parse(&raw.status);
    if !status.is_recognized() {
        sink.warn(&format!(
            "user {} has unrecognized status '{}'",
            raw.id, raw.status
        ));
    }

    Ok(UserRecord {
        id: raw.id,
        age,
        posts,
        followers,
        status,
        total_likes,
        country: raw.country,
    })
}

fn non_negative(field: &'static str, value: i64) -> Result<u64, ScoringError> {
    u64::try_from(value).map_err(|_| ScoringError::NegativeValue { field })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
