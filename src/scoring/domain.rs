use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical user record once the validator has accepted it.
///
/// Counters are unsigned, so a constructed record can never carry a negative
/// value; raw inputs with negatives are rejected before reaching this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub age: u32,
    pub posts: u64,
    pub followers: u64,
    pub status: AccountStatus,
    pub total_likes: u64,
    pub country: String,
}

/// Account status as reported upstream. Values other than `active` and
/// `inactive` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    Active,
    Inactive,
    Unrecognized(String),
}

impl AccountStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AccountStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// One item of a batch as it arrives at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum UserInput {
    /// Field name to value mapping, validated strictly against the record fields.
    Mapping(Map<String, Value>),
    /// Already-typed record; passes through validation unchanged.
    Record(UserRecord),
    /// Anything else found in a batch slot (`null`, numbers, arrays, ...).
    Opaque(Value),
}

impl From<Value> for UserInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Mapping(map),
            other => Self::Opaque(other),
        }
    }
}

impl From<Map<String, Value>> for UserInput {
    fn from(map: Map<String, Value>) -> Self {
        Self::Mapping(map)
    }
}

impl From<UserRecord> for UserInput {
    fn from(record: UserRecord) -> Self {
        Self::Record(record)
    }
}

/// Ordinal label summarizing the merit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Excellent,
    Good,
    Average,
    Poor,
}

impl ScoreCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome for one successfully processed user.
///
/// `score` is country-adjusted and rounded; `category` reflects the score
/// before the country multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResult {
    pub user_id: i64,
    pub score: f64,
    pub category: ScoreCategory,
}
