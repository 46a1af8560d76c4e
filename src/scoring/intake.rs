use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};

use super::domain::UserInput;

const INTEGER_FIELDS: [&str; 5] = ["id", "age", "posts", "followers", "total_likes"];

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("unable to read user batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON user batch: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed CSV user batch: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON user batch must be an array, found {0}")]
    NotAnArray(&'static str),
}

/// Input encodings understood by [`load_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Json,
    Csv,
}

impl BatchFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<UserInput>, IntakeError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    match BatchFormat::from_path(path) {
        BatchFormat::Json => from_json_reader(reader),
        BatchFormat::Csv => from_csv_reader(reader),
    }
}

/// Reads a JSON array; objects become mappings, anything else is kept as an
/// opaque slot so the batch can report it by index.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<UserInput>, IntakeError> {
    let document: Value = serde_json::from_reader(reader)?;
    match document {
        Value::Array(items) => Ok(items.into_iter().map(UserInput::from).collect()),
        Value::Object(_) => Err(IntakeError::NotAnArray("an object")),
        Value::Null => Err(IntakeError::NotAnArray("null")),
        Value::Bool(_) => Err(IntakeError::NotAnArray("a boolean")),
        Value::Number(_) => Err(IntakeError::NotAnArray("a number")),
        Value::String(_) => Err(IntakeError::NotAnArray("a string")),
    }
}

/// Reads a headed CSV file into mappings keyed by the header names.
///
/// Rows with a different cell count than the header are kept: missing cells
/// leave their key out and surplus cells land under `column_<n>`, so the
/// validator drops only that row. Only integer columns are trimmed before
/// parsing; a cell that does not parse keeps its raw text and the validator
/// rejects the row.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<UserInput>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut inputs = Vec::new();

    for record in csv_reader.records() {
        let row = record?;
        let mut map = Map::new();
        for (position, cell) in row.iter().enumerate() {
            let (key, value) = match headers.get(position) {
                Some(header) => (header.to_string(), cell_value(header, cell)),
                None => (
                    format!("column_{}", position + 1),
                    Value::String(cell.to_string()),
                ),
            };
            map.insert(key, value);
        }
        inputs.push(UserInput::Mapping(map));
    }

    Ok(inputs)
}

fn cell_value(header: &str, cell: &str) -> Value {
    if INTEGER_FIELDS.contains(&header) {
        if let Ok(number) = cell.trim().parse::<i64>() {
            return Value::from(number);
        }
    }
    Value::String(cell.to_string())
}
