use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, VocabError};
use crate::record::VocabRecord;

/// Parse a JSON document into a list of vocabulary records
///
/// The top-level value must be an array. Elements that are not objects fail
/// soft to an all-empty record, and an ill-typed field within an object
/// blanks only itself, so every input element still produces one output row
///
/// # Arguments
/// - `text` - The JSON document to parse
///
/// # Errors
/// - `VocabError::Json` if the text is not valid JSON
/// - `VocabError::NotAnArray` if the top-level value is anything but an array
///
/// # Returns
/// The records in input order
pub fn from_str(text: &str) -> Result<Vec<VocabRecord>> {
    let value: Value = serde_json::from_str(text)?;

    let items = value
        .as_array()
        .ok_or_else(|| VocabError::NotAnArray(json_type_name(&value)))?;

    Ok(items.iter().map(VocabRecord::from_value).collect())
}

/// Read a JSON vocabulary file into a list of records
///
/// The whole file is read into memory before parsing; there is no streaming
///
/// # Arguments
/// - `path` - The path to the UTF-8 JSON file to read
///
/// # Returns
/// The records in input order, or an error if the file cannot be read or parsed
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<VocabRecord>> {
    let text = fs::read_to_string(path)?;
    from_str(&text)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
