use super::AnalysisError;
use super::finding::IngredientFinding;
use serde_json::Value;

/// Slice from the first `[` to the last `]`, inclusive
fn json_slice(reply: &str) -> Option<&str> {
    let start = reply.find('[')?;
    let end = reply.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

/// Pull the findings array out of free-form model output
///
/// Any record that fails to decode rejects the whole reply.
pub fn parse_findings(reply: &str) -> Result<Vec<IngredientFinding>, AnalysisError> {
    let slice = json_slice(reply).ok_or(AnalysisError::Format)?;

    let value: Value = serde_json::from_str(slice).map_err(AnalysisError::Decode)?;
    let Value::Array(items) = value else {
        return Err(AnalysisError::NotAnArray);
    };

    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<IngredientFinding>, _>>()
        .map_err(AnalysisError::Record)
}
