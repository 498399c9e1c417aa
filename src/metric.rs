//! Best-effort metric extraction from response payloads.

use serde_json::Value;

#[cfg(test)]
mod tests;

/// Produces a short summary token for a successful response, when the
/// payload happens to match one of the shapes the API commonly returns.
///
/// The envelope is unwrapped when a `data` key is present, otherwise the
/// payload is probed directly. Probes run in priority order and the first
/// match wins: `count`, then `Count` (a distinct key some endpoints use),
/// then `total`, then the length of a `list` array, then the length of the
/// value itself when it is an array. Anything else yields no metric; this
/// function never fails.
#[must_use]
pub fn extract_metric(payload: &Value) -> Option<String> {
    let object = payload.as_object()?;
    let data = object.get("data").unwrap_or(payload);

    match data {
        Value::Object(map) => {
            if let Some(count) = map.get("count") {
                Some(format!("count={}", render(count)))
            } else if let Some(count) = map.get("Count") {
                Some(format!("Count={}", render(count)))
            } else if let Some(total) = map.get("total") {
                Some(format!("total={}", render(total)))
            } else if let Some(Value::Array(list)) = map.get("list") {
                Some(format!("items={}", list.len()))
            } else {
                None
            }
        }
        Value::Array(list) => Some(format!("items={}", list.len())),
        _ => None,
    }
}

/// Renders a metric value: strings bare, everything else as JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
