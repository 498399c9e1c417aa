//! Unit tests for metric extraction.

use super::*;
use serde_json::json;

#[test]
fn test_count_in_data() {
    let payload = json!({"data": {"count": 5}});

    assert_eq!(extract_metric(&payload), Some("count=5".to_string()));
}

#[test]
fn test_list_in_data() {
    let payload = json!({"data": {"list": [1, 2, 3]}});

    assert_eq!(extract_metric(&payload), Some("items=3".to_string()));
}

#[test]
fn test_data_is_array() {
    let payload = json!({"data": [1, 2, 3, 4]});

    assert_eq!(extract_metric(&payload), Some("items=4".to_string()));
}

#[test]
fn test_no_recognized_key() {
    let payload = json!({"code": 0});

    assert_eq!(extract_metric(&payload), None);
}

#[test]
fn test_payload_not_an_object() {
    assert_eq!(extract_metric(&json!([1, 2, 3])), None);
    assert_eq!(extract_metric(&json!("ok")), None);
    assert_eq!(extract_metric(&json!(null)), None);
}

#[test]
fn test_envelope_unwrapped_only_when_data_present() {
    // No "data" key: probes run against the payload itself.
    let payload = json!({"code": 0, "count": 12});

    assert_eq!(extract_metric(&payload), Some("count=12".to_string()));
}

#[test]
fn test_lowercase_count_wins_over_uppercase() {
    let payload = json!({"data": {"count": 1, "Count": 2}});

    assert_eq!(extract_metric(&payload), Some("count=1".to_string()));
}

#[test]
fn test_uppercase_count_used_when_lowercase_absent() {
    let payload = json!({"data": {"Count": 3000}});

    assert_eq!(extract_metric(&payload), Some("Count=3000".to_string()));
}

#[test]
fn test_count_takes_priority_over_total_and_list() {
    let payload = json!({"data": {"count": 7, "total": 9, "list": [1]}});

    assert_eq!(extract_metric(&payload), Some("count=7".to_string()));
}

#[test]
fn test_total() {
    let payload = json!({"data": {"total": 5105, "exchanges": []}});

    assert_eq!(extract_metric(&payload), Some("total=5105".to_string()));
}

#[test]
fn test_list_must_be_an_array() {
    let payload = json!({"data": {"list": "not-a-list"}});

    assert_eq!(extract_metric(&payload), None);
}

#[test]
fn test_null_data_yields_none() {
    let payload = json!({"code": 0, "message": "success", "data": null});

    assert_eq!(extract_metric(&payload), None);
}

#[test]
fn test_string_values_render_bare() {
    let payload = json!({"data": {"count": "many"}});

    assert_eq!(extract_metric(&payload), Some("count=many".to_string()));
}

#[test]
fn test_extraction_is_idempotent() {
    let payload = json!({"data": {"list": [1, 2, 3]}});

    assert_eq!(extract_metric(&payload), extract_metric(&payload));
}
