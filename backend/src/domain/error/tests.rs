//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
        .parse()
        .expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(trace_id.to_string().as_str()));
}

#[test]
fn new_without_scope_has_no_trace_id() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[test]
fn serialises_camel_case_and_omits_empty_fields() {
    let value = serde_json::to_value(Error::service_unavailable("down")).expect("serialise");
    assert_eq!(
        value,
        json!({ "code": "service_unavailable", "message": "down" })
    );
}

#[test]
fn deserialises_snake_case_trace_alias() {
    let error: Error = serde_json::from_value(json!({
        "code": "invalid_request",
        "message": "bad",
        "trace_id": "abc",
        "details": { "field": "userId" }
    }))
    .expect("deserialise");
    assert_eq!(error.trace_id(), Some("abc"));
    assert_eq!(error.details(), Some(&json!({ "field": "userId" })));
}
