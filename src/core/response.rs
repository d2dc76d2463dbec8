//! Response normalization
//!
//! Every outcome of an API call funnels through [`interpret`], which folds
//! transport status, malformed bodies, and the service's `opstat` envelope
//! into a single `Result`.

use reqwest::StatusCode;
use serde_json::Value;

use crate::core::errors::{GengoError, Result};

/// Interpret a raw HTTP outcome into the unwrapped result payload
pub(crate) fn interpret(status: StatusCode, body: &str) -> Result<Value> {
    // Catch connection-level failures surfaced as HTTP statuses
    if !status.is_success() {
        return Err(GengoError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let parsed: Value = serde_json::from_str(body).map_err(|_| GengoError::Parse {
        body: body.to_string(),
    })?;

    interpret_envelope(parsed)
}

/// Apply the `opstat` envelope contract to an already-parsed body
pub(crate) fn interpret_envelope(body: Value) -> Result<Value> {
    match body.get("opstat").and_then(Value::as_str) {
        // Error reported inside a 200 response; `err` may be absent
        Some("error") => Err(GengoError::Api {
            err: body.get("err").cloned().unwrap_or(Value::Null),
        }),
        Some("ok") => Ok(body.get("response").cloned().unwrap_or(Value::Null)),
        _ => Ok(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_server_error_status() {
        let err = interpret(StatusCode::INTERNAL_SERVER_ERROR, "boom").unwrap_err();
        match err {
            GengoError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ok_envelope_unwrapped() {
        let body = r#"{"opstat":"ok","response":{"id":42}}"#;
        let result = interpret(StatusCode::OK, body).unwrap();
        assert_json_eq!(result, json!({ "id": 42 }));
    }

    #[test]
    fn test_unparsable_body() {
        let err = interpret(StatusCode::OK, "not json").unwrap_err();
        match &err {
            GengoError::Parse { body } => assert_eq!(body, "not json"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("not json"));
    }

    #[test]
    fn test_error_envelope() {
        let body = r#"{"opstat":"error","err":"bad job id"}"#;
        let err = interpret(StatusCode::OK, body).unwrap_err();
        match err {
            GengoError::Api { err } => assert_eq!(err, json!("bad job id")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_envelope_without_err_field() {
        let err = interpret(StatusCode::OK, r#"{"opstat":"error"}"#).unwrap_err();
        match err {
            GengoError::Api { err } => assert_eq!(err, Value::Null),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_opstat_passthrough() {
        let body = r#"{"status":"fine","count":3}"#;
        let result = interpret(StatusCode::OK, body).unwrap();
        assert_json_eq!(result, json!({ "status": "fine", "count": 3 }));
    }

    #[test]
    fn test_ok_envelope_without_response_field() {
        let result = interpret(StatusCode::OK, r#"{"opstat":"ok"}"#).unwrap();
        assert_eq!(result, Value::Null);
    }

    #[test]
    fn test_redirect_status_is_error() {
        let err = interpret(StatusCode::FOUND, "").unwrap_err();
        assert!(matches!(err, GengoError::Status { status: 302, .. }));
    }
}
