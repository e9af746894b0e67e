//! Response decoder: turns a [`RawResponse`] into the resource's typed body or
//! a typed error. Exactly one of the two is produced.

use crate::dispatch::RawResponse;
use crate::resource::Resource;
use crate::types::ApiError;
use crate::Error;

/// Decodes `raw` using the schema registered for `R`.
///
/// - 2xx: body parsed as `R::Output`, or [`Error::Decode`] if it does not match.
/// - other: body parsed as [`ApiError`] into [`Error::Api`], or
///   [`Error::HttpStatus`] when the body is not an error object.
pub fn decode<R: Resource>(raw: RawResponse) -> Result<R::Output, Error> {
    if !raw.is_success() {
        return Err(decode_error(raw));
    }

    serde_json::from_str::<R::Output>(&raw.body).map_err(|e| {
        let snippet = truncate_body(&raw.body);
        tracing::error!("Failed to parse {} response: {} | body: {}", R::NAME, e, snippet);
        Error::Decode {
            resource: R::NAME,
            message: e.to_string(),
        }
    })
}

fn decode_error(raw: RawResponse) -> Error {
    match serde_json::from_str::<ApiError>(&raw.body) {
        Ok(error) => {
            tracing::error!(
                status = raw.status,
                request_id = error.request_id.as_deref().unwrap_or(""),
                "API error {}",
                error
            );
            Error::Api {
                status: raw.status,
                error: Box::new(error),
            }
        }
        Err(_) => {
            let snippet = truncate_body(&raw.body);
            tracing::error!("Request failed with status {}: {}", raw.status, snippet);
            Error::HttpStatus {
                status: raw.status,
                body: snippet,
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{AccountsBalanceGet, AccountsGet};

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn success_body_decodes_to_resource_type() {
        let body = r#"{"accounts": [], "item": {"item_id": "item-1"}, "request_id": "req1"}"#;
        let resp = decode::<AccountsGet>(raw(200, body)).unwrap();
        assert!(resp.accounts.is_empty());
        assert_eq!(resp.item.item_id, "item-1");
        assert_eq!(resp.request_id, "req1");
    }

    #[test]
    fn error_body_decodes_to_api_error() {
        let body = r#"{
            "error_type": "INVALID_INPUT",
            "error_code": "INVALID_ACCESS_TOKEN",
            "error_message": "provided access token is in an invalid format",
            "display_message": null,
            "request_id": "req2"
        }"#;
        let err = decode::<AccountsBalanceGet>(raw(400, body)).unwrap_err();
        let api = err.api_error().expect("api error");
        assert_eq!(api.error_code, "INVALID_ACCESS_TOKEN");
        assert_eq!(api.request_id.as_deref(), Some("req2"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn error_status_with_success_shaped_body_is_still_error() {
        let body = r#"{"accounts": [], "item": {"item_id": "i"}, "request_id": "r"}"#;
        let err = decode::<AccountsGet>(raw(500, body)).unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    }

    #[test]
    fn non_json_error_body_is_http_status() {
        let err = decode::<AccountsGet>(raw(502, "Bad Gateway")).unwrap_err();
        match err {
            Error::HttpStatus { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let err = decode::<AccountsBalanceGet>(raw(200, r#"{"accounts": "nope"}"#)).unwrap_err();
        assert!(matches!(err, Error::Decode { resource: "balance", .. }));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
    }
}
