//! Request dispatcher: builds the endpoint URL, merges credentials into the
//! JSON body, and performs the HTTP call.

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::config::{ResolvedConfig, TransportOptions};
use crate::Error;

const USER_AGENT: &str = concat!("plaid-rs/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed HTTP exchange, before decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Joins `path` onto `base`, keeping any path prefix the base URL has.
pub(crate) fn endpoint_url(base: &Url, path: &str) -> Result<Url, Error> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}

/// Serializes `params` to a JSON object and adds `client_id` and `secret`.
/// Credentials replace any same-named keys in `params`.
pub(crate) fn request_body<P>(config: &ResolvedConfig, params: &P) -> Result<Map<String, Value>, Error>
where
    P: Serialize + ?Sized,
{
    let mut body = match serde_json::to_value(params) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) => Map::new(),
        Ok(other) => {
            return Err(Error::InvalidParams(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
        Err(e) => return Err(Error::InvalidParams(e.to_string())),
    };
    body.insert("client_id".to_string(), Value::String(config.client_id.clone()));
    body.insert("secret".to_string(), Value::String(config.secret.clone()));
    Ok(body)
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

/// Performs one HTTP call and returns the raw status and body.
///
/// Non-success statuses are not errors at this layer; only transport
/// failures are, plus transport options the HTTP client rejects, which are
/// reported as [`Error::InvalidSetting`]. A fresh `reqwest::Client` is built
/// per call so the given transport options apply to this request alone.
pub async fn dispatch<P>(
    method: Method,
    path: &str,
    config: &ResolvedConfig,
    params: &P,
    transport: &TransportOptions,
) -> Result<RawResponse, Error>
where
    P: Serialize + ?Sized,
{
    let url = endpoint_url(&config.base_url, path)?;
    let body = request_body(config, params)?;

    let client = transport
        .apply(reqwest::Client::builder().user_agent(USER_AGENT))
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::InvalidSetting {
                name: "transport",
                value: e.to_string(),
            }
        })?;

    tracing::debug!(%method, %url, "dispatching request");

    let mut request = client
        .request(method, url)
        .header("content-type", "application/json")
        .json(&body);
    if let Some(version) = &config.api_version {
        request = request.header("Plaid-Version", version);
    }

    let resp = request.send().await.map_err(|e| {
        tracing::error!("Failed to send request to {}: {}", path, e);
        Error::Transport(e)
    })?;

    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::Transport(e)
    })?;

    tracing::debug!(status, path, "response received");
    Ok(RawResponse { status, body })
}
