// API client module: a small blocking HTTP client for the Health2Wealth API.
// Every call is a single GET with the client-id header and basic auth; there
// are no retries and non-200 answers are handed back to the caller as-is.

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::credentials::Identity;
use crate::error::{H2wError, Result};

/// `X-H2W-Client-ID`, the header the API uses to tell its clients apart.
pub const CLIENT_ID_HEADER: &str = "x-h2w-client-id";
pub const CLIENT_ID: &str = "0";

/// One HTTP response, read in full. `json` holds the parsed body when it is
/// valid JSON and is `None` otherwise.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub json: Option<Value>,
}

impl RawResponse {
    pub fn new(url: impl Into<String>, status: StatusCode, body: Vec<u8>) -> Self {
        let json = decode(&body);
        RawResponse {
            url: url.into(),
            status,
            body,
            json,
        }
    }

    /// Decode the body into a typed payload. A body that is not JSON, or
    /// lacks a field `T` needs, is an error.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|source| H2wError::Decode {
            url: self.url.clone(),
            source,
        })
    }

    /// Diagnostic dump of the response: endpoint, status line and the body,
    /// pretty-printed when it parsed as JSON and raw otherwise.
    pub fn render_diagnostic(&self) -> String {
        let body = match self.json.as_ref().and_then(|v| serde_json::to_string_pretty(v).ok()) {
            Some(pretty) => pretty,
            None => String::from_utf8_lossy(&self.body).into_owned(),
        };
        format!(
            "ENDPOINT: {}\nSTATUS: {}\nBODY: >>>>>>>>\n{}\n<<<<<<<<\n",
            self.url, self.status, body
        )
    }
}

/// Parse a response body as JSON. A body that isn't JSON is not an error
/// here; callers fall back to the raw bytes.
pub fn decode(body: &[u8]) -> Option<Value> {
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("response body is not JSON: {}", e);
            None
        }
    }
}

/// Something that can perform one authenticated GET.
pub trait Transport {
    fn get(&self, url: &str, identity: &Identity) -> Result<RawResponse>;
}

/// Blocking `reqwest` client with the client-id header preset.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers())
            .build()
            .map_err(H2wError::Client)?;
        Ok(ApiClient { client })
    }
}

impl Transport for ApiClient {
    fn get(&self, url: &str, identity: &Identity) -> Result<RawResponse> {
        debug!("GET {} as {}", url, redact(&identity.username));
        let transport = |source| H2wError::Transport {
            url: url.to_string(),
            source,
        };

        let res = self
            .client
            .get(url)
            .basic_auth(&identity.username, Some(&identity.secret))
            .send()
            .map_err(transport)?;
        let status = res.status();
        // after redirects
        let final_url = res.url().to_string();
        let body = res.bytes().map_err(transport)?.to_vec();
        debug!("{} answered {} with {} bytes", final_url, status, body.len());

        Ok(RawResponse::new(final_url, status, body))
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(CLIENT_ID_HEADER),
        HeaderValue::from_static(CLIENT_ID),
    );
    headers
}

/// Keep enough of a username to recognise it in logs without leaking a token.
fn redact(username: &str) -> String {
    let shown: String = username.chars().take(4).collect();
    if shown.len() < username.len() {
        format!("{}…", shown)
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_pretty_prints_json() {
        let res = RawResponse::new(
            "https://h2w.cc/api/v1/auth/token",
            StatusCode::OK,
            br#"{"token":"abc123"}"#.to_vec(),
        );

        assert_eq!(
            res.render_diagnostic(),
            "ENDPOINT: https://h2w.cc/api/v1/auth/token\n\
             STATUS: 200 OK\n\
             BODY: >>>>>>>>\n\
             {\n  \"token\": \"abc123\"\n}\n\
             <<<<<<<<\n"
        );
    }

    #[test]
    fn diagnostic_falls_back_to_raw_body() {
        let res = RawResponse::new("http://x/dashboard", StatusCode::BAD_GATEWAY, b"<html>oops</html>".to_vec());

        assert!(res.json.is_none());
        let text = res.render_diagnostic();
        assert!(text.contains("STATUS: 502 Bad Gateway\n"));
        assert!(text.contains(">>>>>>>>\n<html>oops</html>\n<<<<<<<<"));
    }

    #[test]
    fn decode_is_lenient() {
        assert_eq!(decode(b"[1, 2]"), Some(serde_json::json!([1, 2])));
        assert_eq!(decode(b""), None);
        assert_eq!(decode(b"not json"), None);
    }

    #[test]
    fn redact_keeps_a_short_prefix() {
        assert_eq!(redact("abcdefgh:"), "abcd…");
        assert_eq!(redact("ab"), "ab");
    }
}
