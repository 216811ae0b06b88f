//! NXAPI device session
//!
//! Wraps one device's connection details and a cookie-keeping HTTP client.
//! Authentication state is the session cookie issued by the device during
//! aaaLogin; the client replays it on every subsequent request.

use crate::config::DeviceConfig;
use crate::error::NxapiError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Request timeout applied to every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of an authentication exchange with the device.
///
/// Wrong credentials and other HTTP-level rejections both surface as
/// [`Failed`](AuthOutcome::Failed); the device does not distinguish them
/// further at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Device accepted the request
    Ok,
    /// Device answered with a non-OK status
    Failed(StatusCode),
    /// Transport could not reach the device
    Unreachable,
}

impl AuthOutcome {
    /// True when the device accepted the request
    pub fn is_ok(&self) -> bool {
        matches!(self, AuthOutcome::Ok)
    }
}

/// Authenticated session against one device.
///
/// Owns an exclusive `reqwest::Client` with a cookie store, so the session
/// cookie returned by aaaLogin is attached to every later call. Sessions
/// never share cookie state. Dropping the session discards the cookie;
/// logging out of the device is the caller's explicit responsibility.
pub struct DeviceSession {
    client: Client,
    base_url: String,
    config: DeviceConfig,
}

impl DeviceSession {
    /// Create a session for a device.
    ///
    /// Builds the base URL once and the persistent HTTP client; configured
    /// extra headers become default headers on every request. No network
    /// I/O happens here.
    pub fn new(config: DeviceConfig) -> Result<Self, NxapiError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name: HeaderName = name
                .parse()
                .map_err(|_| NxapiError::InvalidConfig(format!("invalid header name: {name}")))?;
            let value: HeaderValue = value
                .parse()
                .map_err(|_| NxapiError::InvalidConfig(format!("invalid value for header {name}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: config.base_url(),
            client,
            config,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Connection details this session was built from
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Authenticate against the device.
    ///
    /// POSTs the credentials to `/api/aaaLogin.json`; on success the device
    /// answers with a session cookie, which the client retains for later
    /// calls. Connectivity failures are logged with the device address and
    /// reported as [`AuthOutcome::Unreachable`] rather than propagated.
    pub async fn login(&self) -> AuthOutcome {
        let body = serde_json::json!({
            "aaaUser": {
                "attributes": {
                    "name": self.config.username,
                    "pwd": self.config.password,
                }
            }
        });
        self.auth_request("/api/aaaLogin.json", &body).await
    }

    /// Tear down the device session.
    ///
    /// Same outcome contract as [`login`](Self::login); the body carries
    /// the username only.
    pub async fn logout(&self) -> AuthOutcome {
        let body = serde_json::json!({
            "aaaUser": {
                "attributes": {
                    "name": self.config.username,
                }
            }
        });
        self.auth_request("/api/aaaLogout.json", &body).await
    }

    async fn auth_request(&self, path: &str, body: &serde_json::Value) -> AuthOutcome {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = match self.client.post(&url).json(body).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("unable to reach device {}: {}", self.config.host, err);
                return AuthOutcome::Unreachable;
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            AuthOutcome::Ok
        } else {
            AuthOutcome::Failed(status)
        }
    }

    /// Issue a GET against an API-relative path.
    ///
    /// `path` must start with `/` (e.g. `/api/mo/sys.json?rsp-subtree=children`)
    /// and is appended verbatim to the base URL, query string included. The
    /// raw response is returned uninterpreted; status handling is the
    /// caller's concern.
    pub async fn get(&self, path: &str) -> Result<Response, NxapiError> {
        let url = self.api_url(path)?;
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Ok(response)
    }

    /// Issue a POST with a JSON body against an API-relative path.
    ///
    /// `body` may be any serializable value. It is serialized up front so a
    /// malformed body surfaces as [`NxapiError::Serialization`] instead of
    /// being reported as a transport failure. The raw response is returned
    /// uninterpreted, as with [`get`](Self::get).
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Response, NxapiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.api_url(path)?;
        let payload = serde_json::to_vec(body)?;
        debug!("POST {} ({} byte body)", url, payload.len());

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;
        Ok(response)
    }

    fn api_url(&self, path: &str) -> Result<String, NxapiError> {
        if !path.starts_with('/') {
            return Err(NxapiError::InvalidPath(path.to_string()));
        }
        Ok(format!("{}{}", self.base_url, path))
    }
}
