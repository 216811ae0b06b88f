//! Device connection configuration

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

/// Transport scheme used to reach the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

/// Connection details for one device.
///
/// Deserializes from the documented device dictionary: `ip` is accepted as
/// an alias for `host`, and `port` may be given as a number or a string.
#[derive(Clone, Deserialize)]
pub struct DeviceConfig {
    /// Scheme for REST requests
    pub protocol: Protocol,
    /// IP address or hostname of the device
    #[serde(alias = "ip")]
    pub host: String,
    /// Management API port
    #[serde(deserialize_with = "port_from_number_or_string")]
    pub port: u16,
    /// Extra headers applied to every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Account used for the aaaLogin handshake
    pub username: String,
    /// Password for the account; never logged
    pub password: String,
}

impl DeviceConfig {
    /// Base URL for REST requests: `{protocol}://{host}:{port}`
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

// The password must not leak through debug output or logs.
impl fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("headers", &self.headers)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn port_from_number_or_string<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortRepr {
        Number(u16),
        Text(String),
    }

    match PortRepr::deserialize(deserializer)? {
        PortRepr::Number(port) => Ok(port),
        PortRepr::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DeviceConfig {
        DeviceConfig {
            protocol: Protocol::Http,
            host: "127.0.0.1".to_string(),
            port: 10180,
            headers: HashMap::new(),
            username: "admin".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn base_url_is_exact_concatenation() {
        assert_eq!(config().base_url(), "http://127.0.0.1:10180");
    }

    #[test]
    fn base_url_with_https_and_hostname() {
        let config = DeviceConfig {
            protocol: Protocol::Https,
            host: "switch01.example.net".to_string(),
            port: 443,
            ..config()
        };
        assert_eq!(config.base_url(), "https://switch01.example.net:443");
    }

    #[test]
    fn deserializes_documented_device_dictionary() {
        let config: DeviceConfig = serde_json::from_str(
            r#"{
                "protocol": "http",
                "ip": "127.0.0.1",
                "port": "10180",
                "headers": {},
                "username": "admin",
                "password": "secret"
            }"#,
        )
        .expect("config should deserialize");

        assert_eq!(config.protocol, Protocol::Http);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 10180);
        assert!(config.headers.is_empty());
    }

    #[test]
    fn port_accepts_a_number_and_headers_default_to_empty() {
        let config: DeviceConfig = serde_json::from_str(
            r#"{
                "protocol": "https",
                "host": "10.0.0.5",
                "port": 8443,
                "username": "admin",
                "password": "secret"
            }"#,
        )
        .expect("config should deserialize");

        assert_eq!(config.port, 8443);
        assert!(config.headers.is_empty());
    }

    #[test]
    fn rejects_unparseable_port() {
        let result = serde_json::from_str::<DeviceConfig>(
            r#"{
                "protocol": "http",
                "host": "10.0.0.5",
                "port": "not-a-port",
                "username": "admin",
                "password": "secret"
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_redacts_password() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("admin"));
    }
}
