//! NXAPI Session Client
//!
//! A Rust client library for the JSON REST management API exposed by
//! NXAPI-style network switches. A [`DeviceSession`] holds one device's
//! connection details and a cookie-keeping HTTP client: [`DeviceSession::login`]
//! runs the aaaLogin handshake, after which [`DeviceSession::get`] and
//! [`DeviceSession::post`] carry the session cookie automatically, and
//! [`DeviceSession::logout`] tears the session down.
//!
//! # Example
//!
//! ```no_run
//! use nxapi_client::{DeviceConfig, DeviceSession, Protocol};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DeviceConfig {
//!     protocol: Protocol::Http,
//!     host: "192.0.2.10".to_string(),
//!     port: 8080,
//!     headers: Default::default(),
//!     username: "admin".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let session = DeviceSession::new(config)?;
//! if session.login().await.is_ok() {
//!     let response = session.get("/api/mo/sys.json?rsp-subtree=children").await?;
//!     println!("device answered {}", response.status());
//!     session.logout().await;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Message bodies are JSON throughout; XML is not supported.

pub mod client;
pub mod config;
pub mod error;

pub use client::{AuthOutcome, DeviceSession};
pub use config::{DeviceConfig, Protocol};
pub use error::NxapiError;
