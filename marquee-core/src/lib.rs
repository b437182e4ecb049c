//! Core library for the marquee media client.
//!
//! Two cooperating pieces live here. The [`catalog`] module is a stateless,
//! read-only gateway that turns query intents (trending, popular, top rated,
//! search, detail, genres) into catalog-service requests and normalizes the
//! results behind a fail-soft boundary. The [`session`] module owns the
//! mocked authentication lifecycle and its persisted mirror. Neither depends
//! on the other.

pub mod catalog;
pub mod config;
pub mod session;

pub use catalog::transport::{CatalogTransport, HttpTransport, TransportError};
pub use catalog::{CatalogGateway, GatewayError};
pub use config::{CatalogConfig, SessionConfig};
pub use session::vault::{FileVault, MemoryVault, SessionVault, VaultError};
pub use session::{DEMO_EMAIL, DEMO_PASSWORD, SessionStore};
