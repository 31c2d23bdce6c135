//! # Ionomy Client
//!
//! An async Rust client library for the Ionomy exchange HTTP API.
//!
//! ## Features
//!
//! - Full coverage of the public market-data endpoints
//! - Authenticated trading, account and funding endpoints
//! - HMAC-SHA512 request signing with per-request timestamps
//! - Typed request records validated before any network I/O
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ionomy_api_client::rest::IonomyClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IonomyClient::new();
//!     let markets = client.markets().await?;
//!     println!("Markets: {markets}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;

// Re-export commonly used types at crate root
pub use error::{IonomyError, ValidationError};
pub use rest::public::OrderBookType;

/// Result type alias using IonomyError
pub type Result<T> = std::result::Result<T, IonomyError>;
