//! Ionomy HTTP API client.
//!
//! Provides access to the Ionomy market-data, trading and account
//! endpoints. Every call goes through a single [`IonomyClient::request`]
//! primitive which signs the request when credentials are configured
//! and unwraps the exchange's response envelope.
//!
//! # Trait-based API
//!
//! The [`IonomyApi`] trait abstracts all operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern wrappers
//! - Alternative implementations
//!
//! ```rust,ignore
//! use ionomy_api_client::rest::{IonomyApi, IonomyClient};
//!
//! async fn print_markets<C: IonomyApi>(client: &C) -> Result<(), ionomy_api_client::IonomyError> {
//!     let markets = client.markets().await?;
//!     println!("{markets}");
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

use rust_decimal::Decimal;

use crate::error::ValidationError;

pub use client::{IonomyClient, IonomyClientBuilder};
pub use endpoints::*;
pub use traits::IonomyApi;

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::invalid(field, "must be greater than zero"));
    }
    Ok(())
}
