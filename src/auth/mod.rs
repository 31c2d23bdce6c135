//! Authentication module for the Ionomy API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Per-request timestamp generation
//! - HMAC-SHA512 signature generation for authenticated requests

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use signature::sign_request;
pub use timestamp::{SystemTimestamp, TimestampProvider};

pub(crate) use signature::sign_encoded_query;
