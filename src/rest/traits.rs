//! Trait definition for the Ionomy API client.
//!
//! This module provides the `IonomyApi` trait which abstracts all API
//! operations. This enables:
//! - Mock implementations for testing
//! - Decorator pattern wrappers
//! - Alternative implementations
//!
//! # Example
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

use std::future::Future;

use serde_json::Value;

use crate::error::IonomyError;
use crate::rest::IonomyClient;
use crate::rest::private::{LimitOrderRequest, WithdrawRequest};
use crate::rest::public::OrderBookRequest;

/// Trait defining all Ionomy API operations.
///
/// All methods are async and return `Result<Value, IonomyError>`; the
/// payload shapes are exchange-defined and passed through verbatim.
pub trait IonomyApi: Send + Sync {
    // ========== Public Endpoints ==========

    /// List all markets.
    fn markets(&self) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// List all currencies.
    fn currencies(&self) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Get the order book for a market.
    fn order_book(
        &self,
        request: &OrderBookRequest,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Get summaries for all markets.
    fn market_summaries(&self) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Get the summary for a single market.
    fn market_summary(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Get recent trade history for a market.
    fn market_history(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    // ========== Trading Endpoints ==========

    /// Place a limit buy order.
    fn limit_buy(
        &self,
        order: &LimitOrderRequest,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Place a limit sell order.
    fn limit_sell(
        &self,
        order: &LimitOrderRequest,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Cancel an open order.
    fn cancel_order(
        &self,
        order_id: &str,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// List open orders for a market.
    fn open_orders(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    // ========== Account Endpoints ==========

    /// Get balances for all currencies.
    fn balances(&self) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Get the balance for a single currency.
    fn balance(&self, currency: &str) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Get the deposit address for a currency.
    fn deposit_address(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Get deposit history for a currency.
    fn deposit_history(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Withdraw funds to an external address.
    fn withdraw(
        &self,
        withdrawal: &WithdrawRequest,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Get withdrawal history for a currency.
    fn withdrawal_history(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Get a single order by ID.
    fn order(&self, order_id: &str) -> impl Future<Output = Result<Value, IonomyError>> + Send;

    /// Get order history for a market.
    fn order_history(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Value, IonomyError>> + Send;
}

// IonomyApi trait implementation.

impl IonomyApi for IonomyClient {
    // ========== Public Endpoints ==========

    async fn markets(&self) -> Result<Value, IonomyError> {
        IonomyClient::markets(self).await
    }

    async fn currencies(&self) -> Result<Value, IonomyError> {
        IonomyClient::currencies(self).await
    }

    async fn order_book(&self, request: &OrderBookRequest) -> Result<Value, IonomyError> {
        IonomyClient::order_book(self, request).await
    }

    async fn market_summaries(&self) -> Result<Value, IonomyError> {
        IonomyClient::market_summaries(self).await
    }

    async fn market_summary(&self, market: &str) -> Result<Value, IonomyError> {
        IonomyClient::market_summary(self, market).await
    }

    async fn market_history(&self, market: &str) -> Result<Value, IonomyError> {
        IonomyClient::market_history(self, market).await
    }

    // ========== Trading Endpoints ==========

    async fn limit_buy(&self, order: &LimitOrderRequest) -> Result<Value, IonomyError> {
        IonomyClient::limit_buy(self, order).await
    }

    async fn limit_sell(&self, order: &LimitOrderRequest) -> Result<Value, IonomyError> {
        IonomyClient::limit_sell(self, order).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value, IonomyError> {
        IonomyClient::cancel_order(self, order_id).await
    }

    async fn open_orders(&self, market: &str) -> Result<Value, IonomyError> {
        IonomyClient::open_orders(self, market).await
    }

    // ========== Account Endpoints ==========

    async fn balances(&self) -> Result<Value, IonomyError> {
        IonomyClient::balances(self).await
    }

    async fn balance(&self, currency: &str) -> Result<Value, IonomyError> {
        IonomyClient::balance(self, currency).await
    }

    async fn deposit_address(&self, currency: &str) -> Result<Value, IonomyError> {
        IonomyClient::deposit_address(self, currency).await
    }

    async fn deposit_history(&self, currency: &str) -> Result<Value, IonomyError> {
        IonomyClient::deposit_history(self, currency).await
    }

    async fn withdraw(&self, withdrawal: &WithdrawRequest) -> Result<Value, IonomyError> {
        IonomyClient::withdraw(self, withdrawal).await
    }

    async fn withdrawal_history(&self, currency: &str) -> Result<Value, IonomyError> {
        IonomyClient::withdrawal_history(self, currency).await
    }

    async fn order(&self, order_id: &str) -> Result<Value, IonomyError> {
        IonomyClient::order(self, order_id).await
    }

    async fn order_history(&self, market: &str) -> Result<Value, IonomyError> {
        IonomyClient::order_history(self, market).await
    }
}
