//! Trading and account endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the
//! client. Requests are still dispatched as HTTP GET with query-string
//! parameters; the exchange authenticates them via the signed headers.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::error::{IonomyError, ValidationError};
use crate::rest::IonomyClient;
use crate::rest::endpoints::{account, market};
use crate::rest::{require_non_empty, require_positive};

/// Parameters for a limit buy or sell order.
#[derive(Debug, Clone, Serialize)]
pub struct LimitOrderRequest {
    /// Market symbol (e.g., "btc-ltc").
    pub market: String,
    /// Order size in base-currency units. Must be greater than zero.
    pub amount: Decimal,
    /// Limit price in quote-currency units. Must be greater than zero.
    pub price: Decimal,
}

impl LimitOrderRequest {
    /// Create a new limit order request.
    pub fn new(market: impl Into<String>, amount: Decimal, price: Decimal) -> Self {
        Self {
            market: market.into(),
            amount,
            price,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("market", &self.market)?;
        require_positive("amount", self.amount)?;
        require_positive("price", self.price)
    }
}

/// Parameters for a withdrawal.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawRequest {
    /// Currency code (e.g., "BTC").
    pub currency: String,
    /// Amount to withdraw. Must be greater than zero.
    pub amount: Decimal,
    /// Destination address.
    pub address: String,
}

impl WithdrawRequest {
    /// Create a new withdrawal request.
    pub fn new(
        currency: impl Into<String>,
        amount: Decimal,
        address: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            amount,
            address: address.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("currency", &self.currency)?;
        require_positive("amount", self.amount)?;
        require_non_empty("address", &self.address)
    }
}

impl IonomyClient {
    // ========== Trading ==========

    /// Place a limit buy order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ionomy_api_client::rest::IonomyClient;
    /// use ionomy_api_client::rest::private::LimitOrderRequest;
    /// use ionomy_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = IonomyClient::builder().credentials(credentials).build();
    ///
    ///     let order = LimitOrderRequest::new("btc-ltc", "2.5".parse()?, "0.004".parse()?);
    ///     let placed = client.limit_buy(&order).await?;
    ///     println!("Placed: {placed}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn limit_buy(&self, order: &LimitOrderRequest) -> Result<Value, IonomyError> {
        order.validate()?;
        self.request(market::BUY_LIMIT, order).await
    }

    /// Place a limit sell order.
    pub async fn limit_sell(&self, order: &LimitOrderRequest) -> Result<Value, IonomyError> {
        order.validate()?;
        self.request(market::SELL_LIMIT, order).await
    }

    /// Cancel an open order.
    pub async fn cancel_order(&self, order_id: &str) -> Result<Value, IonomyError> {
        require_non_empty("orderId", order_id)?;
        #[derive(Serialize)]
        struct Params<'a> {
            #[serde(rename = "orderId")]
            order_id: &'a str,
        }
        self.request(market::CANCEL_ORDER, &Params { order_id }).await
    }

    /// List open orders for a market.
    pub async fn open_orders(&self, market_symbol: &str) -> Result<Value, IonomyError> {
        require_non_empty("market", market_symbol)?;
        #[derive(Serialize)]
        struct Params<'a> {
            market: &'a str,
        }
        self.request(market::OPEN_ORDERS, &Params { market: market_symbol })
            .await
    }

    // ========== Account ==========

    /// Get balances for all currencies.
    pub async fn balances(&self) -> Result<Value, IonomyError> {
        #[derive(Serialize)]
        struct Empty {}
        self.request(account::BALANCES, &Empty {}).await
    }

    /// Get the balance for a single currency.
    pub async fn balance(&self, currency: &str) -> Result<Value, IonomyError> {
        require_non_empty("currency", currency)?;
        #[derive(Serialize)]
        struct Params<'a> {
            currency: &'a str,
        }
        self.request(account::BALANCE, &Params { currency }).await
    }

    /// Get the deposit address for a currency.
    pub async fn deposit_address(&self, currency: &str) -> Result<Value, IonomyError> {
        require_non_empty("currency", currency)?;
        #[derive(Serialize)]
        struct Params<'a> {
            currency: &'a str,
        }
        self.request(account::DEPOSIT_ADDRESS, &Params { currency })
            .await
    }

    /// Get deposit history for a currency.
    pub async fn deposit_history(&self, currency: &str) -> Result<Value, IonomyError> {
        require_non_empty("currency", currency)?;
        #[derive(Serialize)]
        struct Params<'a> {
            currency: &'a str,
        }
        self.request(account::DEPOSIT_HISTORY, &Params { currency })
            .await
    }

    /// Withdraw funds to an external address.
    pub async fn withdraw(&self, withdrawal: &WithdrawRequest) -> Result<Value, IonomyError> {
        withdrawal.validate()?;
        self.request(account::WITHDRAW, withdrawal).await
    }

    /// Get withdrawal history for a currency.
    pub async fn withdrawal_history(&self, currency: &str) -> Result<Value, IonomyError> {
        require_non_empty("currency", currency)?;
        #[derive(Serialize)]
        struct Params<'a> {
            currency: &'a str,
        }
        self.request(account::WITHDRAWAL_HISTORY, &Params { currency })
            .await
    }

    /// Get a single order by ID.
    pub async fn order(&self, order_id: &str) -> Result<Value, IonomyError> {
        require_non_empty("orderId", order_id)?;
        #[derive(Serialize)]
        struct Params<'a> {
            #[serde(rename = "orderId")]
            order_id: &'a str,
        }
        self.request(account::ORDER, &Params { order_id }).await
    }

    /// Get order history for a market.
    pub async fn order_history(&self, market_symbol: &str) -> Result<Value, IonomyError> {
        require_non_empty("market", market_symbol)?;
        #[derive(Serialize)]
        struct Params<'a> {
            market: &'a str,
        }
        self.request(account::ORDER_HISTORY, &Params { market: market_symbol })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_order_reports_first_missing_field() {
        let order = LimitOrderRequest::new("", Decimal::ONE, Decimal::ONE);
        let error = order.validate().unwrap_err();
        assert_eq!(error.field, "market");
        assert_eq!(error.to_string(), "market is required");
    }

    #[test]
    fn test_limit_order_rejects_zero_amount() {
        let order = LimitOrderRequest::new("btc-ltc", Decimal::ZERO, Decimal::ONE);
        let error = order.validate().unwrap_err();
        assert_eq!(error.field, "amount");
    }

    #[test]
    fn test_limit_order_rejects_zero_price() {
        let order = LimitOrderRequest::new("btc-ltc", Decimal::ONE, Decimal::ZERO);
        let error = order.validate().unwrap_err();
        assert_eq!(error.field, "price");
    }

    #[test]
    fn test_limit_order_query_encoding() {
        let order = LimitOrderRequest::new(
            "btc-ltc",
            "2.5".parse().unwrap(),
            "0.004".parse().unwrap(),
        );
        assert_eq!(
            serde_urlencoded::to_string(&order).unwrap(),
            "market=btc-ltc&amount=2.5&price=0.004"
        );
    }

    #[test]
    fn test_withdraw_requires_address() {
        let withdrawal = WithdrawRequest::new("BTC", Decimal::ONE, "");
        let error = withdrawal.validate().unwrap_err();
        assert_eq!(error.field, "address");
    }

    #[test]
    fn test_withdraw_requires_positive_amount() {
        let withdrawal = WithdrawRequest::new("BTC", Decimal::ZERO, "addr");
        let error = withdrawal.validate().unwrap_err();
        assert_eq!(error.field, "amount");
    }
}
