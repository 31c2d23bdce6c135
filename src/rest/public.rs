//! Public market-data endpoints (no authentication required).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{IonomyError, ValidationError};
use crate::rest::IonomyClient;
use crate::rest::endpoints::public;
use crate::rest::require_non_empty;

/// Which side of the order book to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBookType {
    /// Sell orders only
    Ask,
    /// Buy orders only
    Bid,
    /// Both sides of the book
    #[default]
    Both,
}

impl std::fmt::Display for OrderBookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderBookType::Ask => write!(f, "ask"),
            OrderBookType::Bid => write!(f, "bid"),
            OrderBookType::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for OrderBookType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ask" => Ok(OrderBookType::Ask),
            "bid" => Ok(OrderBookType::Bid),
            "both" => Ok(OrderBookType::Both),
            _ => Err(ValidationError::invalid(
                "type",
                "must be one of: ask, bid, both",
            )),
        }
    }
}

/// Request parameters for the order book.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBookRequest {
    /// Market symbol (e.g., "btc-ltc").
    pub market: String,
    /// Which side of the book to return.
    #[serde(rename = "type")]
    pub book_type: OrderBookType,
}

impl OrderBookRequest {
    /// Create a request for both sides of a market's book.
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            book_type: OrderBookType::Both,
        }
    }

    /// Restrict the request to one side of the book.
    pub fn book_type(mut self, book_type: OrderBookType) -> Self {
        self.book_type = book_type;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("market", &self.market)
    }
}

impl IonomyClient {
    /// List all markets.
    pub async fn markets(&self) -> Result<Value, IonomyError> {
        #[derive(Serialize)]
        struct Empty {}
        self.request(public::MARKETS, &Empty {}).await
    }

    /// List all currencies.
    pub async fn currencies(&self) -> Result<Value, IonomyError> {
        #[derive(Serialize)]
        struct Empty {}
        self.request(public::CURRENCIES, &Empty {}).await
    }

    /// Get the order book for a market.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ionomy_api_client::rest::IonomyClient;
    /// use ionomy_api_client::rest::public::OrderBookRequest;
    /// use ionomy_api_client::OrderBookType;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = IonomyClient::new();
    ///     let request = OrderBookRequest::new("btc-ltc").book_type(OrderBookType::Bid);
    ///     let book = client.order_book(&request).await?;
    ///     println!("Bids: {book}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn order_book(&self, request: &OrderBookRequest) -> Result<Value, IonomyError> {
        request.validate()?;
        self.request(public::ORDER_BOOK, request).await
    }

    /// Get summaries for all markets.
    pub async fn market_summaries(&self) -> Result<Value, IonomyError> {
        #[derive(Serialize)]
        struct Empty {}
        self.request(public::MARKET_SUMMARIES, &Empty {}).await
    }

    /// Get the summary for a single market.
    pub async fn market_summary(&self, market: &str) -> Result<Value, IonomyError> {
        require_non_empty("market", market)?;
        #[derive(Serialize)]
        struct Params<'a> {
            market: &'a str,
        }
        self.request(public::MARKET_SUMMARY, &Params { market }).await
    }

    /// Get recent trade history for a market.
    pub async fn market_history(&self, market: &str) -> Result<Value, IonomyError> {
        require_non_empty("market", market)?;
        #[derive(Serialize)]
        struct Params<'a> {
            market: &'a str,
        }
        self.request(public::MARKET_HISTORY, &Params { market }).await
    }
}
