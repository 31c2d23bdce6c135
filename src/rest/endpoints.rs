//! Ionomy HTTP API endpoint constants.
//!
//! Paths are appended verbatim to the client's base URL, which ends
//! with a trailing slash.

/// Base URL for the Ionomy HTTP API.
pub const IONOMY_BASE_URL: &str = "https://ionomy.com/api/v1/";

/// Public market-data endpoints (no authentication required).
pub mod public {
    /// List all markets.
    pub const MARKETS: &str = "public/markets";
    /// List all currencies.
    pub const CURRENCIES: &str = "public/currencies";
    /// Get the order book for a market.
    pub const ORDER_BOOK: &str = "public/orderbook";
    /// Get summaries for all markets.
    pub const MARKET_SUMMARIES: &str = "public/markets-summaries";
    /// Get the summary for a single market.
    pub const MARKET_SUMMARY: &str = "public/market-summary";
    /// Get recent trade history for a market.
    pub const MARKET_HISTORY: &str = "public/market-history";
}

/// Order placement and management endpoints (authentication required).
pub mod market {
    /// Place a limit buy order.
    pub const BUY_LIMIT: &str = "market/buy-limit";
    /// Place a limit sell order.
    pub const SELL_LIMIT: &str = "market/sell-limit";
    /// Cancel an open order.
    pub const CANCEL_ORDER: &str = "market/cancel-order";
    /// List open orders for a market.
    pub const OPEN_ORDERS: &str = "market/open-orders";
}

/// Account and funding endpoints (authentication required).
pub mod account {
    /// Get balances for all currencies.
    pub const BALANCES: &str = "account/balances";
    /// Get the balance for a single currency.
    pub const BALANCE: &str = "account/balance";
    /// Get the deposit address for a currency.
    pub const DEPOSIT_ADDRESS: &str = "account/deposit-address";
    /// Get deposit history for a currency.
    pub const DEPOSIT_HISTORY: &str = "account/deposit-history";
    /// Withdraw funds to an external address.
    pub const WITHDRAW: &str = "account/withdraw";
    /// Get withdrawal history for a currency.
    pub const WITHDRAWAL_HISTORY: &str = "account/withdrawal-history";
    /// Get a single order by ID.
    pub const ORDER: &str = "account/order";
    /// Get order history for a market.
    pub const ORDER_HISTORY: &str = "account/order-history";
}
