use std::sync::Arc;

use rust_decimal::Decimal;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ionomy_api_client::IonomyError;
use ionomy_api_client::auth::{StaticCredentials, TimestampProvider, sign_request};
use ionomy_api_client::rest::IonomyClient;
use ionomy_api_client::rest::private::{LimitOrderRequest, WithdrawRequest};

const TIMESTAMP: i64 = 1_700_000_000;

struct FixedTimestamp(i64);

impl TimestampProvider for FixedTimestamp {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}

fn build_client(server: &MockServer) -> (IonomyClient, String) {
    let base_url = format!("{}/", server.uri());
    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret"));
    let client = IonomyClient::builder()
        .base_url(base_url.clone())
        .credentials(credentials)
        .timestamp_provider(Arc::new(FixedTimestamp(TIMESTAMP)))
        .build();
    (client, base_url)
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "success": true, "data": data })
}

#[tokio::test]
async fn test_balances_sends_signed_headers() {
    let server = MockServer::start().await;
    let (client, base_url) = build_client(&server);

    #[derive(serde::Serialize)]
    struct Empty {}
    let expected =
        sign_request("test_secret", &base_url, "account/balances", &Empty {}, TIMESTAMP).unwrap();

    Mock::given(method("GET"))
        .and(path("/account/balances"))
        .and(header("api-auth-time", "1700000000"))
        .and(header("api-auth-key", "test_key"))
        .and(header("api-auth-token", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
            "BTC": "0.5",
            "LTC": "12.0"
        }))))
        .mount(&server)
        .await;

    let balances = client.balances().await.unwrap();
    assert_eq!(balances["BTC"], "0.5");
}

#[tokio::test]
async fn test_limit_buy_dispatches_query_params() {
    let server = MockServer::start().await;
    let (client, _) = build_client(&server);

    Mock::given(method("GET"))
        .and(path("/market/buy-limit"))
        .and(query_param("market", "btc-ltc"))
        .and(query_param("amount", "2.5"))
        .and(query_param("price", "0.004"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
            "orderId": "a1b2c3"
        }))))
        .mount(&server)
        .await;

    let order = LimitOrderRequest::new("btc-ltc", "2.5".parse().unwrap(), "0.004".parse().unwrap());
    let placed = client.limit_buy(&order).await.unwrap();
    assert_eq!(placed["orderId"], "a1b2c3");
}

#[tokio::test]
async fn test_limit_buy_signature_covers_query_string() {
    let server = MockServer::start().await;
    let (client, base_url) = build_client(&server);

    let order = LimitOrderRequest::new("btc-ltc", "1".parse().unwrap(), "2".parse().unwrap());
    let expected =
        sign_request("test_secret", &base_url, "market/buy-limit", &order, TIMESTAMP).unwrap();

    Mock::given(method("GET"))
        .and(path("/market/buy-limit"))
        .and(header("api-auth-token", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
            "orderId": "a1b2c3"
        }))))
        .mount(&server)
        .await;

    client.limit_buy(&order).await.unwrap();
}

#[tokio::test]
async fn test_limit_buy_empty_market_fails_before_dispatch() {
    let server = MockServer::start().await;
    let (client, _) = build_client(&server);

    let order = LimitOrderRequest::new("", Decimal::ONE, Decimal::ONE);
    let error = client.limit_buy(&order).await.unwrap_err();

    match &error {
        IonomyError::Validation(validation) => assert_eq!(validation.field, "market"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_limit_sell_zero_amount_rejected() {
    let server = MockServer::start().await;
    let (client, _) = build_client(&server);

    let order = LimitOrderRequest::new("btc-ltc", Decimal::ZERO, Decimal::ONE);
    let error = client.limit_sell(&order).await.unwrap_err();

    match &error {
        IonomyError::Validation(validation) => assert_eq!(validation.field, "amount"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_order_uses_order_id_param() {
    let server = MockServer::start().await;
    let (client, _) = build_client(&server);

    Mock::given(method("GET"))
        .and(path("/market/cancel-order"))
        .and(query_param("orderId", "a1b2c3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
            "canceled": true
        }))))
        .mount(&server)
        .await;

    let canceled = client.cancel_order("a1b2c3").await.unwrap();
    assert_eq!(canceled["canceled"], true);
}

#[tokio::test]
async fn test_withdraw_requires_address_before_dispatch() {
    let server = MockServer::start().await;
    let (client, _) = build_client(&server);

    let withdrawal = WithdrawRequest::new("BTC", Decimal::ONE, "");
    let error = client.withdraw(&withdrawal).await.unwrap_err();

    match &error {
        IonomyError::Validation(validation) => assert_eq!(validation.field, "address"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_api_failure_envelope_surfaces_message() {
    let server = MockServer::start().await;
    let (client, _) = build_client(&server);

    Mock::given(method("GET"))
        .and(path("/account/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "order not found"
        })))
        .mount(&server)
        .await;

    let error = client.order("missing-id").await.unwrap_err();
    match &error {
        IonomyError::Api(message) => assert_eq!(message, "order not found"),
        other => panic!("expected API error, got {other:?}"),
    }
    assert!(error.is_api());
}

#[tokio::test]
async fn test_empty_credentials_disable_signing() {
    let server = MockServer::start().await;
    let credentials = Arc::new(StaticCredentials::new("", ""));
    let client = IonomyClient::builder()
        .base_url(format!("{}/", server.uri()))
        .credentials(credentials)
        .build();

    Mock::given(method("GET"))
        .and(path("/account/balances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({}))))
        .mount(&server)
        .await;

    client.balances().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("api-auth-time").is_none());
    assert!(requests[0].headers.get("api-auth-key").is_none());
    assert!(requests[0].headers.get("api-auth-token").is_none());
}
