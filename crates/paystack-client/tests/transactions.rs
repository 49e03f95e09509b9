//! Transaction, transfer and subscription endpoint tests against a mock server.

mod common;

use chrono::{TimeZone, Utc};
use paystack_client::{
    ChargeOptions, Channel, ClientError, Currency, InitializeOptions, ListParams, RecipientOptions,
    TransactionListParams, TransactionReference, TransactionStatus, TransferOptions,
    ValidationError, NOT_FOUND_MESSAGE,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{envelope, TestHarness, BEARER};

// ============================================================================
// Listing and lookup
// ============================================================================

#[tokio::test]
async fn list_uses_default_page_size() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/transaction"))
        .and(query_param("perPage", "10"))
        .and(header("authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Transactions retrieved",
            "data": [{"id": 1, "reference": "ref-1", "amount": 5000}, {"id": 2}],
            "meta": {"total": 2, "perPage": 10, "page": 1, "pageCount": 1}
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let response = harness
        .client
        .transactions()
        .list(&TransactionListParams::default())
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert!(response.status);
    assert_eq!(response.message, "Transactions retrieved");
    let transactions = response.data.unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].reference.as_deref(), Some("ref-1"));
    assert_eq!(response.meta.unwrap().total, Some(2));
    assert_eq!(harness.last_query().await, vec![("perPage".into(), "10".into())]);
}

#[tokio::test]
async fn list_sends_filters() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/transaction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("Transactions retrieved", json!([]))))
        .mount(&harness.server)
        .await;

    let params = TransactionListParams {
        paging: ListParams {
            per_page: 50,
            page: Some(3),
        },
        status: Some(TransactionStatus::Failed),
        from: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
        to: Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()),
        ..TransactionListParams::default()
    };
    harness.client.transactions().list(&params).await.unwrap();

    assert_eq!(
        harness.last_query().await,
        vec![
            ("perPage".into(), "50".into()),
            ("page".into(), "3".into()),
            ("status".into(), "failed".into()),
            ("from".into(), "2024-03-01T00:00:00Z".into()),
            ("to".into(), "2024-03-02T00:00:00Z".into()),
        ]
    );
}

#[tokio::test]
async fn fetch_and_totals() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/transaction/302961"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Transaction retrieved",
            json!({"id": 302_961, "status": "success", "ip_address": "41.1.25.1"}),
        )))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/transaction/totals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Transaction totals",
            json!({"total_transactions": 10, "total_volume": 6_000_000, "pending_transfers": 3000}),
        )))
        .expect(1)
        .mount(&harness.server)
        .await;

    let transactions = harness.client.transactions();
    let transaction = transactions.fetch(302_961).await.unwrap().into_result().unwrap();
    assert_eq!(transaction.id, 302_961);
    assert_eq!(transaction.extra["ip_address"], "41.1.25.1");

    let totals = transactions.totals().await.unwrap().into_result().unwrap();
    assert_eq!(totals.total_transactions, 10);
    assert_eq!(totals.pending_transfers, 3000);
}

#[tokio::test]
async fn missing_transaction_is_normalized() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/transaction/verify/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": false,
            "message": "Transaction reference not found"
        })))
        .mount(&harness.server)
        .await;

    let (status_code, status, message, data) = harness
        .client
        .transactions()
        .verify("nope")
        .await
        .unwrap()
        .into_parts();

    assert_eq!(status_code, 404);
    assert!(!status);
    assert_eq!(message, NOT_FOUND_MESSAGE);
    assert!(data.is_none());
}

// ============================================================================
// Initialize, charge, verify
// ============================================================================

#[tokio::test]
async fn initialize_sends_only_required_fields() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/transaction/initialize"))
        .and(header("authorization", BEARER))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "test_customer@mail.com", "amount": 100_000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Authorization URL created",
            json!({
                "authorization_url": "https://checkout.paystack.com/0peioxfhpn",
                "access_code": "0peioxfhpn",
                "reference": "7PVGX8MEk85tgeEpVDtD"
            }),
        )))
        .expect(1)
        .mount(&harness.server)
        .await;

    let response = harness
        .client
        .transactions()
        .initialize("test_customer@mail.com", 100_000, InitializeOptions::default())
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.message, "Authorization URL created");
    let data = response.data.unwrap();
    assert_eq!(data.reference, "7PVGX8MEk85tgeEpVDtD");
    assert_eq!(data.access_code.as_deref(), Some("0peioxfhpn"));
}

#[tokio::test]
async fn initialize_sends_options_as_given() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/transaction/initialize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Authorization URL created",
            json!({"authorization_url": "https://checkout.paystack.com/x", "reference": "order-42"}),
        )))
        .mount(&harness.server)
        .await;

    let options = InitializeOptions {
        plan: Some("PLN_gx2wn530m0i3w3m".into()),
        channels: vec![Channel::Card, Channel::BankTransfer],
        callback_url: Some("https://shop.example/callback".into()),
        reference: Some(TransactionReference::new("order-42").unwrap()),
        metadata: Some(json!({"cart_id": 398})),
        currency: Some(Currency::Ghs),
    };
    harness
        .client
        .transactions()
        .initialize("buyer@example.com", "25000", options)
        .await
        .unwrap();

    assert_eq!(
        harness.last_body().await,
        json!({
            "email": "buyer@example.com",
            "amount": 25000,
            "plan": "PLN_gx2wn530m0i3w3m",
            "channels": ["card", "bank_transfer"],
            "callback_url": "https://shop.example/callback",
            "reference": "order-42",
            "metadata": {"cart_id": 398},
            "currency": "GHS"
        })
    );
}

#[tokio::test]
async fn initialize_validates_before_sending() {
    let harness = TestHarness::new().await;
    let transactions = harness.client.transactions();

    let zero = transactions
        .initialize("a@b.co", 0, InitializeOptions::default())
        .await;
    assert!(matches!(
        zero,
        Err(ClientError::Validation(ValidationError::AmountRequired))
    ));

    let negative = transactions
        .initialize("a@b.co", -100, InitializeOptions::default())
        .await;
    assert!(matches!(
        negative,
        Err(ClientError::Validation(ValidationError::NegativeAmount))
    ));

    let text = transactions
        .initialize("a@b.co", "lots", InitializeOptions::default())
        .await;
    assert!(matches!(
        text,
        Err(ClientError::Validation(ValidationError::NotANumber(_)))
    ));

    let no_email = transactions
        .initialize("", 5000, InitializeOptions::default())
        .await;
    assert!(matches!(
        no_email,
        Err(ClientError::Validation(ValidationError::InvalidData(_)))
    ));

    // Amount is checked before email.
    let both = transactions
        .initialize("", 0, InitializeOptions::default())
        .await;
    assert!(matches!(
        both,
        Err(ClientError::Validation(ValidationError::AmountRequired))
    ));

    assert_eq!(harness.request_count().await, 0);
}

#[tokio::test]
async fn charge_wraps_metadata_in_custom_fields() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/transaction/charge_authorization"))
        .and(body_json(json!({
            "authorization_code": "AUTH_72btv547",
            "email": "bojack@horsinaround.com",
            "amount": 300_000,
            "reference": "renewal-7",
            "metadata": {"custom_fields": [{"display_name": "Cart", "variable_name": "cart", "value": "1"}]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Charge attempted",
            json!({"id": 99, "status": "success", "reference": "renewal-7"}),
        )))
        .expect(1)
        .mount(&harness.server)
        .await;

    let options = ChargeOptions {
        reference: Some(TransactionReference::new("renewal-7").unwrap()),
        metadata: Some(json!([{"display_name": "Cart", "variable_name": "cart", "value": "1"}])),
    };
    let response = harness
        .client
        .transactions()
        .charge_authorization("bojack@horsinaround.com", "AUTH_72btv547", 300_000, options)
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.data.unwrap().status.as_deref(), Some("success"));
}

#[tokio::test]
async fn charge_requires_email_and_authorization_code() {
    let harness = TestHarness::new().await;
    let transactions = harness.client.transactions();

    let no_email = transactions
        .charge_authorization(" ", "AUTH_x", 100, ChargeOptions::default())
        .await;
    assert!(matches!(no_email, Err(ClientError::Validation(_))));

    let no_code = transactions
        .charge_authorization("a@b.co", "", 100, ChargeOptions::default())
        .await;
    let Err(ClientError::Validation(ValidationError::InvalidData(message))) = no_code else {
        panic!("expected invalid data error");
    };
    assert!(message.contains("authorization code"));

    assert_eq!(harness.request_count().await, 0);
}

#[tokio::test]
async fn verify_returns_transaction_with_customer() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/transaction/verify/7PVGX8MEk85tgeEpVDtD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Verification successful",
            json!({
                "id": 4_099_260_516_u64,
                "status": "abandoned",
                "reference": "7PVGX8MEk85tgeEpVDtD",
                "amount": 100_000,
                "paid_at": null,
                "customer": {"id": 181_873_746, "email": "test_customer@mail.com"}
            }),
        )))
        .expect(1)
        .mount(&harness.server)
        .await;

    let response = harness
        .client
        .transactions()
        .verify("7PVGX8MEk85tgeEpVDtD")
        .await
        .unwrap();

    assert_eq!(response.message, "Verification successful");
    let transaction = response.data.unwrap();
    assert!(transaction.paid_at.is_none());
    assert_eq!(
        transaction.customer.unwrap().email.as_deref(),
        Some("test_customer@mail.com")
    );
}

#[tokio::test]
async fn verify_escapes_reference() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/transaction/verify/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Verification successful",
            json!({"id": 1, "status": "success", "reference": "order"}),
        )))
        .expect(0)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/transaction/verify/order%2342"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&harness.server)
        .await;

    let response = harness
        .client
        .transactions()
        .verify("order#42")
        .await
        .unwrap();

    assert!(!response.status);
    assert_eq!(harness.last_path().await, "/transaction/verify/order%2342");
    assert!(harness.last_query().await.is_empty());
}

#[tokio::test]
async fn verify_rejects_dot_segments() {
    let harness = TestHarness::new().await;

    let result = harness.client.transactions().verify("..").await;

    assert!(matches!(
        result,
        Err(ClientError::Validation(ValidationError::InvalidData(_)))
    ));
    assert_eq!(harness.request_count().await, 0);
}

#[tokio::test]
async fn api_failure_is_passed_through() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/transaction/initialize"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": false,
            "message": "Invalid key"
        })))
        .mount(&harness.server)
        .await;

    let response = harness
        .client
        .transactions()
        .initialize("a@b.co", 5000, InitializeOptions::default())
        .await
        .unwrap();

    assert_eq!(response.status_code, 401);
    assert!(!response.status);
    assert_eq!(response.message, "Invalid key");
    assert!(response.data.is_none());

    let err = response.into_result().unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 401, ref message, .. } if message == "Invalid key"));
}

// ============================================================================
// Transfers and subscriptions
// ============================================================================

#[tokio::test]
async fn list_banks() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/bank"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Banks retrieved",
            json!([{"id": 1, "name": "Access Bank", "code": "044", "type": "nuban", "currency": "NGN"}]),
        )))
        .expect(1)
        .mount(&harness.server)
        .await;

    let banks = harness
        .client
        .transactions()
        .list_banks()
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(banks[0].code.as_deref(), Some("044"));
}

#[tokio::test]
async fn create_transfer_recipient_defaults_to_nuban_ngn() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/transferrecipient"))
        .and(body_json(json!({
            "type": "nuban",
            "currency": "NGN",
            "bank_code": "058",
            "account_number": "0123456789",
            "name": "Tolu Robert"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(
            "Transfer recipient created successfully",
            json!({"id": 6_788_170, "recipient_code": "RCP_t0ya41mp35flk40", "type": "nuban"}),
        )))
        .expect(1)
        .mount(&harness.server)
        .await;

    let response = harness
        .client
        .transactions()
        .create_transfer_recipient("058", "0123456789", "Tolu Robert", RecipientOptions::default())
        .await
        .unwrap();

    assert_eq!(response.status_code, 201);
    assert_eq!(
        response.data.unwrap().recipient_code.as_deref(),
        Some("RCP_t0ya41mp35flk40")
    );
}

#[tokio::test]
async fn transfer_sends_from_balance() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/transfer"))
        .and(body_json(json!({
            "amount": 37_800,
            "reason": "Holiday Flexing",
            "recipient": "RCP_t0ya41mp35flk40",
            "source": "balance",
            "currency": "NGN",
            "reference": "payout-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Transfer has been queued",
            json!({"id": 1, "transfer_code": "TRF_1ptvuv321ahaa7q", "status": "pending", "recipient": 6_788_170}),
        )))
        .expect(1)
        .mount(&harness.server)
        .await;

    let options = TransferOptions {
        reference: Some(TransactionReference::new("payout-1").unwrap()),
        currency: None,
    };
    let transfer = harness
        .client
        .transactions()
        .transfer("RCP_t0ya41mp35flk40", 37_800, "Holiday Flexing", options)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(transfer.status.as_deref(), Some("pending"));
    assert_eq!(transfer.recipient, json!(6_788_170));
}

#[tokio::test]
async fn transfer_rejects_invalid_amount() {
    let harness = TestHarness::new().await;

    let result = harness
        .client
        .transactions()
        .transfer("RCP_x", -5, "refund", TransferOptions::default())
        .await;

    assert!(matches!(
        result,
        Err(ClientError::Validation(ValidationError::NegativeAmount))
    ));
    assert_eq!(harness.request_count().await, 0);
}

#[tokio::test]
async fn cancel_subscription() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/subscription/disable"))
        .and(body_json(json!({"code": "SUB_vsyqdmlzble3uii", "token": "d7gofp6yppn3qz7"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Subscription disabled successfully"
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let response = harness
        .client
        .transactions()
        .cancel_subscription("SUB_vsyqdmlzble3uii", "d7gofp6yppn3qz7")
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.message, "Subscription disabled successfully");
    assert!(response.data.is_none());
}
