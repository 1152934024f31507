use crate::common::{BASE_URL, StubExecutor, capture_logs};
use assert_json_diff::assert_json_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use schwab_accounts::prelude::*;
use serde_json::json;

fn window() -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2023, 1, 31, 23, 59, 59).unwrap();
    (start, end)
}

#[tokio::test]
async fn failing_executor_yields_none_and_one_error_per_operation() {
    let (start, end) = window();

    let client = StubExecutor::failing("connection refused");
    let accounts = AccountResource::new(client.clone());
    let (logs, _guard) = capture_logs();
    assert!(accounts.get_account_numbers().await.is_none());
    assert_eq!(logs.error_lines().len(), 1);
    assert_eq!(client.call_count(), 1);

    let client = StubExecutor::failing("connection refused");
    let accounts = AccountResource::new(client.clone());
    let (logs, _guard) = capture_logs();
    assert!(accounts.get_all_accounts(None).await.is_none());
    assert_eq!(logs.error_lines().len(), 1);
    assert_eq!(client.call_count(), 1);

    let client = StubExecutor::failing("connection refused");
    let accounts = AccountResource::new(client.clone());
    let (logs, _guard) = capture_logs();
    assert!(accounts.get_account("HASH123", None).await.is_none());
    assert_eq!(logs.error_lines().len(), 1);
    assert_eq!(client.call_count(), 1);

    let client = StubExecutor::failing("connection refused");
    let accounts = AccountResource::new(client.clone());
    let (logs, _guard) = capture_logs();
    assert!(
        accounts
            .get_account_transactions("HASH123", start, end, None, None)
            .await
            .is_none()
    );
    assert_eq!(logs.error_lines().len(), 1);
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn failure_record_names_operation_hash_and_cause() {
    let client = StubExecutor::failing("connection reset by peer");
    let accounts = AccountResource::new(client);
    let (logs, _guard) = capture_logs();

    assert!(accounts.get_account("HASH123", None).await.is_none());

    let errors = logs.error_lines();
    assert_eq!(errors.len(), 1);
    let record = &errors[0];
    assert!(record.contains("get_account"));
    assert!(record.contains("HASH123"));
    assert!(record.contains("connection reset by peer"));
    assert!(record.contains("error=transport error: connection reset by peer"));
}

#[tokio::test]
async fn empty_account_hash_is_rejected_without_a_request() {
    let client = StubExecutor::responding(json!({"securitiesAccount": {}}));
    let accounts = AccountResource::new(client.clone());
    let (logs, _guard) = capture_logs();

    assert!(accounts.get_account("", None).await.is_none());
    assert!(
        accounts
            .get_account("", Some("positions".into()))
            .await
            .is_none()
    );

    assert_eq!(client.call_count(), 0);
    let errors = logs.error_lines();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("account hash is required"));
}

#[tokio::test]
async fn transactions_with_empty_hash_are_rejected_without_a_request() {
    let (start, end) = window();
    let client = StubExecutor::responding(json!([]));
    let accounts = AccountResource::new(client.clone());
    let (logs, _guard) = capture_logs();

    assert!(
        accounts
            .get_account_transactions("", start, end, Some("TRADE"), None)
            .await
            .is_none()
    );
    assert_eq!(client.call_count(), 0);
    assert_eq!(logs.error_lines().len(), 1);
}

#[tokio::test]
async fn account_numbers_hit_the_account_numbers_path_without_params() {
    let client = StubExecutor::responding(json!([
        {"accountNumber": "12345678", "hashValue": "ABCDEF0123"},
        {"accountNumber": "87654321", "hashValue": "0123ABCDEF"}
    ]));
    let accounts = AccountResource::new(client.clone());

    let numbers = accounts.get_account_numbers().await.expect("account numbers");

    let (url, params) = client.only_call();
    assert_eq!(url, format!("{BASE_URL}/accountNumbers"));
    assert!(params.is_empty());

    assert_eq!(numbers.len(), 2);
    assert_eq!(numbers[0].account_number, "12345678");
    assert_eq!(numbers[1].hash_value, "0123ABCDEF");
    assert_json_eq!(
        serde_json::to_value(&numbers[0]).unwrap(),
        json!({"accountNumber": "12345678", "hashValue": "ABCDEF0123"})
    );
}

#[tokio::test]
async fn all_accounts_without_fields_sends_no_params() {
    let client = StubExecutor::responding(json!([]));
    let accounts = AccountResource::new(client.clone());

    let result = accounts.get_all_accounts(None).await;
    assert_eq!(result, Some(Vec::new()));

    let (url, params) = client.only_call();
    assert_eq!(url, BASE_URL);
    assert!(params.is_empty());
}

#[tokio::test]
async fn all_accounts_with_empty_fields_sends_no_params() {
    let client = StubExecutor::responding(json!([]));
    let accounts = AccountResource::new(client.clone());

    accounts
        .get_all_accounts(Some("".into()))
        .await
        .expect("accounts");

    let (_, params) = client.only_call();
    assert!(!params.contains_key("fields"));
}

#[tokio::test]
async fn all_accounts_with_fields_sends_fields_param() {
    let client = StubExecutor::responding(json!([
        {"securitiesAccount": {"accountNumber": "12345678", "type": "CASH", "positions": [{"longQuantity": 10.0}]}}
    ]));
    let accounts = AccountResource::new(client.clone());

    let result = accounts
        .get_all_accounts(Some("positions".into()))
        .await
        .expect("accounts");

    let (url, params) = client.only_call();
    assert_eq!(url, BASE_URL);
    assert_eq!(params.len(), 1);
    assert_eq!(params["fields"].as_deref(), Some("positions"));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].securities_account.position_count(), 1);
}

#[tokio::test]
async fn single_account_uses_hash_in_path_and_joined_field_set() {
    let client = StubExecutor::responding(json!({"securitiesAccount": {"accountNumber": "12345678"}}));
    let accounts = AccountResource::new(client.clone());
    let fields = FieldSelector::from(&["positions", "orders"][..]);

    let account = accounts
        .get_account("HASH123", Some(fields))
        .await
        .expect("account");

    let (url, params) = client.only_call();
    assert_eq!(url, format!("{BASE_URL}/HASH123"));
    assert_eq!(params["fields"].as_deref(), Some("positions,orders"));
    assert_eq!(
        account.securities_account.account_number.as_deref(),
        Some("12345678")
    );
}

#[tokio::test]
async fn transactions_send_dates_and_keep_absent_filters() {
    let (start, end) = window();
    let client = StubExecutor::responding(json!([
        {"activityId": 1, "type": "TRADE", "netAmount": -150.25},
        {"activityId": 2, "type": "DIVIDEND_OR_INTEREST", "netAmount": 3.5}
    ]));
    let accounts = AccountResource::new(client.clone());

    let transactions = accounts
        .get_account_transactions("HASH123", start, end, None, None)
        .await
        .expect("transactions");

    let (url, params) = client.only_call();
    assert_eq!(url, format!("{BASE_URL}/HASH123/transactions"));
    assert_eq!(params.len(), 4);
    assert_eq!(params["startDate"].as_deref(), Some("2023-01-01T00:00:00Z"));
    assert_eq!(params["endDate"].as_deref(), Some("2023-01-31T23:59:59Z"));
    assert!(params.contains_key("types"));
    assert!(params.contains_key("symbol"));
    assert_eq!(params["types"], None);
    assert_eq!(params["symbol"], None);

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].transaction_type.as_deref(), Some("TRADE"));
    assert_eq!(transactions[1].net_amount, Some(3.5));
}

#[tokio::test]
async fn transactions_pass_filters_through() {
    let (start, end) = window();
    let client = StubExecutor::responding(json!([]));
    let accounts = AccountResource::new(client.clone());

    accounts
        .get_account_transactions("HASH123", start, end, Some("TRADE"), Some("AAPL"))
        .await
        .expect("transactions");

    let (_, params) = client.only_call();
    assert_eq!(params["types"].as_deref(), Some("TRADE"));
    assert_eq!(params["symbol"].as_deref(), Some("AAPL"));
}

#[tokio::test]
async fn serialized_dates_parse_back_to_the_same_instants() {
    let base = Utc.with_ymd_and_hms(2024, 2, 29, 13, 45, 7).unwrap();
    let pairs = [
        (base, base),
        (base, base + Duration::days(30)),
        (
            base + Duration::milliseconds(123),
            base + Duration::nanoseconds(987_654_321),
        ),
        (
            Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        ),
    ];

    for (start, end) in pairs {
        let client = StubExecutor::responding(json!([]));
        let accounts = AccountResource::new(client.clone());
        accounts
            .get_account_transactions("HASH123", start, end, None, None)
            .await
            .expect("transactions");

        let (_, params) = client.only_call();
        let start_text = params["startDate"].clone().unwrap();
        let end_text = params["endDate"].clone().unwrap();

        let parsed_start = DateTime::parse_from_rfc3339(&start_text).unwrap();
        let parsed_end = DateTime::parse_from_rfc3339(&end_text).unwrap();
        assert_eq!(parsed_start.with_timezone(&Utc), start);
        assert_eq!(parsed_end.with_timezone(&Utc), end);
    }
}

#[tokio::test]
async fn malformed_payload_is_collapsed_to_none() {
    let client = StubExecutor::responding(json!({"unexpected": true}));
    let accounts = AccountResource::new(client.clone());
    let (logs, _guard) = capture_logs();

    assert!(accounts.get_all_accounts(None).await.is_none());
    assert_eq!(client.call_count(), 1);
    let errors = logs.error_lines();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("deserialization error"));
}

#[tokio::test]
async fn successful_calls_log_no_errors() {
    let client = StubExecutor::responding(json!([]));
    let accounts = AccountResource::new(client);
    let (logs, _guard) = capture_logs();

    assert!(accounts.get_all_accounts(None).await.is_some());
    assert!(logs.error_lines().is_empty());
}

#[tokio::test]
async fn partial_account_numbers_are_returned() {
    let client = StubExecutor::responding(json!([{"accountNumber": "12345678"}]));
    let accounts = AccountResource::new(client.clone());
    let (logs, _guard) = capture_logs();

    let numbers = accounts.get_account_numbers().await.expect("account numbers");
    assert_eq!(numbers.len(), 1);
    assert_eq!(numbers[0].account_number, "12345678");
    assert!(numbers[0].hash_value.is_empty());
    assert_eq!(client.call_count(), 1);
    assert!(logs.error_lines().is_empty());
}

#[tokio::test]
async fn accounts_without_securities_account_are_returned() {
    let client = StubExecutor::responding(json!([
        {"aggregatedBalance": {"liquidationValue": 2500.0}}
    ]));
    let accounts = AccountResource::new(client);

    let all = accounts.get_all_accounts(None).await.expect("accounts");
    assert_eq!(all.len(), 1);
    assert!(all[0].aggregated_balance.is_some());
    assert_eq!(all[0].securities_account, SecuritiesAccount::default());
}

#[tokio::test]
async fn single_account_with_partial_payload_is_returned() {
    let client = StubExecutor::responding(json!({
        "securitiesAccount": {"roundTrips": "unknown", "positions": "none"}
    }));
    let accounts = AccountResource::new(client);

    let account = accounts.get_account("HASH123", None).await.expect("account");
    assert_eq!(account.securities_account.round_trips, None);
    assert_eq!(account.securities_account.position_count(), 0);
}

#[tokio::test]
async fn transactions_with_textual_ids_are_returned() {
    let (start, end) = window();
    let client = StubExecutor::responding(json!([{"activityId": "A-1"}]));
    let accounts = AccountResource::new(client);

    let transactions = accounts
        .get_account_transactions("HASH123", start, end, None, None)
        .await
        .expect("transactions");
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].activity_id, Some(json!("A-1")));
}
