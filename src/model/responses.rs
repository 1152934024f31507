/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Reads a value of any JSON type as text; `null` becomes an empty string
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Reads a typed value, falling back to the default when the JSON type differs
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Plain account number paired with the hash used in resource paths
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AccountNumber {
    /// Plain text account number
    #[serde(rename = "accountNumber", default, deserialize_with = "lenient_string")]
    pub account_number: String,
    /// Opaque hash identifying the account in URLs
    #[serde(rename = "hashValue", default, deserialize_with = "lenient_string")]
    pub hash_value: String,
}

/// Details of a linked account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Account {
    /// Securities account details
    #[serde(rename = "securitiesAccount", default, deserialize_with = "lenient")]
    pub securities_account: SecuritiesAccount,
    /// Aggregated balance across the account, when returned
    #[serde(rename = "aggregatedBalance", default, skip_serializing_if = "Option::is_none")]
    pub aggregated_balance: Option<Value>,
}

/// Securities account as returned by the account endpoints
///
/// Only the identifying keys are typed. Balances, positions and any other
/// keys are passed through untouched.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SecuritiesAccount {
    /// Plain text account number
    #[serde(rename = "accountNumber", default, deserialize_with = "lenient")]
    pub account_number: Option<String>,
    /// Account type (e.g. `MARGIN`, `CASH`)
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub account_type: Option<String>,
    /// Number of day trade round trips
    #[serde(rename = "roundTrips", default, deserialize_with = "lenient")]
    pub round_trips: Option<i64>,
    /// Whether the account is flagged as a day trader
    #[serde(rename = "isDayTrader", default, deserialize_with = "lenient")]
    pub is_day_trader: Option<bool>,
    /// Whether the account is restricted to closing transactions
    #[serde(rename = "isClosingOnlyRestricted", default, deserialize_with = "lenient")]
    pub is_closing_only_restricted: Option<bool>,
    /// Positions, present only when requested through `fields=positions`
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<Value>>,
    /// Remaining keys
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl SecuritiesAccount {
    /// Number of positions returned with the account, zero when not requested
    pub fn position_count(&self) -> usize {
        self.positions.as_ref().map_or(0, Vec::len)
    }
}

/// A single account transaction
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Transaction {
    /// Transaction identifier, numeric or textual as the server sends it
    #[serde(rename = "activityId", default)]
    pub activity_id: Option<Value>,
    /// Time the transaction was recorded
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<String>,
    /// Plain text account number
    #[serde(rename = "accountNumber", default, deserialize_with = "lenient")]
    pub account_number: Option<String>,
    /// Transaction type (e.g. `TRADE`)
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub transaction_type: Option<String>,
    /// Transaction status
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    /// Free text description
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Net cash amount
    #[serde(rename = "netAmount", default, deserialize_with = "lenient")]
    pub net_amount: Option<f64>,
    /// Remaining keys
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
