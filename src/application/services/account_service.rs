use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::executor::RequestExecutor;
use crate::constants::{ACCOUNT_NUMBERS_PATH, TRANSACTIONS_PATH};
use crate::error::{AccountResult, AppError};
use crate::model::requests::{FieldSelector, QueryParams, TransactionsRequest, fields_params};
use crate::model::responses::{Account, AccountNumber, Transaction};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

/// Accessor for the `accounts` resource
///
/// Holds the injected executor and the base URL derived from it. Besides the
/// [`AccountService`] methods, which return the tagged failure, every query is
/// also available as a plain method returning `None` on failure. Those log
/// exactly one error record per failed call, carrying the operation name and
/// the account hash when there is one.
pub struct AccountResource<C: RequestExecutor> {
    client: Arc<C>,
    base_url: String,
}

impl<C: RequestExecutor> AccountResource<C> {
    /// Creates a new account resource on top of `client`
    pub fn new(client: Arc<C>) -> Self {
        let base_url = client.accounts_base_url().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL every account path is built under
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Gets the injected executor
    pub fn client(&self) -> Arc<C> {
        self.client.clone()
    }

    /// Retrieves the account numbers linked to the user's profile
    ///
    /// Returns `None` when the request fails.
    pub async fn get_account_numbers(&self) -> Option<Vec<AccountNumber>> {
        settle(
            "get_account_numbers",
            None,
            self.try_get_account_numbers().await,
        )
    }

    /// Retrieves every linked account, optionally with extra fields
    ///
    /// An empty selector is the same as no selector. Returns `None` when the
    /// request fails.
    pub async fn get_all_accounts(&self, fields: Option<FieldSelector>) -> Option<Vec<Account>> {
        settle(
            "get_all_accounts",
            None,
            self.try_get_all_accounts(fields).await,
        )
    }

    /// Retrieves a single account by hash
    ///
    /// Returns `None` without sending anything when `account_hash` is empty,
    /// and `None` when the request fails.
    pub async fn get_account(
        &self,
        account_hash: &str,
        fields: Option<FieldSelector>,
    ) -> Option<Account> {
        settle(
            "get_account",
            Some(account_hash),
            self.try_get_account(account_hash, fields).await,
        )
    }

    /// Retrieves the transactions of an account between two instants
    ///
    /// Returns `None` without sending anything when `account_hash` is empty,
    /// and `None` when the request fails.
    pub async fn get_account_transactions(
        &self,
        account_hash: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        types: Option<&str>,
        symbol: Option<&str>,
    ) -> Option<Vec<Transaction>> {
        settle(
            "get_account_transactions",
            Some(account_hash),
            self.try_get_account_transactions(account_hash, start_date, end_date, types, symbol)
                .await,
        )
    }

    fn account_url(&self, account_hash: &str) -> String {
        format!("{}/{}", self.base_url, account_hash)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str, params: &QueryParams) -> AccountResult<T> {
        debug!("GET {} with {} parameter(s)", url, params.len());
        let body = self.client.make_request(url, params).await?;
        serde_json::from_value(body).map_err(|e| AppError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl<C: RequestExecutor> AccountService for AccountResource<C> {
    async fn try_get_account_numbers(&self) -> AccountResult<Vec<AccountNumber>> {
        let url = format!("{}/{}", self.base_url, ACCOUNT_NUMBERS_PATH);
        let numbers: Vec<AccountNumber> = self.fetch(&url, &QueryParams::new()).await?;

        debug!("Account numbers obtained: {} accounts", numbers.len());
        Ok(numbers)
    }

    async fn try_get_all_accounts(
        &self,
        fields: Option<FieldSelector>,
    ) -> AccountResult<Vec<Account>> {
        let params = fields_params(fields.as_ref());
        let accounts: Vec<Account> = self.fetch(&self.base_url, &params).await?;

        debug!("Accounts obtained: {} accounts", accounts.len());
        Ok(accounts)
    }

    async fn try_get_account(
        &self,
        account_hash: &str,
        fields: Option<FieldSelector>,
    ) -> AccountResult<Account> {
        require_account_hash(account_hash, "getting account details")?;

        let params = fields_params(fields.as_ref());
        self.fetch(&self.account_url(account_hash), &params).await
    }

    async fn try_get_account_transactions(
        &self,
        account_hash: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        types: Option<&str>,
        symbol: Option<&str>,
    ) -> AccountResult<Vec<Transaction>> {
        require_account_hash(account_hash, "getting account transactions")?;

        let request = TransactionsRequest {
            start_date,
            end_date,
            types: types.map(String::from),
            symbol: symbol.map(String::from),
        };
        let url = format!("{}/{}", self.account_url(account_hash), TRANSACTIONS_PATH);
        let transactions: Vec<Transaction> = self.fetch(&url, &request.to_params()).await?;

        debug!("Transactions obtained: {} transactions", transactions.len());
        Ok(transactions)
    }
}

fn require_account_hash(account_hash: &str, purpose: &str) -> AccountResult<()> {
    if account_hash.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "account hash is required for {purpose}"
        )));
    }
    Ok(())
}

/// Collapses a result into an option, logging the failure once
fn settle<T>(
    operation: &'static str,
    account_hash: Option<&str>,
    result: AccountResult<T>,
) -> Option<T> {
    let err = match result {
        Ok(value) => return Some(value),
        Err(err) => err,
    };
    let validation = err.is_validation();

    match account_hash.filter(|hash| !hash.is_empty()) {
        Some(hash) => error!(
            operation,
            account_hash = hash,
            validation,
            error = %err,
            "{operation} failed for account {hash}: {err}"
        ),
        None => error!(
            operation,
            validation,
            error = %err,
            "{operation} failed: {err}"
        ),
    }
    None
}
