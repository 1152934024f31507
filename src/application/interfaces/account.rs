use crate::error::AppError;
use crate::model::requests::FieldSelector;
use crate::model::responses::{Account, AccountNumber, Transaction};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Interface for the account endpoints
///
/// Every method returns the tagged failure reason instead of collapsing it.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the account number / hash pairs linked to the user
    async fn try_get_account_numbers(&self) -> Result<Vec<AccountNumber>, AppError>;

    /// Gets every linked account, optionally with extra fields
    async fn try_get_all_accounts(
        &self,
        fields: Option<FieldSelector>,
    ) -> Result<Vec<Account>, AppError>;

    /// Gets a single account by its hash
    ///
    /// # Arguments
    /// * `account_hash` - Hash value from [`try_get_account_numbers`](AccountService::try_get_account_numbers)
    /// * `fields` - Optional extra fields (e.g. `positions`)
    async fn try_get_account(
        &self,
        account_hash: &str,
        fields: Option<FieldSelector>,
    ) -> Result<Account, AppError>;

    /// Gets the transactions of an account over a date range
    ///
    /// # Arguments
    /// * `account_hash` - Hash value of the account
    /// * `start_date` - Start of the window
    /// * `end_date` - End of the window
    /// * `types` - Optional transaction type filter
    /// * `symbol` - Optional symbol filter
    async fn try_get_account_transactions(
        &self,
        account_hash: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        types: Option<&str>,
        symbol: Option<&str>,
    ) -> Result<Vec<Transaction>, AppError>;
}
