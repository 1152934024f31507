use chrono::{Duration, Utc};
use schwab_accounts::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("=== Schwab Accounts Example ===");

    let client = Arc::new(HttpClient::new(Config::new())?);
    let accounts = AccountResource::new(client);
    info!("Using accounts resource at {}", accounts.base_url());

    let Some(numbers) = accounts.get_account_numbers().await else {
        error!("No account numbers returned, check SCHWAB_ACCESS_TOKEN");
        return Ok(());
    };
    for (i, number) in numbers.iter().enumerate() {
        info!("{}. {} (hash: {})", i + 1, number.account_number, number.hash_value);
    }

    if let Some(all) = accounts.get_all_accounts(Some("positions".into())).await {
        for account in &all {
            let json = serde_json::to_string_pretty(&account.securities_account)?;
            info!("Account details:\n{}", json);
        }
    }

    let Some(first) = numbers.first() else {
        info!("No linked accounts");
        return Ok(());
    };

    let end = Utc::now();
    let start = end - Duration::days(30);
    match accounts
        .get_account_transactions(&first.hash_value, start, end, Some("TRADE"), None)
        .await
    {
        Some(transactions) if transactions.is_empty() => info!("No trades in the last 30 days"),
        Some(transactions) => {
            info!("Trades in the last 30 days: {}", transactions.len());
            for tx in &transactions {
                info!(
                    "{} {} {:?}",
                    tx.time.as_deref().unwrap_or("-"),
                    tx.description.as_deref().unwrap_or("-"),
                    tx.net_amount
                );
            }
        }
        None => error!("Transactions could not be retrieved"),
    }

    Ok(())
}
