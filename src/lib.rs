/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Schwab Accounts
//!
//! A thin async client for the account endpoints of the Schwab Trader API.
//!
//! The crate is split into two layers:
//!
//! - a [`RequestExecutor`](application::interfaces::executor::RequestExecutor)
//!   that knows how to perform one authenticated GET and decode the JSON body
//!   ([`HttpClient`](application::client::HttpClient) is the `reqwest`
//!   implementation), and
//! - an [`AccountResource`](application::services::account_service::AccountResource)
//!   that maps account queries onto URLs and query parameters.
//!
//! `AccountResource` exposes every query twice. The `try_*` methods of
//! [`AccountService`](application::interfaces::account::AccountService) return
//! a tagged [`AppError`](error::AppError). The plain methods return `None` on
//! any failure and log a single error record instead.
//!
//! ## Usage
//!
//! ```ignore
//! use schwab_accounts::prelude::*;
//! use std::sync::Arc;
//!
//! setup_logger();
//! let client = Arc::new(HttpClient::new(Config::new())?);
//! let accounts = AccountResource::new(client);
//!
//! if let Some(numbers) = accounts.get_account_numbers().await {
//!     for number in numbers {
//!         println!("{} -> {}", number.account_number, number.hash_value);
//!     }
//! }
//! ```
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads a `.env` file when
//! present and then the following variables:
//!
//! | Variable | Default |
//! |---|---|
//! | `SCHWAB_ACCOUNTS_BASE_URL` | `https://api.schwabapi.com/trader/v1/accounts` |
//! | `SCHWAB_ACCESS_TOKEN` | none |
//! | `SCHWAB_REST_TIMEOUT` | `30` |
//! | `LOGLEVEL` | `INFO` |

/// Core application layer: configuration, HTTP client and account services
pub mod application;
/// Constants shared across the crate
pub mod constants;
/// Error types
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
