/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use schwab_accounts::prelude::*;
//!
//! let config = Config::with_base_url("https://api.schwabapi.com/trader/v1/accounts", None);
//! let client = HttpClient::new(config).unwrap();
//! let accounts = AccountResource::new(std::sync::Arc::new(client));
//! assert_eq!(accounts.base_url(), "https://api.schwabapi.com/trader/v1/accounts");
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AccountResult, AppError};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

pub use crate::application::client::HttpClient;
pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::executor::RequestExecutor;
pub use crate::application::services::account_service::AccountResource;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{
    FieldSelector, QueryParams, TransactionsRequest, fields_params, format_timestamp,
};
pub use crate::model::responses::{Account, AccountNumber, SecuritiesAccount, Transaction};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::config::{get_env_or_default, get_env_or_none};
pub use crate::utils::logger::setup_logger;

// ============================================================================
// EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
