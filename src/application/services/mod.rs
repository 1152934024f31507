/// Module containing the account resource for retrieving account information
pub mod account_service;

pub use crate::application::interfaces::account::*;
pub use account_service::*;
