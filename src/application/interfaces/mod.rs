/// Account service interface
pub mod account;
/// Request executor interface
pub mod executor;
