/// Reqwest based request executor
pub mod client;
/// Application configuration module
pub mod config;
/// Traits at the seams between the resource and its collaborators
pub mod interfaces;
/// Account resource implementation
pub mod services;
