/// Synchronous wrapper around the client
pub mod blocking;
/// Asynchronous client and service implementations
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
