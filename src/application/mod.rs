/// REST client implementing the market service
pub mod client;
/// Application configuration module
pub mod config;
/// Filter/merge engine deriving the displayed coin list
pub mod filter;
/// Service interfaces
pub mod interfaces;
/// Fail-soft services built on the interfaces
pub mod services;
/// Coin list, view and detail state
pub mod state;
