//! Dispatch client for the CRM's bulk-SMS gateway.
//!
//! Normalizes recipient lists, formats schedule timestamps and issues one
//! authenticated POST per campaign send. Every failure path is folded into
//! [`DispatchError`]; nothing panics across this boundary.

pub mod api;
pub mod config;
pub mod utils;

pub use api::DispatchError;
pub use api::client::GatewayClient;
pub use config::Settings;
