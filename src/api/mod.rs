pub mod client;
pub mod models;

use thiserror::Error;

/// Reason shown when the gateway fails without telling us why.
pub const DEFAULT_FAILURE_REASON: &str = "Failed to send SMS";

/// Every way a dispatch can fail, folded into one value for the caller.
/// `Display` is the operator-facing reason; none of these are retried.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The recipient list was empty after filtering; no request was made.
    #[error("No valid recipients selected")]
    NoRecipients,
    /// The gateway answered but reported failure in the response body.
    #[error("{0}")]
    Gateway(String),
    /// Non-2xx status with no usable message in the body.
    #[error("Failed to send SMS")]
    Http(u16),
    /// The request never completed, or the response was not valid JSON.
    #[error("SMS service unavailable")]
    Unavailable,
}
