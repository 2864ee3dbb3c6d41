use chrono::NaiveDateTime;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::api::models::{GatewayResponse, SmsPayload};
use crate::api::{DispatchError, DEFAULT_FAILURE_REASON};
use crate::config::{ConfigError, Settings};
use crate::utils;

/// Thin client for the SMS gateway's send endpoint. Holds no state beyond
/// the connection pool; concurrent sends are fully independent.
pub struct GatewayClient {
    http: HttpClient,
    api_url: String,
    api_token: String,
    sender_id: String,
}

impl GatewayClient {
    /// Build a client from validated settings. Fails up front when the
    /// bearer token is missing or the sender id breaks the gateway contract,
    /// so no request is ever issued with bad credentials.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            http: HttpClient::new(),
            api_url: settings.api_url.clone(),
            api_token: settings.api_token.clone(),
            sender_id: settings.sender_id.clone(),
        })
    }

    fn payload(
        &self,
        recipient: &str,
        message: &str,
        schedule_time: Option<NaiveDateTime>,
    ) -> SmsPayload {
        SmsPayload {
            recipient: recipient.to_string(),
            sender_id: self.sender_id.clone(),
            message_type: "plain".to_string(),
            message: message.to_string(),
            schedule_time: schedule_time.map(utils::format_schedule_time),
        }
    }

    /// Send one message to a single number or an already comma-joined list
    /// (the gateway's bulk convention). Issues exactly one POST and maps
    /// every failure into [`DispatchError`]; no retry, no timeout beyond the
    /// HTTP client's defaults.
    pub async fn send_single_or_bulk(
        &self,
        recipient: &str,
        message: &str,
        schedule_time: Option<NaiveDateTime>,
    ) -> Result<Value, DispatchError> {
        let payload = self.payload(recipient, message, schedule_time);
        debug!("dispatching sms to {}", payload.recipient);

        let req = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Accept", "application/json")
            .json(&payload);

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("sms gateway unreachable: {}", e);
                return Err(DispatchError::Unavailable);
            }
        };

        let status = resp.status();
        if !status.is_success() {
            warn!("sms gateway returned http {}", status);
            // Error bodies usually still carry a usable message.
            let reason = resp
                .json::<GatewayResponse>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(match reason {
                Some(msg) => DispatchError::Gateway(msg),
                None => DispatchError::Http(status.as_u16()),
            });
        }

        let body = match resp.json::<GatewayResponse>().await {
            Ok(body) => body,
            Err(e) => {
                warn!("unreadable gateway response: {}", e);
                return Err(DispatchError::Unavailable);
            }
        };

        if body.is_success() {
            Ok(body.data.unwrap_or(Value::Null))
        } else {
            Err(DispatchError::Gateway(
                body.message
                    .unwrap_or_else(|| DEFAULT_FAILURE_REASON.to_string()),
            ))
        }
    }

    /// Drop implausible numbers, join the rest with commas and send them as
    /// one batch. A single gateway response governs the whole batch; there is
    /// no per-recipient accounting.
    pub async fn send_bulk(
        &self,
        recipients: &[String],
        message: &str,
        schedule_time: Option<NaiveDateTime>,
    ) -> Result<Value, DispatchError> {
        let valid: Vec<&str> = recipients
            .iter()
            .map(String::as_str)
            .filter(|r| utils::is_plausible_recipient(r))
            .collect();
        if valid.is_empty() {
            return Err(DispatchError::NoRecipients);
        }
        self.send_single_or_bulk(&valid.join(","), message, schedule_time)
            .await
    }
}
