use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body of the gateway's send endpoint. `recipient` is a single number
/// or a comma-joined list; `schedule_time` is omitted entirely for an
/// immediate send.
#[derive(Debug, Clone, Serialize)]
pub struct SmsPayload {
    pub recipient: String,
    pub sender_id: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_time: Option<String>,
}

/// What the gateway answers with: a stringly `status` plus an opaque `data`
/// payload on success or a human-readable `message` on failure.
#[derive(Debug, Deserialize)]
pub struct GatewayResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GatewayResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
