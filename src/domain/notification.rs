use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttemptStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub channel: String,
    pub status: AttemptStatus,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_prob: Option<f64>,
}

impl AttemptRecord {
    pub fn is_success(&self) -> bool {
        self.status == AttemptStatus::Success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoMode {
    ForcePrimaryFail,
}

impl DemoMode {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some("force_primary_fail") => Some(DemoMode::ForcePrimaryFail),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: Uuid,
    pub event_type: String,
    pub primary_channel: String,
    pub intended_channel_override: Option<String>,
    pub retry_score: u8,
    pub retry_percentage: f64,
    pub routing_order: Vec<String>,
    pub delivered_via: String,
    pub attempts: Vec<AttemptRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendRequest {
    pub event_type: Option<String>,
    pub demo_mode: Option<String>,
    pub intended_channel: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendResponse {
    pub ok: bool,
    pub notification: Notification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxEntry {
    pub notification_id: Uuid,
    pub event_type: String,
    pub delivered_via: String,
    pub attempts: Vec<AttemptRecord>,
    pub timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl InboxEntry {
    pub fn from_notification(
        notification: &Notification,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Self {
            notification_id: notification.notification_id,
            event_type: notification.event_type.clone(),
            delivered_via: notification.delivered_via.clone(),
            attempts: notification.attempts.clone(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageRef {
    #[serde(default)]
    pub notification_id: Option<serde_json::Value>,
}

impl MessageRef {
    /// Ids that are missing or not UUIDs cannot match any stored entry.
    pub fn parsed_id(&self) -> Option<Uuid> {
        match self.notification_id.as_ref()? {
            serde_json::Value::String(s) => Uuid::parse_str(s.trim()).ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_force_primary_fail_is_recognized() {
        assert_eq!(DemoMode::parse(Some("force_primary_fail")), Some(DemoMode::ForcePrimaryFail));
        assert_eq!(DemoMode::parse(Some("chaos")), None);
        assert_eq!(DemoMode::parse(None), None);
    }

    #[test]
    fn message_ref_tolerates_foreign_ids() {
        let id = Uuid::new_v4();
        let ok: MessageRef = serde_json::from_value(serde_json::json!({"notification_id": id.to_string()})).unwrap();
        assert_eq!(ok.parsed_id(), Some(id));

        let legacy: MessageRef = serde_json::from_value(serde_json::json!({"notification_id": "legacy-1"})).unwrap();
        assert_eq!(legacy.parsed_id(), None);
        let numeric: MessageRef = serde_json::from_value(serde_json::json!({"notification_id": 7})).unwrap();
        assert_eq!(numeric.parsed_id(), None);
        let missing: MessageRef = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(missing.parsed_id(), None);
    }

    #[test]
    fn synthesized_attempt_omits_fail_prob() {
        let rec = AttemptRecord {
            channel: "Inbox".to_string(),
            status: AttemptStatus::Success,
            reason: "forced_final_fallback".to_string(),
            fail_prob: None,
        };
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["status"], "SUCCESS");
        assert!(v.get("fail_prob").is_none());
    }
}
