use serde::Deserialize;

use crate::{DEFAULT_NOTIFICATION_BODY, DEFAULT_NOTIFICATION_TITLE, NOTIFICATION_ICON_PATH};

/// Wire format of a push message. Both fields are optional and anything
/// else in the object is ignored. A push with no data, or data that
/// doesn't deserialize, is handled as the empty payload rather than an
/// error, so `Default` is the fallback at that seam.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl PushPayload {
    pub fn resolve(self) -> NotificationContent {
        NotificationContent {
            title: self
                .title
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_TITLE.to_string()),
            body: self
                .body
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_BODY.to_string()),
            icon: NOTIFICATION_ICON_PATH,
        }
    }
}

/// What actually gets displayed once defaults have been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub icon: &'static str,
}

#[cfg(test)]
mod test {
    use super::*;

    // Same shape as the seam in the worker: failed deserialization falls
    // back to the empty payload
    fn parse(raw: &str) -> PushPayload {
        serde_json::from_str(raw).ok().unwrap_or_default()
    }

    #[test]
    fn test_full_payload() {
        let content = parse(r#"{"title":"Game Starting","body":"Table 3 is ready"}"#).resolve();
        assert_eq!(content.title, "Game Starting");
        assert_eq!(content.body, "Table 3 is ready");
        assert_eq!(content.icon, "/static/icon-192.png");
    }

    #[test]
    fn test_absent_payload_defaults() {
        let content = PushPayload::default().resolve();
        assert_eq!(content.title, "Shamrock");
        assert_eq!(content.body, "You have a new notification");
    }

    #[test]
    fn test_empty_object_defaults() {
        let content = parse("{}").resolve();
        assert_eq!(content.title, "Shamrock");
        assert_eq!(content.body, "You have a new notification");
    }

    #[test]
    fn test_unparsable_payload_defaults() {
        let content = parse("not json at all").resolve();
        assert_eq!(content.title, "Shamrock");
        assert_eq!(content.body, "You have a new notification");
    }

    #[test]
    fn test_title_only() {
        let content = parse(r#"{"title":"Last orders"}"#).resolve();
        assert_eq!(content.title, "Last orders");
        assert_eq!(content.body, "You have a new notification");
    }

    #[test]
    fn test_body_only() {
        let content = parse(r#"{"body":"Your table is free"}"#).resolve();
        assert_eq!(content.title, "Shamrock");
        assert_eq!(content.body, "Your table is free");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let content = parse(r#"{"title":"Quiz night","badge":"/x.png","tag":"quiz"}"#).resolve();
        assert_eq!(content.title, "Quiz night");
        assert_eq!(content.body, "You have a new notification");
    }

    #[test]
    fn test_icon_is_fixed() {
        for raw in ["{}", r#"{"icon":"/other.png"}"#] {
            assert_eq!(parse(raw).resolve().icon, "/static/icon-192.png");
        }
    }
}
