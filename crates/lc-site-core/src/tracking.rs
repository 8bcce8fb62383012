//! Placeholder analytics events.
//!
//! Nothing is sent anywhere; events are serialized into the diagnostic log so
//! an analytics integration can pick up the same shape later.

use serde::Serialize;

pub const PHONE_LINK_SELECTOR: &str = "a[href^=\"tel:\"]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub action: &'static str,
    pub category: &'static str,
    pub label: &'static str,
}

impl AnalyticsEvent {
    pub fn phone_call() -> Self {
        Self {
            action: "click",
            category: "Contact",
            label: "Phone Call",
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_call_event_shape() {
        assert_eq!(
            AnalyticsEvent::phone_call().to_json(),
            r#"{"action":"click","category":"Contact","label":"Phone Call"}"#
        );
    }
}
