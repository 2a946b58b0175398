use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An entry of `globalNotifications` or a user's `notifications` list in
/// `users/notifications.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tag: Option<NotificationTag>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationTag {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_with_tag_and_extra_fields() {
        let n: Notification = serde_json::from_value(json!({
            "title": "September Earnings Payout Postponed",
            "date": "2025-08-26",
            "tag": { "type": "important", "text": "Important" },
            "link": "/announcements/42"
        }))
        .unwrap();

        assert_eq!(n.date, NaiveDate::from_ymd_opt(2025, 8, 26).unwrap());
        assert_eq!(n.tag.unwrap().kind, "important");
        assert_eq!(n.extra["link"], "/announcements/42");
    }

    #[test]
    fn rejects_malformed_date() {
        let res: Result<Notification, _> = serde_json::from_value(json!({
            "title": "x",
            "date": "soon"
        }));
        assert!(res.is_err());
    }
}
