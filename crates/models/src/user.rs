use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record out of `users/users.json` -> `users[]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Bank, referral and account-settings blocks are edited by the UI but
    /// never interpreted here, so they stay as open maps.
    #[serde(default)]
    pub bank_info: Option<Map<String, Value>>,
    #[serde(default)]
    pub referral_info: Option<Map<String, Value>>,
    #[serde(default)]
    pub account_settings: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub progress: Option<Progress>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub current: u32,
    pub target: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_record() {
        let profile: UserProfile = serde_json::from_value(json!({
            "userId": "USER_001",
            "name": "Maxwell Walker",
            "email": "Maxwell.Walker@example.com",
            "level": {
                "name": "Explorer",
                "icon": "explorer.svg",
                "progress": { "current": 45, "target": 50 }
            },
            "avatar": "avatars/USER_001.png",
            "bankInfo": { "iban": "DE00 0000" },
            "referralInfo": { "code": "MAX45" },
            "accountSettings": { "newsletter": true }
        }))
        .unwrap();

        assert_eq!(profile.user_id, "USER_001");
        let level = profile.level.unwrap();
        assert_eq!(level.progress.unwrap().target, 50);
        assert!(profile.bank_info.unwrap().contains_key("iban"));
    }

    #[test]
    fn optional_blocks_may_be_absent() {
        let profile: UserProfile = serde_json::from_value(json!({
            "userId": "USER_002",
            "name": "A",
            "email": "a@example.com"
        }))
        .unwrap();
        assert!(profile.level.is_none());
        assert!(profile.avatar.is_none());
    }
}
