//! Built-in substitute documents for offline operation.
//!
//! When no network is available the loader serves these instead of fetching.
//! Only a handful of resources have real substitutes; everything else gets an
//! empty object, which renders as an empty state upstream. The content here
//! is placeholder except where tests pin it (`USER_001` must exist in the
//! users document).

use serde_json::{json, Value};
use tracing::warn;

use crate::loader::paths;

/// Substitute document for `path`. Unknown paths yield `{}` with a warning.
pub fn substitute(path: &str) -> Value {
    match path {
        paths::USERS => json!({
            "users": [
                {
                    "userId": "USER_001",
                    "name": "Maxwell Walker",
                    "email": "Maxwell.Walker@example.com",
                    "level": {
                        "name": "Explorer",
                        "progress": { "current": 45, "target": 50 }
                    }
                }
            ]
        }),
        paths::NOTIFICATIONS => json!({
            "globalNotifications": [
                {
                    "title": "September Earnings Payout Postponed",
                    "date": "2025-08-26",
                    "tag": { "type": "important", "text": "Important" }
                }
            ],
            "userNotifications": []
        }),
        paths::TERMS => json!({
            "lastUpdated": "August 29, 2025",
            "version": "2.1",
            "sections": [
                {
                    "id": 1,
                    "title": "Program Overview",
                    "content": "The partner platform is an invitation-only program rewarding qualified partners, system integrators and industry professionals."
                },
                {
                    "id": 2,
                    "title": "Eligibility and Invitation",
                    "content": "Participation is by invitation only; candidates are selected on industry expertise, business credentials and market influence."
                },
                {
                    "id": 3,
                    "title": "Partner Levels and Benefits",
                    "content": "Partners are classified into levels based on performance, engagement and sales contribution.",
                    "levels": [
                        {
                            "name": "Builder Level",
                            "requirement": "Entry level - no minimum requirements",
                            "benefits": ["Basic marketing materials", "Standard support"]
                        },
                        {
                            "name": "Explorer Level",
                            "requirement": "Minimum 35 performance points",
                            "benefits": ["Premium marketing materials", "Dedicated account manager", "Early product access"]
                        }
                    ]
                }
            ]
        }),
        other => {
            warn!(path = other, "no substitute document for this resource, serving an empty object");
            json!({})
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_for_user;

    #[test]
    fn users_substitute_contains_the_default_user() {
        let doc = substitute(paths::USERS);
        let record = resolve_for_user(&doc, "USER_001").expect("USER_001 must exist");
        assert_eq!(record["userId"], "USER_001");
    }

    #[test]
    fn substitutes_are_deterministic() {
        assert_eq!(substitute(paths::TERMS), substitute(paths::TERMS));
        assert_eq!(substitute(paths::NOTIFICATIONS), substitute(paths::NOTIFICATIONS));
    }

    #[test]
    fn unknown_path_yields_empty_object() {
        assert_eq!(substitute("nope/missing.json"), json!({}));
    }
}
