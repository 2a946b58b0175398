//! Per-user resolution over multi-user documents.
//!
//! A fixture either bundles every user's data under one of a fixed set of
//! container keys, or is global and applies to everyone. Which convention a
//! document uses is decided by the first recognized key present, in the
//! priority order below; a document is assumed to use exactly one.

use serde_json::Value;

/// Recognized container conventions in consultation order. `payload` names
/// the field lifted out of the matched entry; record conventions (`None`)
/// return the entry itself.
const CONVENTIONS: [(&str, Option<&str>); 7] = [
    ("users", None),
    ("userStats", Some("stats")),
    ("userEarnings", None),
    ("userOrders", Some("orders")),
    ("userPayouts", Some("payouts")),
    ("userPerformance", None),
    ("userNotifications", Some("notifications")),
];

/// How a document scopes its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Bundles per-user entries under `key`; a `payload` field is extracted
    /// from the matched entry when set.
    PerUser {
        key: &'static str,
        payload: Option<&'static str>,
    },
    /// No recognized container key: the document applies to every user.
    Global,
}

/// Classify a document by the first recognized container key it carries.
/// A key explicitly set to `null` does not count as present.
pub fn classify(doc: &Value) -> Scope {
    for (key, payload) in CONVENTIONS {
        if doc.get(key).is_some_and(|v| !v.is_null()) {
            return Scope::PerUser { key, payload };
        }
    }
    Scope::Global
}

/// Extract the slice of `doc` that belongs to `user_id`.
///
/// Pure over its inputs: never touches cache or network, never mutates the
/// document. Entries are matched by exact string equality of their `userId`
/// field, first match wins. Returns `None` when the document is per-user
/// scoped and carries nothing for this user; global documents come back
/// whole, whatever the user id.
pub fn resolve_for_user(doc: &Value, user_id: &str) -> Option<Value> {
    match classify(doc) {
        Scope::Global => Some(doc.clone()),
        Scope::PerUser { key, payload } => {
            let entries = doc.get(key)?.as_array()?;
            let entry = entries
                .iter()
                .find(|e| e.get("userId").and_then(Value::as_str) == Some(user_id))?;
            match payload {
                None => Some(entry.clone()),
                Some(field) => entry.get(field).cloned(),
            }
        }
    }
}
