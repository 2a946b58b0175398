use serde::{Deserialize, Serialize};

/// One entry of `support-tickets.json` -> `tickets[]`.
///
/// `response` holds the support team's reply; the UI treats the literal
/// placeholders "Pending Review", "Under Investigation" and "-" as no reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub ticket_id: String,
    pub subject: String,
    pub status: String,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

impl SupportTicket {
    const NO_REPLY: [&'static str; 3] = ["Pending Review", "Under Investigation", "-"];

    /// Whether the support team has actually replied.
    pub fn has_response(&self) -> bool {
        match self.response.as_deref().map(str::trim) {
            Some(r) => !r.is_empty() && !Self::NO_REPLY.contains(&r),
            None => false,
        }
    }
}
