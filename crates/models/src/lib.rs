//! Typed views over the portal's JSON documents.
//!
//! The loader works on raw `serde_json::Value` trees; these structs cover the
//! documents whose schema is fixed enough to deserialize. Every struct
//! tolerates unknown fields because the fixtures evolve ahead of the code.

pub mod notification;
pub mod ticket;
pub mod user;

pub use notification::{Notification, NotificationTag};
pub use ticket::SupportTicket;
pub use user::{Level, Progress, UserProfile};
