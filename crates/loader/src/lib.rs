//! Resource loading and per-user resolution for the portal's JSON documents.
//!
//! The portal ships its data as a tree of JSON fixtures behind a static host.
//! [`DataLoader`] fetches those documents over HTTP, caches them for the
//! lifetime of the instance, and falls back to built-in substitute data when
//! no network is available. Several documents bundle every user's data under
//! one of a fixed set of container keys; [`resolve_for_user`] extracts the
//! slice belonging to one user id.
//!
//! UI code goes through [`PortalData`], which collapses every [`LoadError`]
//! into "data absent" so renderers only deal with empty states.

pub mod cache;
pub mod errors;
pub mod facade;
pub mod loader;
pub mod mock;
pub mod resolve;

pub use cache::ResourceCache;
pub use errors::LoadError;
pub use facade::PortalData;
pub use loader::{paths, DataLoader, DEFAULT_USER};
pub use resolve::{classify, resolve_for_user, Scope};
