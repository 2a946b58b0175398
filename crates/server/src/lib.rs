//! Static fixture host for the portal.
//!
//! Serves the JSON fixture tree under `/data` plus a `/health` probe. The
//! loader crate points its base URL at `/data/`; in production any static
//! web host does the same job.

pub mod routes;
pub mod startup;

pub use routes::build_router;
pub use startup::run;
