//! HTTP front end
//!
//! A thin adapter over [`crate::SchoolRegistry`]:
//! - `POST /api/addSchool` creates a school (JSON or URL-encoded form)
//! - `GET /api/listSchools?latitude=..&longitude=..` lists schools by distance
//! - `GET /` and `GET /health` for humans and probes

pub mod http;
pub mod server;

pub use http::{create_router, AppState};
pub use server::SchoolServer;
