//! HTTP API: routes, auth, and the error boundary.

pub mod auth;
pub mod error;
pub mod routes;
pub mod types;

pub use routes::serve;
