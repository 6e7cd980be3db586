//! Signsolve HTTP gateway.
//!
//! Exposes the solver over a single JSON endpoint plus a health probe, with
//! permissive CORS on every response.

pub mod health_api;
pub mod server;
pub mod solver_api;

pub use server::{router, start_server, GatewayState};
