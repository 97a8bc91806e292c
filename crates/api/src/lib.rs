//! Rent-A-Ride HTTP API.
//!
//! Exposes the server building blocks (config, state, routes, error
//! handling) as a library so integration tests can assemble the same
//! application the binary runs.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
