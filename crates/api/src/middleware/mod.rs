//! Request middleware: authentication and role gates.
//!
//! [`auth::AuthUser`] resolves the caller from a Bearer token and the
//! `users` table; the extractors in [`rbac`] wrap it to enforce roles.

pub mod auth;
pub mod rbac;
