//! Identity token verification.
//!
//! The frontend signs users in with an external identity provider and
//! sends us the resulting token. We verify it with a shared HS256
//! secret and treat the `sub` claim as the user id.

pub mod identity;
