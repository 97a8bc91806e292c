//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260301000001_create_users_table.sql`.

pub const ROLE_USER: &str = "user";
pub const ROLE_OWNER: &str = "owner";
pub const ROLE_ADMIN: &str = "admin";

/// All roles accepted by the admin role-change endpoint.
pub const VALID_ROLES: [&str; 3] = [ROLE_USER, ROLE_OWNER, ROLE_ADMIN];

/// Check whether `role` is one of the known role names.
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}
