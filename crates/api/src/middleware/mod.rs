//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`]: the session behind a Bearer token.
//! - [`rbac::RequireAdmin`]: requires the `admin` role.

pub mod auth;
pub mod rbac;
