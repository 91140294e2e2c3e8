//! Session tokens and the login gates.
//!
//! - [`jwt`]: HS256 access-token generation and validation.
//! - [`gates`]: the user and admin [`CredentialGate`](kdmip_core::credentials::CredentialGate)s.

pub mod gates;
pub mod jwt;
