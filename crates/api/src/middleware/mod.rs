//! Authentication and authorization middleware.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated member from a JWT Bearer token.
//! - [`guards`] -- Explicit per-resource authorization checks (board member,
//!   board admin, company affiliate) called at the top of handler bodies.

pub mod auth;
pub mod guards;
