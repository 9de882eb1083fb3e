//! Authentication module
//!
//! Validates HS256 access tokens and exposes the caller as [`AuthUser`].
//! Tokens are issued by the account service; this crate only mints them in tests.

mod jwt;
mod middleware;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
