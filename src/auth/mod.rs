//! Signed bearer tokens.
//!
//! Tokens identify a user by username and carry the role held at issue
//! time. The role claim is informational: the HTTP layer resolves the
//! subject against the user directory on every request.

mod token;


pub use token::{Claims, IssuedToken, TokenError, TokenService};
