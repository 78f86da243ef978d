//! Authentication module
//!
//! Every service call carries a short-lived bearer token. The token is
//! obtained by exchanging a client's API key pair at the token endpoint and
//! reused until shortly before it expires.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, TOKEN_PATH};
pub use types::{AccessToken, ApiCredentials, EXPIRY_MARGIN_SECS};

#[cfg(test)]
mod tests;
