//! Login and bearer token authentication.
//!
//! Users log in against a static [`UserList`] and receive a signed token from a
//! [`TokenSigner`]. Tokens are stateless: nothing is stored server side, so a token stays
//! valid until it expires.

pub mod credentials;
pub mod token;

pub use credentials::UserList;
pub use token::{Claims, SharedTokenSigner, TokenSigner};
