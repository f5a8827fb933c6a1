pub mod claims;
pub mod error;
pub mod password_hasher;
pub mod token_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password_hasher::PasswordHasher;
pub use token_issuer::{RefreshedAccess, TokenIssuer, TokenPair, ACCESS_TOKEN_TTL_SECS};
