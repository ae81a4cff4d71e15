pub mod claims;
pub mod token_store;

pub use claims::{decode_claims, TokenClaims};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
