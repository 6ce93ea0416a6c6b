mod authorize;
mod oauth_client;
mod tokens;

pub use tokens::TokenResponse;
