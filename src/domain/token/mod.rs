//! Token module - credential material, claims, and the issuer.

mod claims;
mod errors;
mod issuer;
mod pair;

pub use claims::{
    AccessClaims, RefreshTokenPayload, AUDIENCE_ACCESS, AUDIENCE_REFRESH, REFRESH_TOKEN_TYPE,
};
pub use errors::TokenError;
pub use issuer::{TokenIssuer, DEFAULT_ACCESS_TTL, DEFAULT_REFRESH_TTL};
pub use pair::{AccessToken, RefreshToken, TokenPair};
