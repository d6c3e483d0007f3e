use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use super::{Claims, TokenBundle};
use crate::{config::AuthConfig, error::AppError};

pub const TOKEN_TYPE: &str = "bearer";
const INVALID_TOKEN_MESSAGE: &str = "Could not validate credentials";

#[derive(Clone)]
pub struct JwtKeys {
    pub enc: EncodingKey,
    pub dec: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            enc: EncodingKey::from_secret(secret),
            dec: DecodingKey::from_secret(secret),
        }
    }
}

pub fn now_unix() -> usize {
    chrono::Utc::now().timestamp().max(0) as usize
}

pub fn encode_token(keys: &JwtKeys, claims: &Claims) -> Result<String, AppError> {
    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".into());

    encode(&header, claims, &keys.enc)
        .map_err(|err| AppError::internal_with_source("Token encoding failed", err))
}

pub fn make_access_claims(username: &str, ttl_secs: u64) -> Claims {
    let iat = now_unix();
    Claims {
        sub: username.to_string(),
        iat,
        exp: iat + ttl_secs as usize,
    }
}

/// Issues and checks stateless HS256 bearer tokens whose subject is a username.
///
/// There is no revocation list: any correctly signed, unexpired token is
/// accepted until it expires.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
    ttl_secs: u64,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            keys: JwtKeys::from_secret(secret),
            ttl_secs,
        }
    }

    pub fn from_config(cfg: &AuthConfig) -> Self {
        Self::new(cfg.jwt_secret.as_bytes(), cfg.access_token_ttl_secs)
    }

    pub fn issue(&self, username: &str) -> Result<TokenBundle, AppError> {
        let claims = make_access_claims(username, self.ttl_secs);
        let access_token = encode_token(&self.keys, &claims)?;
        Ok(TokenBundle {
            access_token,
            token_type: TOKEN_TYPE,
            expires_in: self.ttl_secs,
        })
    }

    /// Returns the token's subject once signature and expiry check out.
    pub fn resolve(&self, token: &str) -> Result<String, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(token, &self.keys.dec, &validation).map_err(|err| {
            tracing::debug!(error = %err, "rejected bearer token");
            AppError::unauthorized(INVALID_TOKEN_MESSAGE)
        })?;

        let username = data.claims.sub;
        if username.trim().is_empty() {
            return Err(AppError::unauthorized(INVALID_TOKEN_MESSAGE));
        }
        Ok(username)
    }
}
