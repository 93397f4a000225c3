/// JWT-backed token verifier
///
/// Stands in for the hosted identity provider: tokens are HMAC-signed JWTs
/// checked against a shared secret. Anything that needs a different provider
/// implements `TokenVerifier` instead.
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use roster_core::{Result, RosterError, TokenVerifier, VerifiedIdentity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct JwtVerifier {
    secret: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // Subject (external identity)
    exp: i64,    // Expiration time
    iat: i64,    // Issued at
}

impl JwtVerifier {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Mint a token for the given subject
    ///
    /// Used by the `mint-token` CLI subcommand and by tests; the server never
    /// issues tokens on behalf of clients.
    pub fn mint(&self, subject: &str, ttl_hours: i64) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| RosterError::Verification(e.to_string()))
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| RosterError::Verification(e.to_string()))?;

        Ok(VerifiedIdentity {
            subject: token_data.claims.sub,
        })
    }
}
