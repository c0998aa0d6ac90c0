//! HS256 signed JSON web tokens.
use crate::error::Error;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;

pub type SharedTokenSigner = Arc<TokenSigner>;

/// The claims carried by a session token.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Claims {
    pub username: String,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: i64,
}

/// Issues and verifies session tokens with keys derived once from the configured secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Issue a token for `username` expiring one TTL from now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Jwt`] if the token can't be encoded.
    pub fn issue(&self, username: &str) -> Result<String, Error> {
        self.issue_at(username, OffsetDateTime::now_utc().unix_timestamp())
    }

    pub fn issue_at(&self, username: &str, now: i64) -> Result<String, Error> {
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            username: username.to_string(),
            exp: now.saturating_add(ttl),
        };
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidToken`] for every kind of failure.
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        self.decode(token).map_err(|err| {
            tracing::debug!("rejected token: {err}");
            Error::InvalidToken
        })
    }

    fn decode(&self, token: &str) -> jsonwebtoken::errors::Result<Claims> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use jsonwebtoken::errors::ErrorKind;

    fn signer(secret: &str) -> TokenSigner {
        TokenSigner::new(secret, Duration::from_secs(3600))
    }

    fn now() -> i64 {
        OffsetDateTime::now_utc().unix_timestamp()
    }

    #[test]
    fn test_issue_verify() {
        let signer = signer("secret");
        let now = now();
        let token = signer.issue_at("admin", now).unwrap();

        assert_eq!(token.split('.').count(), 3);
        assert_eq!(
            signer.verify(&token).unwrap(),
            Claims {
                username: "admin".to_string(),
                exp: now + 3600,
            }
        );
    }

    #[test]
    fn test_issue_verify_wall_clock() {
        let signer = signer("secret");
        let token = signer.issue("admin").unwrap();
        assert_eq!(signer.verify(&token).unwrap().username, "admin");
    }

    #[test]
    fn test_expired() {
        let signer = signer("secret");

        let token = signer.issue_at("admin", now() - 3000).unwrap();
        assert!(signer.verify(&token).is_ok());

        let token = signer.issue_at("admin", now() - 3605).unwrap();
        assert!(matches!(signer.verify(&token), Err(Error::InvalidToken)));
        assert!(matches!(
            signer.decode(&token).unwrap_err().kind(),
            ErrorKind::ExpiredSignature
        ));
    }

    #[test]
    fn test_wrong_secret() {
        let token = signer("secret").issue("admin").unwrap();
        assert!(matches!(
            signer("other").decode(&token).unwrap_err().kind(),
            ErrorKind::InvalidSignature
        ));
    }

    #[test]
    fn test_tampered_claims() {
        let signer = signer("secret");
        let token = signer.issue("admin").unwrap();
        let segments: Vec<&str> = token.split('.').collect();
        let forged = URL_SAFE_NO_PAD.encode(br#"{"username":"root","exp":9999999999}"#);
        let tampered = format!("{}.{forged}.{}", segments[0], segments[2]);

        assert!(matches!(
            signer.decode(&tampered).unwrap_err().kind(),
            ErrorKind::InvalidSignature
        ));
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let signer = signer("secret");
        let claims = Claims {
            username: "admin".to_string(),
            exp: now() + 3600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(matches!(
            signer.decode(&token).unwrap_err().kind(),
            ErrorKind::InvalidAlgorithm
        ));
    }

    #[test]
    fn test_alg_none_rejected() {
        let signer = signer("secret");
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let claims = URL_SAFE_NO_PAD.encode(br#"{"username":"admin","exp":9999999999}"#);
        let token = format!("{header}.{claims}.");

        assert!(matches!(signer.verify(&token), Err(Error::InvalidToken)));
    }

    #[test]
    fn test_malformed() {
        let signer = signer("secret");
        for token in ["", "abc", "a.b", "a.b.c.d", "!!.!!.!!"] {
            assert!(
                matches!(signer.verify(token), Err(Error::InvalidToken)),
                "{token:?} should be rejected"
            );
        }
    }
}
