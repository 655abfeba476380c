use crate::application::ports::{AuthError, TokenVerifier};
use crate::domain::AccountId;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT claims carried by broker bearer tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id (UUID)
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn new(account: AccountId, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: account.to_string(),
            exp: (now + ttl).timestamp().max(0) as usize,
            iat: now.timestamp().max(0) as usize,
        }
    }

    /// Sign these claims with HS256. Tokens are issued outside the broker;
    /// this exists for tooling and tests.
    pub fn sign(&self, secret: &str) -> Result<String, AuthError> {
        encode(
            &Header::new(Algorithm::HS256),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| AuthError::Invalid(e.to_string()))
    }
}

/// Validates HS256 bearer tokens against a shared secret
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<AccountId, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::Invalid(e.to_string()))?;

        data.claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidSubject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_valid_token_resolves_account() {
        let account = AccountId::new();
        let token = Claims::new(account, Duration::minutes(5)).sign(SECRET).unwrap();

        let verifier = JwtTokenVerifier::new(SECRET);
        assert_eq!(verifier.verify(&token), Ok(account));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = Claims::new(AccountId::new(), Duration::minutes(5))
            .sign("other-secret")
            .unwrap();

        let verifier = JwtTokenVerifier::new(SECRET);
        assert!(matches!(verifier.verify(&token), Err(AuthError::Invalid(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = Claims::new(AccountId::new(), Duration::hours(-1))
            .sign(SECRET)
            .unwrap();

        let verifier = JwtTokenVerifier::new(SECRET);
        assert!(matches!(verifier.verify(&token), Err(AuthError::Invalid(_))));
    }

    #[test]
    fn test_non_uuid_subject_is_rejected() {
        let mut claims = Claims::new(AccountId::new(), Duration::minutes(5));
        claims.sub = "my-user".to_string();
        let token = claims.sign(SECRET).unwrap();

        let verifier = JwtTokenVerifier::new(SECRET);
        assert_eq!(verifier.verify(&token), Err(AuthError::InvalidSubject));
    }
}
