//! JWT signing and verification

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::{DomainError, DomainResult, TokenError};

/// Signs and verifies self-contained, claim-bearing tokens
///
/// Verification distinguishes three failure classes: a signature mismatch,
/// a structurally invalid token, and an expired one. Expiry is checked with
/// zero leeway so that codec-level expiry is exact and independent of the
/// store's own `expires_at` hygiene column.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    /// Same checks as `validation` but ignores the `exp` claim
    validation_allowing_expired: Validation,
}

impl TokenCodec {
    /// Creates a new codec from a signing secret (HS256)
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.leeway = 0;

        let mut validation_allowing_expired = validation.clone();
        validation_allowing_expired.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            header: Header::new(Algorithm::HS256),
            validation,
            validation_allowing_expired,
        }
    }

    /// Signs a claim set into a compact JWT
    ///
    /// Never fails for well-formed claims; serialization problems surface
    /// as `TokenError::GenerationFailed`.
    pub fn encode(&self, claims: &Claims) -> DomainResult<String> {
        encode(&self.header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies a presented token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::Expired)` - The embedded expiry has passed
    /// * `Err(TokenError::InvalidSignature)` - Signature mismatch
    /// * `Err(TokenError::Malformed)` - Structurally invalid token
    pub fn decode(&self, token: &str) -> DomainResult<Claims> {
        self.decode_with(token, &self.validation)
    }

    /// Verifies a presented token but ignores its expiry
    ///
    /// Used by logout, where the device id of an expired-but-authentic
    /// token is still actionable.
    pub fn decode_allowing_expired(&self, token: &str) -> DomainResult<Claims> {
        self.decode_with(token, &self.validation_allowing_expired)
    }

    fn decode_with(&self, token: &str, validation: &Validation) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, validation).map_err(|e| {
                let token_error = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::Malformed,
                };
                DomainError::Token(token_error)
            })?;

        Ok(token_data.claims)
    }
}
