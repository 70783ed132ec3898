//! JWT Validation
//!
//! Session tokens are issued by the identity provider and signed with
//! EdDSA (Ed25519). We only hold the public verification key.

use base64::{engine::general_purpose::STANDARD, Engine};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::error::{AuthError, AuthResult};

/// Claims read from an identity provider session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity provider user ID).
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Identity provider session ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

/// Verifies access tokens against the identity provider's public key.
///
/// Built once at startup so a malformed key fails the boot instead of every request.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("issuer", &self.validation.iss)
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}

/// Decode a base64-encoded PEM key.
fn decode_pem_key(base64_key: &str) -> AuthResult<Vec<u8>> {
    STANDARD
        .decode(base64_key.trim())
        .map_err(|_| AuthError::Internal("Invalid base64 in JWT key".to_string()))
}

impl TokenVerifier {
    /// Create a verifier.
    ///
    /// # Arguments
    /// * `public_key` - Ed25519 public key (PEM format, base64-encoded)
    /// * `issuer` - Required `iss` claim, if any
    /// * `leeway_seconds` - Allowed clock skew when checking `exp`
    pub fn new(public_key: &str, issuer: Option<&str>, leeway_seconds: u64) -> AuthResult<Self> {
        let key_bytes = decode_pem_key(public_key)?;
        let key = DecodingKey::from_ed_pem(&key_bytes)
            .map_err(|e| AuthError::Internal(format!("Invalid Ed25519 public key: {e}")))?;

        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.validate_exp = true;
        validation.leeway = leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }

        Ok(Self { key, validation })
    }

    /// Validate and decode an access token.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.key, &self.validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        if token_data.claims.sub.is_empty() {
            return Err(AuthError::InvalidToken);
        }

        Ok(token_data.claims)
    }
}
