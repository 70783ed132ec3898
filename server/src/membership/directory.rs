//! Identity Provider Directory
//!
//! Reads and updates the `public_metadata.tier` attribute stored on each user
//! by the external identity provider.

use std::future::Future;
use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::json;
use showcase_common::Tier;
use thiserror::Error;
use tracing::debug;

/// Identity provider directory failure.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// User ID is unknown to the identity provider.
    #[error("User not found: {0}")]
    NotFound(String),

    /// Identity provider answered with an unexpected status.
    #[error("Identity provider returned HTTP {0}")]
    Status(u16),

    /// Transport or decoding failure.
    #[error("Identity provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL cannot carry path segments.
    #[error("Invalid identity provider URL: {0}")]
    InvalidUrl(String),
}

/// A user's profile as seen by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub id: String,
    pub first_name: Option<String>,
    /// Normalized tier; missing or unknown metadata values read as free.
    pub tier: Tier,
}

impl MemberProfile {
    /// Name to greet the member with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("User")
    }
}

/// Source of truth for member tiers.
pub trait MembershipDirectory: Send + Sync {
    /// Fetch a member's profile.
    fn fetch_profile(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<MemberProfile, DirectoryError>> + Send;

    /// Overwrite a member's tier.
    fn set_tier(
        &self,
        user_id: &str,
        tier: Tier,
    ) -> impl Future<Output = Result<(), DirectoryError>> + Send;
}

/// Raw user record returned by the identity provider.
#[derive(Debug, Deserialize)]
struct UserRecord {
    id: String,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    public_metadata: serde_json::Value,
}

impl From<UserRecord> for MemberProfile {
    fn from(record: UserRecord) -> Self {
        let claim = record
            .public_metadata
            .get("tier")
            .and_then(serde_json::Value::as_str);
        let tier = Tier::from_claim(claim);
        if claim.is_some_and(|value| value != tier.as_str()) {
            debug!(user_id = %record.id, claim = ?claim, tier = %tier, "Normalized tier claim");
        }

        Self {
            id: record.id,
            first_name: record.first_name,
            tier,
        }
    }
}

/// HTTP client for the identity provider's user API.
///
/// - `GET {base}/users/{id}` returns the user record
/// - `PATCH {base}/users/{id}/metadata` merges `public_metadata`
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpDirectory {
    /// Create a directory client with a per-request timeout.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, DirectoryError> {
        let base_url =
            Url::parse(base_url).map_err(|e| DirectoryError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// `{base}/users/{user_id}[/{suffix}]` with each segment percent-encoded.
    fn user_url(&self, user_id: &str, suffix: Option<&str>) -> Result<Url, DirectoryError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| DirectoryError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("users").push(user_id);
            if let Some(suffix) = suffix {
                segments.push(suffix);
            }
        }
        Ok(url)
    }
}

fn check_status(user_id: &str, status: StatusCode) -> Result<(), DirectoryError> {
    if status == StatusCode::NOT_FOUND {
        return Err(DirectoryError::NotFound(user_id.to_string()));
    }
    if !status.is_success() {
        return Err(DirectoryError::Status(status.as_u16()));
    }
    Ok(())
}

impl MembershipDirectory for HttpDirectory {
    async fn fetch_profile(&self, user_id: &str) -> Result<MemberProfile, DirectoryError> {
        let url = self.user_url(user_id, None)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        check_status(user_id, response.status())?;

        let record: UserRecord = response.json().await?;
        Ok(record.into())
    }

    async fn set_tier(&self, user_id: &str, tier: Tier) -> Result<(), DirectoryError> {
        let url = self.user_url(user_id, Some("metadata"))?;

        let response = self
            .client
            .patch(url)
            .bearer_auth(&self.api_key)
            .json(&json!({ "public_metadata": { "tier": tier } }))
            .send()
            .await?;
        check_status(user_id, response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(base: &str) -> HttpDirectory {
        HttpDirectory::new(base, "sk_test", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_user_url_appends_segments() {
        let dir = directory("https://id.example.com/v1");
        assert_eq!(
            dir.user_url("user_123", None).unwrap().as_str(),
            "https://id.example.com/v1/users/user_123"
        );
        assert_eq!(
            dir.user_url("user_123", Some("metadata")).unwrap().as_str(),
            "https://id.example.com/v1/users/user_123/metadata"
        );
    }

    #[test]
    fn test_user_url_handles_trailing_slash_and_escapes_ids() {
        let dir = directory("https://id.example.com/v1/");
        assert_eq!(
            dir.user_url("a/b c", None).unwrap().as_str(),
            "https://id.example.com/v1/users/a%2Fb%20c"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            HttpDirectory::new("not a url", "key", Duration::from_secs(1)),
            Err(DirectoryError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpDirectory::new("mailto:ops@example.com", "key", Duration::from_secs(1)),
            Err(DirectoryError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_user_record_tier_normalization() {
        let record: UserRecord = serde_json::from_value(json!({
            "id": "user_1",
            "first_name": "Ada",
            "public_metadata": { "tier": "gold" }
        }))
        .unwrap();
        let profile = MemberProfile::from(record);
        assert_eq!(profile.tier, Tier::Gold);
        assert_eq!(profile.display_name(), "Ada");

        for metadata in [json!({}), json!({ "tier": "diamond" }), json!({ "tier": 3 }), json!(null)] {
            let record: UserRecord = serde_json::from_value(json!({
                "id": "user_2",
                "public_metadata": metadata
            }))
            .unwrap();
            assert_eq!(MemberProfile::from(record).tier, Tier::Free);
        }
    }

    #[test]
    fn test_display_name_falls_back() {
        let profile = MemberProfile {
            id: "user_1".into(),
            first_name: Some("  ".into()),
            tier: Tier::Free,
        };
        assert_eq!(profile.display_name(), "User");
    }
}
