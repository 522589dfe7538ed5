use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::services::identity::{Identity, IdentityVerifier};

/// Verifies bearer tokens against the managed identity provider's user
/// endpoint. The provider rejecting the token is an expected outcome;
/// anything else non-successful is a provider failure.
pub struct HttpIdentityVerifier {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HttpIdentityVerifier {
    pub fn new(base_url: String, api_key: String) -> Arc<dyn IdentityVerifier> {
        Arc::new(Self {
            http: Client::builder()
                .user_agent("bookmarks-service/identity")
                .build()
                .expect("failed to build identity client"),
            base_url,
            api_key,
        }) as Arc<dyn IdentityVerifier>
    }

    fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, token: &str) -> anyhow::Result<Option<Identity>> {
        let response = self
            .http
            .get(self.user_url())
            .bearer_auth(token)
            .header("apikey", &self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Ok(None),
            status if !status.is_success() => {
                anyhow::bail!("identity provider returned {}", status);
            }
            _ => {}
        }

        let payload: ProviderUser = response.json().await?;
        let email = payload
            .email
            .filter(|email| !email.is_empty())
            .ok_or_else(|| anyhow::anyhow!("identity provider returned a user without an email"))?;

        Ok(Some(Identity {
            id: payload.id,
            email,
            display_name: payload.user_metadata.full_name,
            avatar_url: payload.user_metadata.avatar_url,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: Uuid,
    email: Option<String>,
    #[serde(default)]
    user_metadata: ProviderUserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderUserMetadata {
    #[serde(rename = "full_name")]
    full_name: Option<String>,
    #[serde(rename = "avatar_url")]
    avatar_url: Option<String>,
}
