use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::services::identity::{Identity, IdentityVerifier};

/// Token-to-identity map standing in for the external provider.
#[derive(Default)]
pub struct InMemoryIdentityVerifier {
    identities: Arc<RwLock<HashMap<String, Identity>>>,
}

impl InMemoryIdentityVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, token: &str, identity: Identity) {
        let mut identities = self.identities.write().await;
        identities.insert(token.to_string(), identity);
    }
}

#[async_trait]
impl IdentityVerifier for InMemoryIdentityVerifier {
    async fn verify(&self, token: &str) -> anyhow::Result<Option<Identity>> {
        let identities = self.identities.read().await;
        Ok(identities.get(token).cloned())
    }
}
