use async_trait::async_trait;
use uuid::Uuid;

/// Identity confirmed by the external provider for a bearer token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Resolves a bearer token to a live identity. `Ok(None)` means the
    /// provider rejected the credential; `Err` means the provider itself
    /// failed. A rejection is terminal for the request, no retry.
    async fn verify(&self, token: &str) -> anyhow::Result<Option<Identity>>;
}
