use std::sync::Arc;

use chrono::Utc;

use crate::{
    application::services::identity::Identity,
    domain::{models::User, repositories::UserRepository},
};

pub struct UserRegistrar {
    users: Arc<dyn UserRepository>,
}

impl UserRegistrar {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Makes sure a local user row exists for the verified identity,
    /// keyed by email. Existing rows are left untouched even when the
    /// provider reports changed profile metadata.
    pub async fn ensure_user(&self, identity: &Identity) -> anyhow::Result<()> {
        if self.users.find_by_email(&identity.email).await?.is_some() {
            return Ok(());
        }

        let user = User {
            id: identity.id,
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            avatar_url: identity.avatar_url.clone(),
            created_at: Utc::now(),
        };
        self.users.insert_if_absent(&user).await
    }
}
