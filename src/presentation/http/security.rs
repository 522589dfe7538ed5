use poem::{Error as PoemError, Result as PoemResult, http::StatusCode};
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

use crate::application::services::identity::{Identity, IdentityVerifier};

#[derive(SecurityScheme)]
#[oai(ty = "bearer")]
pub struct BearerAuth(pub Bearer);

impl BearerAuth {
    /// Resolves the bearer token to a verified identity, once per request.
    pub async fn into_identity(self, verifier: &dyn IdentityVerifier) -> PoemResult<Identity> {
        match verifier.verify(&self.0.token).await {
            Ok(Some(identity)) => Ok(identity),
            Ok(None) => Err(PoemError::from_string(
                "invalid or expired token",
                StatusCode::UNAUTHORIZED,
            )),
            Err(err) => {
                tracing::error!("identity verification failed: {err:#}");
                Err(PoemError::from_string(
                    "identity provider unavailable",
                    StatusCode::INTERNAL_SERVER_ERROR,
                ))
            }
        }
    }
}
