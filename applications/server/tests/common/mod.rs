/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::Router;
use roster_core::{
    MemoryStore, Result, RosterError, SessionManager, TokenVerifier, UserRepository,
    VerifiedIdentity,
};
use roster_server::{api, state::AppState};
use std::sync::Arc;

/// Verifier that accepts any token, echoing it back as the subject
pub struct AcceptAllVerifier;

#[async_trait]
impl TokenVerifier for AcceptAllVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity> {
        Ok(VerifiedIdentity {
            subject: token.to_string(),
        })
    }
}

/// Verifier that rejects every token with a fixed message
pub struct RejectAllVerifier;

#[async_trait]
impl TokenVerifier for RejectAllVerifier {
    async fn verify(&self, _token: &str) -> Result<VerifiedIdentity> {
        Err(RosterError::Verification(
            "Firebase ID token has expired".to_string(),
        ))
    }
}

/// Build a test app over a seeded store and the given verifier
pub fn create_test_app(verifier: impl TokenVerifier + 'static) -> Router {
    create_test_app_with_store(Arc::new(MemoryStore::seeded()), verifier)
}

/// Build a test app over an explicit store
pub fn create_test_app_with_store(
    users: Arc<dyn UserRepository>,
    verifier: impl TokenVerifier + 'static,
) -> Router {
    let sessions = Arc::new(SessionManager::new(Arc::new(verifier)));
    api::router(AppState::new(users, sessions))
}
