/// Session establishment and teardown
///
/// A session is nothing more than the `session` cookie being present on the
/// client: there is no server-side session table, no expiry tracking, and no
/// revocation list. Establishing a session means verifying an externally
/// issued bearer token and echoing it back as the cookie value.
use crate::error::{Result, RosterError};
use async_trait::async_trait;
use std::sync::Arc;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

const BEARER_PREFIX: &str = "Bearer ";

/// Identity extracted from a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Subject claim of the verified credential
    pub subject: String,
}

/// External token verification collaborator
///
/// The concrete identity provider sits behind this seam so it can be swapped
/// for a fake in tests. Implementations report failure through
/// `RosterError::Verification` carrying their own message.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Check an opaque token and return the identity it proves
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity>;
}

/// A freshly established session, ready to be attached as a cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTicket {
    value: String,
}

impl SessionTicket {
    /// The session marker value (equal to the verified token)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// `Set-Cookie` header value establishing the session
    pub fn set_cookie(&self) -> String {
        format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; Secure", self.value)
    }
}

/// Instruction to drop the session cookie on the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedSession;

impl ClearedSession {
    /// `Set-Cookie` header value overwriting the cookie with an empty value
    /// and an expiry at the epoch
    pub fn set_cookie(&self) -> String {
        format!("{SESSION_COOKIE}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; Secure")
    }
}

/// Exchanges bearer tokens for session markers
pub struct SessionManager {
    verifier: Arc<dyn TokenVerifier>,
}

impl SessionManager {
    /// Build a manager around the given verifier
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Verify the `Authorization` header and mint a session ticket
    ///
    /// The header must be present and carry the literal `"Bearer "` prefix
    /// (case-sensitive, single space); anything else is `Unauthorized`. A
    /// verifier rejection surfaces as `Verification` with the verifier's
    /// message. On success the ticket value is the raw token.
    pub async fn establish(&self, auth_header: Option<&str>) -> Result<SessionTicket> {
        let header = auth_header.ok_or(RosterError::Unauthorized)?;
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(RosterError::Unauthorized)?;

        self.verifier.verify(token).await?;

        Ok(SessionTicket {
            value: token.to_string(),
        })
    }

    /// Tear down the session unconditionally
    ///
    /// Requires no token and performs no verification.
    pub fn clear(&self) -> ClearedSession {
        ClearedSession
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptAll;

    #[async_trait]
    impl TokenVerifier for AcceptAll {
        async fn verify(&self, token: &str) -> Result<VerifiedIdentity> {
            Ok(VerifiedIdentity {
                subject: token.to_string(),
            })
        }
    }

    struct RejectAll;

    #[async_trait]
    impl TokenVerifier for RejectAll {
        async fn verify(&self, _token: &str) -> Result<VerifiedIdentity> {
            Err(RosterError::Verification("token expired".to_string()))
        }
    }

    fn manager(verifier: impl TokenVerifier + 'static) -> SessionManager {
        SessionManager::new(Arc::new(verifier))
    }

    #[tokio::test]
    async fn establish_returns_ticket_with_raw_token_value() {
        let ticket = manager(AcceptAll)
            .establish(Some("Bearer TOKEN123"))
            .await
            .unwrap();
        assert_eq!(ticket.value(), "TOKEN123");
        assert_eq!(
            ticket.set_cookie(),
            "session=TOKEN123; Path=/; HttpOnly; Secure"
        );
    }

    #[tokio::test]
    async fn establish_rejects_missing_header() {
        let err = manager(AcceptAll).establish(None).await.unwrap_err();
        assert!(matches!(err, RosterError::Unauthorized));
    }

    #[tokio::test]
    async fn establish_rejects_missing_prefix() {
        let m = manager(AcceptAll);
        assert!(matches!(
            m.establish(Some("TOKEN123")).await.unwrap_err(),
            RosterError::Unauthorized
        ));
        assert!(matches!(
            m.establish(Some("")).await.unwrap_err(),
            RosterError::Unauthorized
        ));
        // Prefix match is case-sensitive
        assert!(matches!(
            m.establish(Some("bearer TOKEN123")).await.unwrap_err(),
            RosterError::Unauthorized
        ));
    }

    #[tokio::test]
    async fn establish_surfaces_verifier_message() {
        let err = manager(RejectAll)
            .establish(Some("Bearer whatever"))
            .await
            .unwrap_err();
        match err {
            RosterError::Verification(msg) => assert_eq!(msg, "token expired"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn clear_always_succeeds_with_epoch_expiry() {
        let cleared = manager(RejectAll).clear();
        assert_eq!(
            cleared.set_cookie(),
            "session=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; Secure"
        );
    }
}
