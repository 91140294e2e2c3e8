//! Login gates for the user and admin modals.
//!
//! A gate waits a fixed delay, asks an injected [`CredentialVerifier`]
//! whether the pair is acceptable, and hands the outcome back to the caller. The shipped
//! verifier, [`DemoCredentials`], compares against one literal pair per
//! gate. It is a placeholder and provides no security.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roles::{ROLE_ADMIN, ROLE_USER};

/// Shown when the verifier itself fails.
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

pub const DEMO_USER_EMAIL: &str = "admin@kdmip.ongc.in";
pub const DEMO_ADMIN_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    User,
    Admin,
}

impl GateKind {
    /// Role granted on success.
    pub fn role(self) -> &'static str {
        match self {
            Self::User => ROLE_USER,
            Self::Admin => ROLE_ADMIN,
        }
    }

    /// Name of the identity field the modal asks for.
    pub fn identity_field(self) -> &'static str {
        match self {
            Self::User => "email",
            Self::Admin => "username",
        }
    }

    pub fn mismatch_message(self) -> &'static str {
        match self {
            Self::User => "Invalid credentials. Try admin@kdmip.ongc.in / admin123",
            Self::Admin => "Invalid admin credentials. Try admin / admin123",
        }
    }
}

/// Decides whether a submitted pair is acceptable for a gate.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, gate: GateKind, identity: &str, secret: &str) -> Result<bool, CoreError>;
}

/// Fixed literal pairs. Placeholder only.
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    user: (String, String),
    admin: (String, String),
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            user: (DEMO_USER_EMAIL.into(), DEMO_PASSWORD.into()),
            admin: (DEMO_ADMIN_USERNAME.into(), DEMO_PASSWORD.into()),
        }
    }
}

#[async_trait]
impl CredentialVerifier for DemoCredentials {
    async fn verify(&self, gate: GateKind, identity: &str, secret: &str) -> Result<bool, CoreError> {
        let (expected_id, expected_secret) = match gate {
            GateKind::User => &self.user,
            GateKind::Admin => &self.admin,
        };
        Ok(identity == expected_id && secret == expected_secret)
    }
}

/// Login modal state. `Idle` and `Submitting` are held by the client while
/// a request is in flight; a submission only ever resolves to one of the
/// two terminal states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum GateState {
    Idle,
    Submitting,
    Success,
    Failed(String),
}

/// Successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub subject: String,
    pub role: &'static str,
}

/// Result of one submission, owned by the caller that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    pub state: GateState,
    pub grant: Option<Grant>,
}

impl GateOutcome {
    fn success(grant: Grant) -> Self {
        Self {
            state: GateState::Success,
            grant: Some(grant),
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            state: GateState::Failed(message.to_string()),
            grant: None,
        }
    }

    /// The grant, or the failure message as `Unauthorized`.
    pub fn into_grant(self) -> Result<Grant, CoreError> {
        match (self.grant, self.state) {
            (Some(grant), _) => Ok(grant),
            (None, GateState::Failed(msg)) => Err(CoreError::Unauthorized(msg)),
            (None, _) => Err(CoreError::Unauthorized(LOGIN_FAILED.to_string())),
        }
    }
}

/// One login modal's gate. Holds no per-client state, so concurrent
/// submissions never observe each other.
pub struct CredentialGate {
    kind: GateKind,
    verifier: Arc<dyn CredentialVerifier>,
    delay: Duration,
}

impl CredentialGate {
    pub fn new(kind: GateKind, verifier: Arc<dyn CredentialVerifier>, delay: Duration) -> Self {
        Self {
            kind,
            verifier,
            delay,
        }
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Submit a pair. Blank fields are rejected before the delay.
    ///
    /// There is no retry, lockout, or attempt counting.
    pub async fn submit(&self, identity: &str, secret: &str) -> Result<GateOutcome, CoreError> {
        let identity = identity.trim();
        if identity.is_empty() || secret.is_empty() {
            return Err(CoreError::Validation(format!(
                "{} and password are required",
                self.kind.identity_field()
            )));
        }

        tokio::time::sleep(self.delay).await;

        let outcome = match self.verifier.verify(self.kind, identity, secret).await {
            Ok(true) => GateOutcome::success(Grant {
                subject: identity.to_string(),
                role: self.kind.role(),
            }),
            Ok(false) => GateOutcome::failed(self.kind.mismatch_message()),
            Err(_) => GateOutcome::failed(LOGIN_FAILED),
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    struct Broken;

    #[async_trait]
    impl CredentialVerifier for Broken {
        async fn verify(&self, _: GateKind, _: &str, _: &str) -> Result<bool, CoreError> {
            Err(CoreError::Internal("verifier offline".into()))
        }
    }

    fn gate(kind: GateKind) -> CredentialGate {
        CredentialGate::new(kind, Arc::new(DemoCredentials::default()), Duration::from_millis(1000))
    }

    #[tokio::test(start_paused = true)]
    async fn admin_pair_succeeds_after_delay() {
        let gate = gate(GateKind::Admin);
        let started = tokio::time::Instant::now();

        let outcome = gate.submit("admin", "admin123").await.expect("valid input");
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(outcome.state, GateState::Success);
        assert_eq!(outcome.into_grant().expect("demo pair").role, ROLE_ADMIN);
    }

    #[tokio::test(start_paused = true)]
    async fn user_pair_succeeds() {
        let gate = gate(GateKind::User);
        let grant = gate
            .submit("admin@kdmip.ongc.in", "admin123")
            .await
            .and_then(GateOutcome::into_grant)
            .expect("demo pair");
        assert_eq!(grant.role, ROLE_USER);
        assert_eq!(grant.subject, "admin@kdmip.ongc.in");
    }

    #[tokio::test(start_paused = true)]
    async fn pairs_do_not_cross_gates() {
        let gate = gate(GateKind::User);
        let outcome = gate.submit("admin", "admin123").await.expect("valid input");
        assert_eq!(
            outcome.state,
            GateState::Failed(GateKind::User.mismatch_message().to_string())
        );
        assert_matches!(
            outcome.into_grant(),
            Err(CoreError::Unauthorized(msg)) if msg == GateKind::User.mismatch_message()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_submissions_keep_their_own_outcome() {
        let gate = gate(GateKind::Admin);
        let (good, bad) = tokio::join!(
            gate.submit("admin", "admin123"),
            gate.submit("admin", "typo"),
        );
        assert_eq!(good.expect("valid input").state, GateState::Success);
        assert_matches!(bad.expect("valid input").state, GateState::Failed(_));

        let again = gate.submit("admin", "admin123").await.expect("valid input");
        assert_eq!(again.state, GateState::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_fields_skip_the_gate() {
        let gate = gate(GateKind::Admin);
        let started = tokio::time::Instant::now();
        assert_matches!(gate.submit("  ", "admin123").await, Err(CoreError::Validation(_)));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn verifier_error_maps_to_generic_message() {
        let gate = CredentialGate::new(GateKind::Admin, Arc::new(Broken), Duration::ZERO);
        let outcome = gate.submit("admin", "admin123").await.expect("valid input");
        assert_matches!(
            outcome.into_grant(),
            Err(CoreError::Unauthorized(msg)) if msg == LOGIN_FAILED
        );
    }
}
