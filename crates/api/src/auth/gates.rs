use std::sync::Arc;
use std::time::Duration;

use kdmip_core::credentials::{CredentialGate, CredentialVerifier, GateKind};

/// The two login modals: one gate each, sharing a verifier.
pub struct LoginGates {
    pub user: CredentialGate,
    pub admin: CredentialGate,
}

impl LoginGates {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, delay: Duration) -> Self {
        Self {
            user: CredentialGate::new(GateKind::User, Arc::clone(&verifier), delay),
            admin: CredentialGate::new(GateKind::Admin, verifier, delay),
        }
    }
}
