use std::sync::Arc;

use kdmip_core::catalog::Catalog;
use kdmip_core::credentials::CredentialVerifier;
use kdmip_events::EventBus;

use crate::auth::gates::LoginGates;
use crate::config::ServerConfig;
use crate::uploads::{UploadSettings, UploadTracker};
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind `Arc` or is itself a shared handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Compiled-in content behind every public page.
    pub catalog: Arc<Catalog>,
    /// Upload queue handle; clones share one queue.
    pub uploads: UploadTracker,
    pub gates: Arc<LoginGates>,
    /// WebSocket connection manager (browser clients).
    pub ws_manager: Arc<WsManager>,
    pub event_bus: Arc<EventBus>,
}

impl AppState {
    /// Wire up state with a fresh event bus, WebSocket manager, and catalog.
    pub fn new(config: ServerConfig, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let event_bus = Arc::new(EventBus::default());
        let uploads = UploadTracker::new(
            Arc::clone(&event_bus),
            UploadSettings {
                tick: config.upload_tick(),
                deadline: config.upload_deadline(),
            },
        );
        let gates = LoginGates::new(verifier, config.login_delay());

        Self {
            config: Arc::new(config),
            catalog: Arc::new(Catalog::seeded()),
            uploads,
            gates: Arc::new(gates),
            ws_manager: Arc::new(WsManager::new()),
            event_bus,
        }
    }
}
