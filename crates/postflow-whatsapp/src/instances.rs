//! Instance lifecycle — create, state, QR pairing, restart, logout, delete.

use crate::client::EvolutionClient;
use crate::error::EvolutionResult;
use crate::types::{ConnectionState, QrCode};
use serde_json::json;

impl EvolutionClient {
    /// Create the instance on the server. The returned payload includes the
    /// instance record and, when `qrcode` is requested, an initial QR.
    pub async fn create_instance(&self) -> EvolutionResult<serde_json::Value> {
        let body = json!({
            "instanceName": self.instance(),
            "qrcode": true,
            "integration": "WHATSAPP-BAILEYS",
        });
        let url = self.server_url("instance/create");
        self.post(&url, &body).await
    }

    /// List all instances on the server.
    pub async fn fetch_instances(&self) -> EvolutionResult<Vec<serde_json::Value>> {
        let url = self.server_url("instance/fetchInstances");
        self.get(&url).await
    }

    /// Current connection state (`open`, `connecting`, `close`).
    pub async fn connection_state(&self) -> EvolutionResult<ConnectionState> {
        let url = self.instance_url("instance/connectionState");
        self.get(&url).await
    }

    /// Fetch the pairing QR code for the instance.
    pub async fn connect(&self) -> EvolutionResult<QrCode> {
        let url = self.instance_url("instance/connect");
        self.get(&url).await
    }

    /// Restart the underlying WhatsApp session.
    pub async fn restart_instance(&self) -> EvolutionResult<serde_json::Value> {
        let url = self.instance_url("instance/restart");
        self.post(&url, &json!({})).await
    }

    /// Log the WhatsApp session out but keep the instance.
    pub async fn logout(&self) -> EvolutionResult<serde_json::Value> {
        let url = self.instance_url("instance/logout");
        self.delete(&url).await
    }

    /// Delete the instance from the server.
    pub async fn delete_instance(&self) -> EvolutionResult<serde_json::Value> {
        let url = self.instance_url("instance/delete");
        self.delete(&url).await
    }
}
