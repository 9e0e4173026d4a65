//! Contacts, groups, message history, number registration checks.

use crate::client::EvolutionClient;
use crate::error::EvolutionResult;
use crate::types::{Contact, Group, NumberCheck};
use serde_json::json;

impl EvolutionClient {
    /// Fetch all contacts known to the instance.
    pub async fn fetch_contacts(&self) -> EvolutionResult<Vec<Contact>> {
        let url = self.instance_url("chat/findContacts");
        self.post(&url, &json!({"where": {}})).await
    }

    /// Fetch all groups the instance participates in.
    pub async fn fetch_groups(&self, with_participants: bool) -> EvolutionResult<Vec<Group>> {
        let url = format!(
            "{}?getParticipants={}",
            self.instance_url("group/fetchAllGroups"),
            with_participants
        );
        self.get(&url).await
    }

    /// Fetch message history for one chat, newest first.
    pub async fn find_messages(
        &self,
        remote_jid: &str,
        limit: Option<u32>,
    ) -> EvolutionResult<Vec<serde_json::Value>> {
        let mut body = json!({
            "where": {"key": {"remoteJid": remote_jid}},
        });
        if let Some(limit) = limit {
            body["limit"] = json!(limit);
        }
        let url = self.instance_url("chat/findMessages");
        self.post(&url, &body).await
    }

    /// Check which of the given numbers are registered on WhatsApp.
    pub async fn check_numbers(&self, numbers: &[&str]) -> EvolutionResult<Vec<NumberCheck>> {
        let url = self.instance_url("chat/whatsappNumbers");
        self.post(&url, &json!({"numbers": numbers})).await
    }
}
