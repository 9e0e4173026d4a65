//! Chat management — info, members, bans, invite links.

use crate::client::TelegramClient;
use crate::error::TelegramResult;
use crate::types::*;
use serde_json::json;

impl TelegramClient {
    /// Get information about a chat.
    pub async fn get_chat(&self, chat_id: impl Into<ChatId>) -> TelegramResult<TgChat> {
        let chat_id: ChatId = chat_id.into();
        self.call("getChat", &json!({"chat_id": chat_id})).await
    }

    /// Get the number of members in a chat.
    pub async fn get_chat_member_count(&self, chat_id: impl Into<ChatId>) -> TelegramResult<i64> {
        let chat_id: ChatId = chat_id.into();
        self.call("getChatMemberCount", &json!({"chat_id": chat_id}))
            .await
    }

    /// Get information about one member of a chat.
    pub async fn get_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> TelegramResult<ChatMember> {
        let chat_id: ChatId = chat_id.into();
        self.call(
            "getChatMember",
            &json!({"chat_id": chat_id, "user_id": user_id}),
        )
        .await
    }

    /// Ban a member. `until_date` is a Unix timestamp; `None` bans forever.
    pub async fn ban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        until_date: Option<i64>,
    ) -> TelegramResult<bool> {
        let chat_id: ChatId = chat_id.into();
        let mut body = json!({"chat_id": chat_id, "user_id": user_id});
        if let Some(until) = until_date {
            body["until_date"] = json!(until);
        }
        self.call("banChatMember", &body).await
    }

    /// Lift a ban. `only_if_banned` avoids kicking current members.
    pub async fn unban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        only_if_banned: bool,
    ) -> TelegramResult<bool> {
        let chat_id: ChatId = chat_id.into();
        self.call(
            "unbanChatMember",
            &json!({
                "chat_id": chat_id,
                "user_id": user_id,
                "only_if_banned": only_if_banned,
            }),
        )
        .await
    }

    /// Create an additional invite link for a chat.
    pub async fn create_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
        name: Option<&str>,
        expire_date: Option<i64>,
        member_limit: Option<i32>,
    ) -> TelegramResult<ChatInviteLink> {
        let chat_id: ChatId = chat_id.into();
        let mut body = json!({"chat_id": chat_id});
        if let Some(name) = name {
            body["name"] = json!(name);
        }
        if let Some(expire) = expire_date {
            body["expire_date"] = json!(expire);
        }
        if let Some(limit) = member_limit {
            body["member_limit"] = json!(limit);
        }
        self.call("createChatInviteLink", &body).await
    }
}
