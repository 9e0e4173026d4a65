//! Messaging — send text and media, forward, edit, delete.

use crate::client::TelegramClient;
use crate::error::TelegramResult;
use crate::types::*;
use serde_json::json;

impl TelegramClient {
    /// Send a text message.
    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: &str,
        params: &SendMessageParams,
    ) -> TelegramResult<TgMessage> {
        let chat_id: ChatId = chat_id.into();
        let mut body = json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(ref pm) = params.parse_mode {
            body["parse_mode"] = json!(pm);
        }
        if params.disable_web_page_preview {
            body["disable_web_page_preview"] = json!(true);
        }
        if params.disable_notification {
            body["disable_notification"] = json!(true);
        }
        if let Some(mid) = params.reply_to_message_id {
            body["reply_to_message_id"] = json!(mid);
        }
        if let Some(ref rm) = params.reply_markup {
            body["reply_markup"] = serde_json::to_value(rm)?;
        }
        self.call("sendMessage", &body).await
    }

    /// Send a photo by URL or `file_id`.
    pub async fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: &str,
        params: &SendMediaParams,
    ) -> TelegramResult<TgMessage> {
        let body = media_body(chat_id.into(), "photo", photo, params)?;
        self.call("sendPhoto", &body).await
    }

    /// Send a video by URL or `file_id`.
    pub async fn send_video(
        &self,
        chat_id: impl Into<ChatId>,
        video: &str,
        params: &SendMediaParams,
    ) -> TelegramResult<TgMessage> {
        let body = media_body(chat_id.into(), "video", video, params)?;
        self.call("sendVideo", &body).await
    }

    /// Send a document by URL or `file_id`.
    pub async fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: &str,
        params: &SendMediaParams,
    ) -> TelegramResult<TgMessage> {
        let body = media_body(chat_id.into(), "document", document, params)?;
        self.call("sendDocument", &body).await
    }

    /// Send an album of photos/videos as one media group.
    pub async fn send_media_group(
        &self,
        chat_id: impl Into<ChatId>,
        media: &[InputMedia],
    ) -> TelegramResult<Vec<TgMessage>> {
        let chat_id: ChatId = chat_id.into();
        let body = json!({
            "chat_id": chat_id,
            "media": media,
        });
        self.call("sendMediaGroup", &body).await
    }

    /// Forward a message from one chat to another.
    pub async fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> TelegramResult<TgMessage> {
        let chat_id: ChatId = chat_id.into();
        let from_chat_id: ChatId = from_chat_id.into();
        let body = json!({
            "chat_id": chat_id,
            "from_chat_id": from_chat_id,
            "message_id": message_id,
        });
        self.call("forwardMessage", &body).await
    }

    /// Edit the text of a previously sent message.
    pub async fn edit_message_text(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        text: &str,
    ) -> TelegramResult<TgMessage> {
        let chat_id: ChatId = chat_id.into();
        let body = json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": text,
        });
        self.call("editMessageText", &body).await
    }

    /// Delete a message.
    pub async fn delete_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> TelegramResult<bool> {
        let chat_id: ChatId = chat_id.into();
        let body = json!({
            "chat_id": chat_id,
            "message_id": message_id,
        });
        self.call("deleteMessage", &body).await
    }
}

/// Build the common body for photo / video / document sends.
fn media_body(
    chat_id: ChatId,
    field: &str,
    media: &str,
    params: &SendMediaParams,
) -> Result<serde_json::Value, serde_json::Error> {
    let mut body = json!({
        "chat_id": chat_id,
        field: media,
    });
    if let Some(ref c) = params.caption {
        body["caption"] = json!(c);
    }
    if let Some(ref pm) = params.parse_mode {
        body["parse_mode"] = json!(pm);
    }
    if params.disable_notification {
        body["disable_notification"] = json!(true);
    }
    if let Some(mid) = params.reply_to_message_id {
        body["reply_to_message_id"] = json!(mid);
    }
    if let Some(ref rm) = params.reply_markup {
        body["reply_markup"] = serde_json::to_value(rm)?;
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_body_includes_optionals_only_when_set() {
        let params = SendMediaParams {
            caption: Some("hello".into()),
            ..Default::default()
        };
        let body = media_body(ChatId::Int(5), "photo", "https://x/p.jpg", &params).unwrap();
        assert_eq!(body["chat_id"], 5);
        assert_eq!(body["photo"], "https://x/p.jpg");
        assert_eq!(body["caption"], "hello");
        assert!(body.get("parse_mode").is_none());
        assert!(body.get("reply_to_message_id").is_none());
    }

    #[test]
    fn chat_id_serializes_untagged() {
        assert_eq!(serde_json::to_value(ChatId::Int(42)).unwrap(), 42);
        assert_eq!(
            serde_json::to_value(ChatId::from("@channel")).unwrap(),
            "@channel"
        );
    }
}
