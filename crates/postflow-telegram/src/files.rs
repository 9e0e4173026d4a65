//! File metadata lookup and download-URL resolution.

use crate::client::TelegramClient;
use crate::error::{TelegramError, TelegramResult};
use crate::types::TgFile;
use serde_json::json;

impl TelegramClient {
    /// Look up file metadata by `file_id`.
    pub async fn get_file(&self, file_id: &str) -> TelegramResult<TgFile> {
        self.call("getFile", &json!({"file_id": file_id})).await
    }

    /// Resolve a `file_id` to a direct download URL.
    pub async fn resolve_file_url(&self, file_id: &str) -> TelegramResult<String> {
        let file = self.get_file(file_id).await?;
        let path = file
            .file_path
            .ok_or_else(|| TelegramError::Api(format!("getFile: no file_path for {file_id}")))?;
        Ok(self.file_download_url(&path))
    }
}
