//! Photo and video upload by public URL.

use crate::client::FacebookClient;
use crate::error::GraphResult;
use crate::types::CreatedObject;
use serde_json::json;

impl FacebookClient {
    /// Publish a photo the platform fetches from `image_url`.
    pub async fn upload_photo_by_url(
        &self,
        image_url: &str,
        caption: Option<&str>,
    ) -> GraphResult<CreatedObject> {
        let mut body = json!({"url": image_url});
        if let Some(caption) = caption {
            body["caption"] = json!(caption);
        }
        self.post(&format!("{}/photos", self.page_id()), body).await
    }

    /// Publish a video the platform fetches from `file_url`.
    pub async fn upload_video_by_url(
        &self,
        file_url: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> GraphResult<CreatedObject> {
        let mut body = json!({"file_url": file_url});
        if let Some(title) = title {
            body["title"] = json!(title);
        }
        if let Some(description) = description {
            body["description"] = json!(description);
        }
        self.post(&format!("{}/videos", self.page_id()), body).await
    }
}
