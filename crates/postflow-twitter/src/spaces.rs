//! Spaces lookup and search.

use crate::client::TwitterClient;
use crate::error::TwitterResult;
use crate::types::{Page, Single, Space};

const SPACE_FIELDS: &str = "id,state,title,host_ids";

impl TwitterClient {
    /// Look up a Space by id.
    pub async fn get_space(&self, space_id: &str) -> TwitterResult<Space> {
        let space: Single<Space> = self
            .get(
                &format!("/2/spaces/{space_id}"),
                &[("space.fields", SPACE_FIELDS)],
            )
            .await?;
        Ok(space.data)
    }

    /// Search live or scheduled Spaces by title keyword.
    pub async fn search_spaces(&self, query: &str, state: &str) -> TwitterResult<Page<Space>> {
        self.get(
            "/2/spaces/search",
            &[
                ("query", query),
                ("state", state),
                ("space.fields", SPACE_FIELDS),
            ],
        )
        .await
    }
}
