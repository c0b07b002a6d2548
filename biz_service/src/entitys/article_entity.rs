use chrono::{DateTime, Utc};
use common::Entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Blog article, public and unowned
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInfo {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl Entity for ArticleInfo {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
