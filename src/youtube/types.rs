use serde::Deserialize;

use super::PlaylistItemRaw;

// Wire shapes for the two YouTube Data API v3 list calls. Only the snippet
// fields the digest reads are modelled.

#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default, rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Playlist {
    pub snippet: PlaylistSnippet,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlaylistSnippet {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItem {
    #[serde(default)]
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItemSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub resource_id: ResourceId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResourceId {
    #[serde(default)]
    pub video_id: String,
}

impl From<PlaylistItem> for PlaylistItemRaw {
    fn from(item: PlaylistItem) -> Self {
        let s = item.snippet;
        PlaylistItemRaw {
            title: s.title,
            description: s.description,
            published_at: s.published_at,
            video_id: s.resource_id.video_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}
