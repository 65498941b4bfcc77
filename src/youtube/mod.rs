use async_trait::async_trait;

use crate::error::DigestError;

pub mod client;
#[cfg(test)]
pub mod mock;
mod types;

pub use client::YouTubeClient;

/// Upper bound on items fetched per run. Only one page is ever requested.
pub const PAGE_SIZE: u32 = 50;

/// A playlist item as delivered by the remote service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaylistItemRaw {
    pub title: String,
    pub description: String,
    /// RFC 3339 text, parsed later by the transform step.
    pub published_at: String,
    pub video_id: String,
}

#[async_trait]
pub trait PlaylistSource: Send + Sync {
    async fn playlist_title(&self, playlist_id: &str) -> Result<String, DigestError>;
    async fn playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistItemRaw>, DigestError>;
}
