use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::types::{ApiErrorEnvelope, ListResponse, Playlist, PlaylistItem};
use super::{PlaylistItemRaw, PlaylistSource, PAGE_SIZE};
use crate::config::YouTubeConfig;
use crate::error::{DigestError, TransportError};

const STAGE_PLAYLIST: &str = "fetch playlist";
const STAGE_ITEMS: &str = "fetch playlist items";

#[derive(Clone)]
pub struct YouTubeClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(cfg: &YouTubeConfig) -> Result<Self, DigestError> {
        let api_key = cfg.require_api_key()?.to_string();
        let http = HttpClient::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(DigestError::Client)?;
        Ok(Self { http, base_url: cfg.base_url.clone(), api_key })
    }

    fn endpoint(&self, resource: &str, params: &[(&str, &str)]) -> Result<Url, url::ParseError> {
        let base = format!("{}/{}", self.base_url.trim_end_matches('/'), resource);
        let mut pairs: Vec<(&str, &str)> = params.to_vec();
        pairs.push(("key", self.api_key.as_str()));
        Url::parse_with_params(&base, &pairs)
    }

    fn playlist_url(&self, playlist_id: &str) -> Result<Url, url::ParseError> {
        self.endpoint("playlists", &[("part", "snippet"), ("id", playlist_id)])
    }

    fn items_url(&self, playlist_id: &str) -> Result<Url, url::ParseError> {
        let max = PAGE_SIZE.to_string();
        self.endpoint(
            "playlistItems",
            &[("part", "snippet"), ("playlistId", playlist_id), ("maxResults", max.as_str())],
        )
    }

    async fn get_list<T: DeserializeOwned>(&self, url: Url) -> Result<ListResponse<T>, TransportError> {
        let response = self.http.get(url).send().await.map_err(TransportError::from_reqwest)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(TransportError::from_reqwest)?;
        decode_list(status, &bytes)
    }
}

fn decode_list<T: DeserializeOwned>(status: reqwest::StatusCode, bytes: &[u8]) -> Result<ListResponse<T>, TransportError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ApiErrorEnvelope>(bytes)
            .ok()
            .map(|env| env.error.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(TransportError::Api { status, message });
    }
    serde_json::from_slice(bytes).map_err(TransportError::Decode)
}

#[async_trait]
impl PlaylistSource for YouTubeClient {
    async fn playlist_title(&self, playlist_id: &str) -> Result<String, DigestError> {
        let url = self.playlist_url(playlist_id).map_err(|e| DigestError::transport(STAGE_PLAYLIST, e))?;
        let list: ListResponse<Playlist> =
            self.get_list(url).await.map_err(|e| DigestError::transport(STAGE_PLAYLIST, e))?;
        first_title(list, playlist_id)
    }

    async fn playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistItemRaw>, DigestError> {
        let url = self.items_url(playlist_id).map_err(|e| DigestError::transport(STAGE_ITEMS, e))?;
        let list: ListResponse<PlaylistItem> =
            self.get_list(url).await.map_err(|e| DigestError::transport(STAGE_ITEMS, e))?;
        Ok(into_items(list))
    }
}

fn first_title(list: ListResponse<Playlist>, playlist_id: &str) -> Result<String, DigestError> {
    list.items
        .into_iter()
        .next()
        .map(|p| p.snippet.title)
        .ok_or_else(|| DigestError::NotFound { playlist_id: playlist_id.to_string() })
}

fn into_items(list: ListResponse<PlaylistItem>) -> Vec<PlaylistItemRaw> {
    if list.next_page_token.is_some() {
        debug!("playlist has more than {} items; only the first page is used", PAGE_SIZE);
    }
    list.items.into_iter().map(PlaylistItemRaw::from).collect()
}
