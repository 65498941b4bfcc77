use std::sync::Mutex;

use async_trait::async_trait;

use super::{PlaylistItemRaw, PlaylistSource};
use crate::error::DigestError;

/// In-memory playlist. Failures are produced by a closure so tests can pick
/// which call fails and with which error.
#[derive(Default)]
pub struct MockSource {
    pub title: String,
    pub items: Vec<PlaylistItemRaw>,
    fail_title: Option<fn() -> DigestError>,
    fail_items: Option<fn() -> DigestError>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockSource {
    pub fn new(title: impl Into<String>, items: Vec<PlaylistItemRaw>) -> Self {
        Self { title: title.into(), items, ..Self::default() }
    }

    pub fn failing_title(mut self, err: fn() -> DigestError) -> Self {
        self.fail_title = Some(err);
        self
    }

    pub fn failing_items(mut self, err: fn() -> DigestError) -> Self {
        self.fail_items = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaylistSource for MockSource {
    async fn playlist_title(&self, _playlist_id: &str) -> Result<String, DigestError> {
        self.calls.lock().unwrap().push("title");
        match self.fail_title {
            Some(err) => Err(err()),
            None => Ok(self.title.clone()),
        }
    }

    async fn playlist_items(&self, _playlist_id: &str) -> Result<Vec<PlaylistItemRaw>, DigestError> {
        self.calls.lock().unwrap().push("items");
        match self.fail_items {
            Some(err) => Err(err()),
            None => Ok(self.items.clone()),
        }
    }
}
