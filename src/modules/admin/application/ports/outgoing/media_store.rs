// src/modules/admin/application/ports/outgoing/media_store.rs

use async_trait::async_trait;

use crate::modules::admin::domain::MediaItem;

/// New entry before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMediaItem {
    pub name: String,
    pub url: String,
}

/// Holds the media library. The only implementation keeps it in memory, so
/// none of these calls can fail.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn list(&self) -> Vec<MediaItem>;

    /// Ids are assigned by the store, unique for its lifetime.
    async fn add(&self, items: Vec<NewMediaItem>) -> Vec<MediaItem>;

    /// Unknown ids are ignored. Returns the remaining items.
    async fn remove(&self, ids: &[u64]) -> Vec<MediaItem>;
}
