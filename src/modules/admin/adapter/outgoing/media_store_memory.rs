// src/modules/admin/adapter/outgoing/media_store_memory.rs

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::admin::application::ports::outgoing::{MediaStore, NewMediaItem};
use crate::modules::admin::domain::media::{seed_items, MediaLibrary};
use crate::modules::admin::domain::MediaItem;

/// Process-local library. Contents and the id counter reset on restart.
#[derive(Clone)]
pub struct InMemoryMediaStore {
    library: Arc<Mutex<MediaLibrary>>,
}

impl InMemoryMediaStore {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            library: Arc::new(Mutex::new(MediaLibrary::new(items))),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_items())
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn list(&self) -> Vec<MediaItem> {
        self.library.lock().await.items().to_vec()
    }

    async fn add(&self, new_items: Vec<NewMediaItem>) -> Vec<MediaItem> {
        let mut library = self.library.lock().await;

        new_items
            .into_iter()
            .map(|new_item| library.add(new_item.name, new_item.url))
            .collect()
    }

    async fn remove(&self, ids: &[u64]) -> Vec<MediaItem> {
        let mut library = self.library.lock().await;
        library.remove(ids);
        library.items().to_vec()
    }
}
