// src/modules/admin/domain/media.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PLACEHOLDER_URL: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaItem {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// What the library starts with on every boot.
pub fn seed_items() -> Vec<MediaItem> {
    ["image1.jpg", "image2.png", "image3.gif"]
        .iter()
        .enumerate()
        .map(|(i, name)| MediaItem {
            id: i as u64 + 1,
            name: name.to_string(),
            url: PLACEHOLDER_URL.to_string(),
        })
        .collect()
}

/// Media list plus its id counter.
///
/// The counter only moves forward, so an id is never handed out twice even
/// after the item holding it (or the highest id) is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLibrary {
    items: Vec<MediaItem>,
    next_id: u64,
}

impl MediaLibrary {
    pub fn new(items: Vec<MediaItem>) -> Self {
        let next_id = items.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self { items, next_id }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn add(&mut self, name: String, url: String) -> MediaItem {
        let item = MediaItem {
            id: self.next_id,
            name,
            url,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Unknown ids are ignored.
    pub fn remove(&mut self, ids: &[u64]) {
        self.items.retain(|item| !ids.contains(&item.id));
    }
}
