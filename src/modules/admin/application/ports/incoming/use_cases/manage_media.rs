use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::admin::domain::MediaItem;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManageMediaError {
    #[error("No files selected")]
    EmptySelection,

    #[error("File name is required")]
    MissingFileName,

    #[error("At most {0} files per upload")]
    TooManyFiles(usize),

    #[error("File name is longer than {0} characters")]
    FileNameTooLong(usize),

    #[error("File url is longer than {0} characters")]
    UrlTooLong(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct MediaUpload {
    #[schema(example = "headshot.jpg")]
    pub name: String,
    /// Defaults to the placeholder image.
    pub url: Option<String>,
}

#[async_trait]
pub trait ManageMediaUseCase: Send + Sync {
    async fn list(&self) -> Vec<MediaItem>;

    /// Returns the newly registered items.
    async fn upload(&self, files: Vec<MediaUpload>) -> Result<Vec<MediaItem>, ManageMediaError>;

    /// Returns what is left after removal.
    async fn delete(&self, ids: Vec<u64>) -> Result<Vec<MediaItem>, ManageMediaError>;
}
