use async_trait::async_trait;
use tracing::info;

use crate::modules::admin::application::ports::incoming::use_cases::{
    ManageMediaError, ManageMediaUseCase, MediaUpload,
};
use crate::modules::admin::application::ports::outgoing::{MediaStore, NewMediaItem};
use crate::modules::admin::domain::media::PLACEHOLDER_URL;
use crate::modules::admin::domain::MediaItem;

pub const MAX_FILES_PER_UPLOAD: usize = 20;
pub const MAX_FILE_NAME_CHARS: usize = 255;
pub const MAX_URL_CHARS: usize = 2048;

pub struct ManageMediaService<S>
where
    S: MediaStore,
{
    store: S,
}

impl<S> ManageMediaService<S>
where
    S: MediaStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ManageMediaUseCase for ManageMediaService<S>
where
    S: MediaStore + Send + Sync,
{
    async fn list(&self) -> Vec<MediaItem> {
        self.store.list().await
    }

    async fn upload(&self, files: Vec<MediaUpload>) -> Result<Vec<MediaItem>, ManageMediaError> {
        if files.is_empty() {
            return Err(ManageMediaError::EmptySelection);
        }
        if files.len() > MAX_FILES_PER_UPLOAD {
            return Err(ManageMediaError::TooManyFiles(MAX_FILES_PER_UPLOAD));
        }

        // Whole batch is checked before anything is added
        let mut items = Vec::with_capacity(files.len());
        for file in files {
            let name = file.name.trim();
            if name.is_empty() {
                return Err(ManageMediaError::MissingFileName);
            }
            if name.chars().count() > MAX_FILE_NAME_CHARS {
                return Err(ManageMediaError::FileNameTooLong(MAX_FILE_NAME_CHARS));
            }
            let url = file
                .url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_URL.to_string());
            if url.chars().count() > MAX_URL_CHARS {
                return Err(ManageMediaError::UrlTooLong(MAX_URL_CHARS));
            }
            items.push(NewMediaItem {
                name: name.to_string(),
                url,
            });
        }

        let added = self.store.add(items).await;
        info!(count = added.len(), "Media registered");
        Ok(added)
    }

    async fn delete(&self, ids: Vec<u64>) -> Result<Vec<MediaItem>, ManageMediaError> {
        if ids.is_empty() {
            return Err(ManageMediaError::EmptySelection);
        }

        let remaining = self.store.remove(&ids).await;
        info!(requested = ids.len(), remaining = remaining.len(), "Media deleted");
        Ok(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Store {}
        #[async_trait]
        impl MediaStore for Store {
            async fn list(&self) -> Vec<MediaItem>;
            async fn add(&self, items: Vec<NewMediaItem>) -> Vec<MediaItem>;
            async fn remove(&self, ids: &[u64]) -> Vec<MediaItem>;
        }
    }

    fn upload(name: &str, url: Option<&str>) -> MediaUpload {
        MediaUpload {
            name: name.to_string(),
            url: url.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn upload_defaults_to_placeholder_url() {
        let mut store = MockStore::new();
        store
            .expect_add()
            .with(eq(vec![
                NewMediaItem {
                    name: "cv.pdf".to_string(),
                    url: PLACEHOLDER_URL.to_string(),
                },
                NewMediaItem {
                    name: "me.png".to_string(),
                    url: "https://cdn.example.com/me.png".to_string(),
                },
            ]))
            .times(1)
            .returning(|items| {
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| MediaItem {
                        id: i as u64 + 4,
                        name: item.name,
                        url: item.url,
                    })
                    .collect()
            });

        let service = ManageMediaService::new(store);
        let added = service
            .upload(vec![
                upload(" cv.pdf ", Some("  ")),
                upload("me.png", Some("https://cdn.example.com/me.png")),
            ])
            .await
            .unwrap();

        assert_eq!(added.len(), 2);
        assert_eq!(added[0].id, 4);
    }

    #[tokio::test]
    async fn upload_rejects_empty_selection_and_blank_names() {
        let service = ManageMediaService::new(MockStore::new());

        assert_eq!(
            service.upload(vec![]).await,
            Err(ManageMediaError::EmptySelection)
        );
        assert_eq!(
            service.upload(vec![upload("  ", None)]).await,
            Err(ManageMediaError::MissingFileName)
        );
    }

    #[tokio::test]
    async fn upload_rejects_oversized_batch_without_adding() {
        let mut store = MockStore::new();
        store.expect_add().never();
        let service = ManageMediaService::new(store);

        let files = (0..=MAX_FILES_PER_UPLOAD)
            .map(|i| upload(&format!("file{i}.png"), None))
            .collect();

        assert_eq!(
            service.upload(files).await,
            Err(ManageMediaError::TooManyFiles(MAX_FILES_PER_UPLOAD))
        );
    }

    #[tokio::test]
    async fn upload_rejects_long_names_and_urls_without_adding() {
        let mut store = MockStore::new();
        store.expect_add().never();
        let service = ManageMediaService::new(store);

        let long_name = "a".repeat(MAX_FILE_NAME_CHARS + 1);
        assert_eq!(
            service
                .upload(vec![upload("ok.png", None), upload(&long_name, None)])
                .await,
            Err(ManageMediaError::FileNameTooLong(MAX_FILE_NAME_CHARS))
        );

        let long_url = format!("https://cdn.example.com/{}", "x".repeat(MAX_URL_CHARS));
        assert_eq!(
            service.upload(vec![upload("ok.png", Some(&long_url))]).await,
            Err(ManageMediaError::UrlTooLong(MAX_URL_CHARS))
        );
    }

    #[tokio::test]
    async fn upload_accepts_name_at_the_limit() {
        let mut store = MockStore::new();
        store.expect_add().times(1).returning(|items| {
            items
                .into_iter()
                .map(|item| MediaItem {
                    id: 4,
                    name: item.name,
                    url: item.url,
                })
                .collect()
        });
        let service = ManageMediaService::new(store);

        // Multi-byte characters count once each
        let name = "é".repeat(MAX_FILE_NAME_CHARS);
        let added = service.upload(vec![upload(&name, None)]).await.unwrap();

        assert_eq!(added[0].name.chars().count(), MAX_FILE_NAME_CHARS);
    }

    #[tokio::test]
    async fn delete_passes_ids_through() {
        let mut store = MockStore::new();
        store
            .expect_remove()
            .withf(|ids| ids == [1, 3])
            .times(1)
            .returning(|_| {
                vec![MediaItem {
                    id: 2,
                    name: "image2.png".to_string(),
                    url: PLACEHOLDER_URL.to_string(),
                }]
            });

        let service = ManageMediaService::new(store);
        let remaining = service.delete(vec![1, 3]).await.unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(
            service.delete(vec![]).await,
            Err(ManageMediaError::EmptySelection)
        );
    }
}
