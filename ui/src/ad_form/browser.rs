//! Browser-backed implementations of the form's file and network seams.

use js_sys::Uint8Array;
use payloads::{APIClient, AdDraft, AdId, requests::ImageUpload, responses::Ad};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, Url};

use super::staging::{ImageFile, ImageStaging, PreviewUrls};
use super::submission::{AdService, ServiceError};

impl ImageFile for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn size(&self) -> u64 {
        Blob::size(self) as u64
    }

    fn mime_type(&self) -> String {
        Blob::type_(self)
    }
}

/// Previews backed by `URL.createObjectURL`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObjectUrls;

impl PreviewUrls<File> for ObjectUrls {
    fn create(&self, file: &File) -> Option<String> {
        Url::create_object_url_with_blob(file).ok()
    }

    fn revoke(&self, url: &str) {
        if Url::revoke_object_url(url).is_err() {
            tracing::warn!("Could not revoke preview URL {url}");
        }
    }
}

pub type BrowserStaging = ImageStaging<File, ObjectUrls>;

/// Talks to the backend through the shared API client.
#[derive(Clone)]
pub struct BrowserAdService {
    client: APIClient,
}

impl BrowserAdService {
    pub fn new(client: APIClient) -> Self {
        Self { client }
    }
}

async fn read_file(file: &File) -> Result<ImageUpload, ServiceError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ServiceError::UnreadableFile(file.name()))?;
    Ok(ImageUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        data: Uint8Array::new(&buffer).to_vec(),
    })
}

impl AdService<File> for BrowserAdService {
    async fn create_ad(&self, draft: &AdDraft) -> Result<Ad, ServiceError> {
        Ok(self.client.create_ad(draft).await?)
    }

    async fn upload_images(
        &self,
        ad_id: &AdId,
        files: &[&File],
    ) -> Result<(), ServiceError> {
        let mut uploads = Vec::with_capacity(files.len());
        for file in files {
            uploads.push(read_file(file).await?);
        }
        Ok(self.client.upload_ad_images(ad_id, uploads).await?)
    }
}
