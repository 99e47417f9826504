//! Filesystem-backed poster store.
//!
//! Posters land in the configured upload directory under a
//! `{timestamp_millis}-{original_name}` filename, and are served back by the
//! static `/uploads` route. Only `image/*` media types are accepted.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::ports::{PosterStore, PosterStoreError};
use crate::domain::PosterDescriptor;

/// [`PosterStore`] implementation writing into a local directory.
#[derive(Clone)]
pub struct DiskPosterStore {
    dir: PathBuf,
}

impl DiskPosterStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory must already exist; startup creates it.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

/// Strip path separators so a crafted filename cannot escape the upload
/// directory.
fn sanitize_name(original: &str) -> String {
    let name = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();
    if name.is_empty() {
        "poster".to_owned()
    } else {
        name.to_owned()
    }
}

#[async_trait]
impl PosterStore for DiskPosterStore {
    async fn store(
        &self,
        original_name: &str,
        mimetype: &str,
        bytes: Vec<u8>,
    ) -> Result<PosterDescriptor, PosterStoreError> {
        if !mimetype.starts_with("image/") {
            return Err(PosterStoreError::rejected_media_type(mimetype));
        }

        let filename = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_name(original_name)
        );
        let target = self.dir.join(&filename);
        tokio::fs::write(&target, bytes)
            .await
            .map_err(|err| PosterStoreError::storage(err.to_string()))?;
        info!(filename = %filename, "poster stored");

        Ok(PosterDescriptor {
            path: format!("uploads/{filename}"),
            filename,
            mimetype: mimetype.to_owned(),
        })
    }
}
