//! Port for poster (attachment) byte storage.
//!
//! The catalogue only keeps a [`PosterDescriptor`]; the bytes themselves live
//! behind this narrow interface. A failed event insert does not remove an
//! already-stored poster file (see `DESIGN.md`).

use async_trait::async_trait;

use crate::domain::PosterDescriptor;

/// Errors raised by poster store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PosterStoreError {
    /// The uploaded file is not an image.
    #[error("unsupported poster media type: {mimetype}")]
    RejectedMediaType { mimetype: String },
    /// The underlying storage failed.
    #[error("poster storage failed: {message}")]
    Storage { message: String },
}

impl PosterStoreError {
    /// Create a rejected-media-type error.
    pub fn rejected_media_type(mimetype: impl Into<String>) -> Self {
        Self::RejectedMediaType {
            mimetype: mimetype.into(),
        }
    }

    /// Create a storage error with the given message.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Port for storing poster bytes and minting descriptors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PosterStore: Send + Sync {
    /// Store the supplied bytes and return a descriptor for them.
    ///
    /// Only `image/*` media types are accepted; anything else is rejected
    /// with [`PosterStoreError::RejectedMediaType`].
    async fn store(
        &self,
        original_name: &str,
        mimetype: &str,
        bytes: Vec<u8>,
    ) -> Result<PosterDescriptor, PosterStoreError>;
}
