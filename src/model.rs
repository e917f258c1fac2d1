//! Domain types shared by the HTTP adapter and the UI slices.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing message shown when a non-image file is selected.
pub const INVALID_IMAGE_MESSAGE: &str = "selected file is not a valid image";

/// Profile as returned by `GET /user`.
///
/// Replaced wholesale on every successful fetch, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// URI of the profile photo.
    pub profile_image: String,
    /// Already formatted by the server (e.g. "10 de mar. de 2025").
    pub valid_until: String,
}

/// A file picked by the user, together with its declared media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub media_type: String,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>, media_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            media_type: media_type.into(),
        }
    }

    /// Declares the media type from the file name, the way a browser file
    /// input does. Unknown extensions become `application/octet-stream`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let media_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .to_string();
        Self { path, media_type }
    }
}

/// Rejection of a selected file whose media type is not `image/*`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg} (got '{media_type}')", msg = INVALID_IMAGE_MESSAGE)]
pub struct NotAnImage {
    pub media_type: String,
}

/// An image accepted into the draft.
///
/// Only constructible through `TryFrom<SelectedFile>`, so every instance has
/// an `image*` media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateImage {
    path: PathBuf,
    media_type: String,
}

impl CandidateImage {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }
}

impl TryFrom<SelectedFile> for CandidateImage {
    type Error = NotAnImage;

    fn try_from(file: SelectedFile) -> Result<Self, Self::Error> {
        if !file.media_type.starts_with("image") {
            return Err(NotAnImage {
                media_type: file.media_type,
            });
        }
        Ok(Self {
            path: file.path,
            media_type: file.media_type,
        })
    }
}

/// Unsaved edits collected by the modal form.
///
/// The name may be empty; nothing checks it before submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDraft {
    pub name: String,
    pub image: Option<CandidateImage>,
}
