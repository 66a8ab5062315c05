//! File kind inference from the filename extension.

use std::path::Path;

use crate::{error::validation::ValidationError, model::file::FileKind};

/// Extensions accepted as photos.
pub const PHOTO_FORMATS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "heic"];

/// Extensions accepted as documents.
pub const DOCUMENT_FORMATS: [&str; 6] = ["pdf", "doc", "docx", "xls", "xlsx", "txt"];

/// Infers the kind of a file from the final extension of its name.
///
/// Matching is case-insensitive. The returned format is the lower-cased extension and is
/// used both as the `format` column and as the suffix of the storage key.
///
/// # Arguments
/// - `name` - Original filename, e.g. `Poster.JPG`
///
/// # Returns
/// - `Ok((FileKind, String))` - Kind and lower-cased extension
/// - `Err(ValidationError::MissingExtension)` - Name has no extension
/// - `Err(ValidationError::UnsupportedFormat)` - Extension is in neither allow-list
pub fn infer(name: &str) -> Result<(FileKind, String), ValidationError> {
    let format = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| ValidationError::MissingExtension(name.to_string()))?;

    if PHOTO_FORMATS.contains(&format.as_str()) {
        Ok((FileKind::Photo, format))
    } else if DOCUMENT_FORMATS.contains(&format.as_str()) {
        Ok((FileKind::Document, format))
    } else {
        Err(ValidationError::UnsupportedFormat {
            name: name.to_string(),
            format,
        })
    }
}
