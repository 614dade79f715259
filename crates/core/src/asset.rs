//! Asset file-type classification.
//!
//! Uploaded files are classified by extension only; the engine never
//! inspects file content.

use serde::{Deserialize, Serialize};

pub const FILE_TYPE_IMAGE: &str = "image";
pub const FILE_TYPE_VIDEO: &str = "video";
pub const FILE_TYPE_PDF: &str = "pdf";
pub const FILE_TYPE_OTHER: &str = "other";

/// All valid file type strings.
pub const VALID_FILE_TYPES: &[&str] = &[
    FILE_TYPE_IMAGE,
    FILE_TYPE_VIDEO,
    FILE_TYPE_PDF,
    FILE_TYPE_OTHER,
];

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "webm"];

/// Broad type of an uploaded asset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Image,
    Video,
    Pdf,
    Other,
}

impl FileType {
    /// Classify a filename by its extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Self::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Self::Video
        } else if ext == "pdf" {
            Self::Pdf
        } else {
            Self::Other
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => FILE_TYPE_IMAGE,
            Self::Video => FILE_TYPE_VIDEO,
            Self::Pdf => FILE_TYPE_PDF,
            Self::Other => FILE_TYPE_OTHER,
        }
    }
}
