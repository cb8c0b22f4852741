//! Error-related types for a conversion.

use std::io;
use std::path::PathBuf;

/// Alias for `Result<T, PagepubError>`.
pub type PagepubResult<T> = Result<T, PagepubError>;

/// Possible errors when converting content groups into an EPUB archive.
///
/// # Retrying
/// No retry is performed internally.
/// [`UnreadableAsset`](Self::UnreadableAsset), [`TargetExists`](Self::TargetExists)
/// and [`Io`](Self::Io) are environmental and may succeed once the cause is resolved.
/// [`MissingCapability`](Self::MissingCapability) is not retryable within the same process.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum PagepubError {
    /// The build lacks the image inspection facilities required to
    /// determine the media type of page images.
    ///
    /// Raised by [`Converter::new`](crate::Converter::new), before any content is processed.
    #[error("[MissingCapability]: {0}")]
    MissingCapability(String),

    /// A page image cannot be opened or its format cannot be recognized.
    ///
    /// The group containing the image is not registered.
    #[error("[UnreadableAsset - group {group}, item {item}, `{path:?}`]: {source}")]
    UnreadableAsset {
        /// The root cause of the error.
        source: io::Error,
        /// The zero-based index of the group the image belongs to.
        group: usize,
        /// The one-based index of the image within its group.
        item: usize,
        /// The path of the image responsible for triggering the error.
        path: PathBuf,
    },

    /// The target archive already exists while
    /// [`OpenMode::CreateNew`](crate::OpenMode::CreateNew) is in effect.
    #[error("[TargetExists - `{0:?}`]: The target archive already exists")]
    TargetExists(PathBuf),

    /// A configuration value is invalid.
    #[error("[Config - `{key}`]: Invalid value `{value}`")]
    Config {
        /// The configuration key (e.g., an environment variable name).
        key: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An IO exception occurred during writing.
    ///
    /// The partially written archive is discarded when saving to a path.
    #[error(transparent)]
    Io(#[from] io::Error),
}
