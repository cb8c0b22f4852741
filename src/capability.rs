//! Image inspection facilities available in the current build.

use crate::errors::{PagepubError, PagepubResult};
use image::{ImageFormat, ImageReader};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// The raster image formats whose media type can be determined.
///
/// Probed once per [`Converter`](crate::Converter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Capabilities {
    formats: Vec<ImageFormat>,
}

impl Capabilities {
    /// Collects every image format this build is able to decode.
    ///
    /// # Errors
    /// [`PagepubError::MissingCapability`] if no image format is enabled.
    pub(crate) fn probe() -> PagepubResult<Self> {
        Self::from_formats(ImageFormat::all().filter(ImageFormat::reading_enabled))
    }

    fn from_formats(formats: impl IntoIterator<Item = ImageFormat>) -> PagepubResult<Self> {
        let formats: Vec<_> = formats.into_iter().collect();

        if formats.is_empty() {
            return Err(PagepubError::MissingCapability(
                "image format detection requires at least one of the \
                 `png`, `jpeg`, `gif` or `webp` features"
                    .to_owned(),
            ));
        }
        tracing::debug!(?formats, "probed image capabilities");
        Ok(Self { formats })
    }

    /// Determines the media type of the image at `path` from its header bytes.
    ///
    /// The file extension is never consulted.
    pub(crate) fn media_type(&self, path: &Path) -> io::Result<&'static str> {
        let reader = ImageReader::new(BufReader::new(File::open(path)?)).with_guessed_format()?;

        match reader.format() {
            Some(format) if self.formats.contains(&format) => Ok(format.to_mime_type()),
            Some(format) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("image format `{format:?}` is not enabled"),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unrecognized image format",
            )),
        }
    }
}
