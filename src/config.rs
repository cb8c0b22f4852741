//! Configuration consumed when writing an archive.

use crate::errors::{PagepubError, PagepubResult};
use std::fmt::Display;
use std::str::FromStr;

/// The zip compression method applied to archive entries.
///
/// The leading `mimetype` entry is always [stored](CompressionMethod::Stored),
/// regardless of this setting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompressionMethod {
    /// No compression.
    Stored,
    /// Deflate compression.
    #[default]
    Deflated,
}

impl CompressionMethod {
    /// Returns the lowercase name of the method, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::Deflated => "deflated",
        }
    }
}

impl Display for CompressionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionMethod {
    type Err = PagepubError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stored" | "store" | "none" => Ok(Self::Stored),
            "deflated" | "deflate" => Ok(Self::Deflated),
            _ => Err(PagepubError::Config {
                key: Compression::METHOD_VAR,
                value: value.to_owned(),
            }),
        }
    }
}

/// Compression applied to every archive entry except the `mimetype` entry.
///
/// # Examples
/// ```
/// use pagepub::{Compression, CompressionMethod};
///
/// let compression = Compression::new(CompressionMethod::Deflated).with_level(9);
///
/// assert_eq!(CompressionMethod::Deflated, compression.method());
/// assert_eq!(Some(9), compression.level());
/// assert_eq!(None, Compression::stored().level());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Compression {
    method: CompressionMethod,
    level: Option<u8>,
}

impl Compression {
    /// Environment variable selecting the [`CompressionMethod`] (`stored` | `deflated`).
    pub const METHOD_VAR: &'static str = "PAGEPUB_ZIP_COMPRESSION_TYPE";
    /// Environment variable selecting the compression level (`0..=9`).
    pub const LEVEL_VAR: &'static str = "PAGEPUB_ZIP_COMPRESSION_LEVEL";

    const DEFAULT_LEVEL: u8 = 6;
    const MAX_LEVEL: u8 = 9;

    /// Creates a compression setting using the method's default level.
    pub fn new(method: CompressionMethod) -> Self {
        Self {
            level: match method {
                CompressionMethod::Stored => None,
                CompressionMethod::Deflated => Some(Self::DEFAULT_LEVEL),
            },
            method,
        }
    }

    /// No compression.
    pub fn stored() -> Self {
        Self::new(CompressionMethod::Stored)
    }

    /// Sets the compression level, clamped to `[0, 9]`.
    ///
    /// The level has no effect on [`CompressionMethod::Stored`].
    pub fn with_level(mut self, level: u8) -> Self {
        if self.method != CompressionMethod::Stored {
            self.level = Some(level.min(Self::MAX_LEVEL));
        }
        self
    }

    /// Reads the compression configuration from the environment.
    ///
    /// Unset variables fall back to the defaults
    /// ([`CompressionMethod::Deflated`], level `6`).
    ///
    /// # Errors
    /// [`PagepubError::Config`] if a variable is set to an unrecognized value.
    pub fn from_env() -> PagepubResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PagepubResult<Self> {
        let method = match lookup(Self::METHOD_VAR) {
            Some(value) => value.parse()?,
            None => CompressionMethod::default(),
        };
        let compression = Self::new(method);

        match lookup(Self::LEVEL_VAR) {
            Some(value) => {
                let level = value
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .filter(|level| *level <= Self::MAX_LEVEL)
                    .ok_or(PagepubError::Config {
                        key: Self::LEVEL_VAR,
                        value,
                    })?;
                Ok(compression.with_level(level))
            }
            None => Ok(compression),
        }
    }

    /// The compression method.
    pub fn method(&self) -> CompressionMethod {
        self.method
    }

    /// The compression level, or [`None`] for [`CompressionMethod::Stored`].
    pub fn level(&self) -> Option<u8> {
        self.level
    }
}

impl Default for Compression {
    fn default() -> Self {
        Self::new(CompressionMethod::default())
    }
}

/// How the target path of a conversion is opened.
///
/// Appending to an existing archive is not supported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OpenMode {
    /// Fail with [`PagepubError::TargetExists`] if the target already exists.
    #[default]
    CreateNew,
    /// Replace the target if it already exists.
    Overwrite,
}
