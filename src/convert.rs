//! The conversion entry point.

use crate::book::{Book, ContentGroup};
use crate::capability::Capabilities;
use crate::config::{Compression, OpenMode};
use crate::epub::builder::EpubBuilder;
use crate::errors::{PagepubError, PagepubResult};
use crate::progress::ProgressSink;
use std::io::{BufWriter, Cursor, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Converts ordered groups of page images into an EPUB 3 archive.
///
/// A [`Converter`] is cheap to clone and may be shared across threads;
/// each conversion assembles its own package and shares nothing
/// except the given [`ProgressSink`].
///
/// # Archive Layout
/// Every group receives a zero-based index `g` and every image within it a
/// one-based index `i`:
/// - `mimetype` (first, stored)
/// - `META-INF/container.xml`
/// - `OEBPS/toc.ncx`
/// - `OEBPS/content.opf`
/// - `OEBPS/nav.xhtml`
/// - Per group: `OEBPS/xhtml/<g>_<i>.xhtml` pages, then `OEBPS/images/<g>_<file name>`
///
/// # Examples
/// ```no_run
/// use pagepub::{Book, ContentGroup, Converter, OpenMode, ProgressCounter};
///
/// # fn main() -> pagepub::errors::PagepubResult<()> {
/// let book = Book::new("abc123", "Demo", "en").authors(["A", "B"]);
/// let groups = [
///     ContentGroup::new("Ch.1", ["ch1/p1.png", "ch1/p2.png"]),
///     ContentGroup::new("Ch.2", ["ch2/p1.jpg"]),
/// ];
/// let progress = ProgressCounter::new();
///
/// Converter::new()?
///     .open_mode(OpenMode::Overwrite)
///     .convert(&book, groups, "demo.epub", &progress)?;
///
/// assert_eq!(3, progress.completed());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Converter {
    capabilities: Capabilities,
    compression: Compression,
    open_mode: OpenMode,
}

impl Converter {
    /// Creates a converter with default [`Compression`] and [`OpenMode`].
    ///
    /// # Errors
    /// [`PagepubError::MissingCapability`] if this build cannot determine the
    /// media type of any raster image format.
    pub fn new() -> PagepubResult<Self> {
        Ok(Self {
            capabilities: Capabilities::probe()?,
            compression: Compression::default(),
            open_mode: OpenMode::default(),
        })
    }

    /// Sets the compression applied to every entry except `mimetype`.
    ///
    /// Default: [`Compression::default`]
    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Sets how an existing target is handled by [`Converter::convert`].
    ///
    /// Default: [`OpenMode::CreateNew`]
    pub fn open_mode(mut self, open_mode: OpenMode) -> Self {
        self.open_mode = open_mode;
        self
    }

    /// Converts `groups` into an EPUB archive saved at `path`.
    ///
    /// The archive is first written to a uniquely named temporary file next to `path`,
    /// which is moved to `path` only once complete.
    ///
    /// # Errors
    /// - [`PagepubError::TargetExists`] if `path` exists, either before writing or
    ///   once the archive is complete, and [`OpenMode::CreateNew`] is in effect.
    ///   The existing file is untouched.
    /// - [`PagepubError::UnreadableAsset`] if an image cannot be inspected or copied.
    /// - [`PagepubError::Io`] if the archive cannot be written.
    pub fn convert<I>(
        &self,
        book: &Book,
        groups: I,
        path: impl AsRef<Path>,
        progress: &dyn ProgressSink,
    ) -> PagepubResult<()>
    where
        I: IntoIterator,
        I::Item: Into<ContentGroup>,
    {
        let path = path.as_ref();

        if self.open_mode == OpenMode::CreateNew && path.try_exists()? {
            return Err(PagepubError::TargetExists(path.to_path_buf()));
        }
        tracing::info!(id = book.id(), title = book.title(), path = %path.display(), "converting");

        let builder = self.assemble(book, groups)?;
        self.save(&builder, progress, path)?;

        tracing::info!(
            id = book.id(),
            groups = builder.state().next_index(),
            images = builder.state().image_count(),
            path = %path.display(),
            "conversion complete",
        );
        Ok(())
    }

    /// Converts `groups` into an EPUB archive written to `writer`,
    /// returning the given writer.
    ///
    /// # Errors
    /// See [`Converter::convert`].
    pub fn write<I, W: Write>(
        &self,
        book: &Book,
        groups: I,
        writer: W,
        progress: &dyn ProgressSink,
    ) -> PagepubResult<W>
    where
        I: IntoIterator,
        I::Item: Into<ContentGroup>,
    {
        self.assemble(book, groups)?
            .write(self.compression, progress, writer)
    }

    /// Converts `groups` into an in-memory EPUB archive.
    ///
    /// # Errors
    /// See [`Converter::convert`].
    pub fn to_vec<I>(&self, book: &Book, groups: I, progress: &dyn ProgressSink) -> PagepubResult<Vec<u8>>
    where
        I: IntoIterator,
        I::Item: Into<ContentGroup>,
    {
        self.write(book, groups, Cursor::new(Vec::new()), progress)
            .map(Cursor::into_inner)
    }

    fn assemble<I>(&self, book: &Book, groups: I) -> PagepubResult<EpubBuilder<'_>>
    where
        I: IntoIterator,
        I::Item: Into<ContentGroup>,
    {
        let mut builder = EpubBuilder::new(&self.capabilities, book);

        for group in groups {
            let group = group.into();
            builder.add_group(group.title(), group.images())?;
        }
        Ok(builder)
    }

    fn save(
        &self,
        builder: &EpubBuilder<'_>,
        progress: &dyn ProgressSink,
        path: &Path,
    ) -> PagepubResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = tempfile::Builder::new()
            .prefix(".pagepub-")
            .suffix(".tmp")
            .tempfile_in(dir)?;

        let write_result = (|| -> PagepubResult<()> {
            let mut buf = BufWriter::new(temp.as_file_mut());

            builder.write(self.compression, progress, &mut buf)?;

            // Write the remaining bytes to file
            buf.flush()?;
            Ok(())
        })();

        if let Err(error) = write_result {
            discard(temp);
            return Err(error);
        }

        let persisted = match self.open_mode {
            // Fails rather than replacing a target created in the meantime
            OpenMode::CreateNew => temp.persist_noclobber(path),
            OpenMode::Overwrite => temp.persist(path),
        };

        persisted.map(drop).map_err(|error| {
            let kind = error.error.kind();
            discard(error.file);

            if self.open_mode == OpenMode::CreateNew && kind == ErrorKind::AlreadyExists {
                PagepubError::TargetExists(path.to_path_buf())
            } else {
                PagepubError::Io(error.error)
            }
        })
    }
}

fn discard(temp: NamedTempFile) {
    let temp_path = temp.path().to_path_buf();

    if let Err(cleanup) = temp.close() {
        tracing::warn!(temp = %temp_path.display(), %cleanup, "failed to discard temporary file");
    }
}
