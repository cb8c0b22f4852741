//! Conversion on the tokio blocking thread pool.

use crate::book::{Book, ContentGroup};
use crate::convert::Converter;
use crate::errors::{PagepubError, PagepubResult};
use crate::progress::ProgressSink;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

impl Converter {
    /// Runs [`Converter::convert`] on tokio's blocking thread pool,
    /// as image inspection and archive writing perform blocking IO.
    ///
    /// Requires the `async-tokio` feature and a running tokio runtime.
    ///
    /// # Errors
    /// See [`Converter::convert`].
    /// A panicked or cancelled conversion task is reported as [`PagepubError::Io`].
    ///
    /// # Examples
    /// ```no_run
    /// use pagepub::{Book, ContentGroup, Converter, ProgressCounter};
    /// use std::sync::Arc;
    ///
    /// # async fn run() -> pagepub::errors::PagepubResult<()> {
    /// let converter = Converter::new()?;
    /// let progress = ProgressCounter::new();
    ///
    /// converter
    ///     .convert_async(
    ///         Book::new("abc123", "Demo", "en"),
    ///         vec![ContentGroup::new("Ch.1", ["ch1/p1.png"])],
    ///         "demo.epub",
    ///         Arc::new(progress.clone()),
    ///     )
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn convert_async(
        &self,
        book: Book,
        groups: Vec<ContentGroup>,
        path: impl Into<PathBuf>,
        progress: Arc<dyn ProgressSink>,
    ) -> PagepubResult<()> {
        let converter = self.clone();
        let path = path.into();

        tokio::task::spawn_blocking(move || converter.convert(&book, groups, &path, &*progress))
            .await
            .map_err(|error| PagepubError::Io(io::Error::other(error)))?
    }
}
