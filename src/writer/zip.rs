use crate::config::{Compression, CompressionMethod};
use crate::errors::PagepubError;
use crate::util::datetime::UtcDateTime;
use crate::writer::WriterResult;
use std::io::{self, Write};
use zip::result::ZipError;
use zip::write::{SimpleFileOptions, StreamWriter};
use zip::{CompressionMethod as ZipCompressionMethod, DateTime as ZipDateTime};

/// Streams archive entries to an underlying writer, one at a time.
///
/// Every entry shares the same timestamp; only the compression differs
/// between [stored](Self::start_stored_entry) and [regular](Self::start_entry) entries.
pub(crate) struct ArchiveWriter<W: Write> {
    inner: zip::ZipWriter<StreamWriter<W>>,
    stored: SimpleFileOptions,
    compressed: SimpleFileOptions,
}

impl<W: Write> ArchiveWriter<W> {
    pub(crate) fn new(writer: W, compression: Compression, modified: UtcDateTime) -> Self {
        let stored = SimpleFileOptions::default()
            .last_modified_time(zip_datetime(modified))
            .compression_method(ZipCompressionMethod::Stored)
            // Stored entries reject any compression level
            .compression_level(None);

        let compressed = match compression.method() {
            CompressionMethod::Stored => stored,
            CompressionMethod::Deflated => stored
                .compression_method(ZipCompressionMethod::Deflated)
                .compression_level(compression.level().map(i64::from)),
        };

        Self {
            inner: zip::ZipWriter::new_stream(writer),
            stored,
            compressed,
        }
    }

    /// Begins an uncompressed entry regardless of the configured [`Compression`].
    pub(crate) fn start_stored_entry(&mut self, name: &str) -> WriterResult<()> {
        self.start(name, self.stored)
    }

    pub(crate) fn start_entry(&mut self, name: &str) -> WriterResult<()> {
        self.start(name, self.compressed)
    }

    fn start(&mut self, name: &str, options: SimpleFileOptions) -> WriterResult<()> {
        tracing::debug!(entry = name, "writing archive entry");
        self.inner
            // Entry names are relative to the archive root
            .start_file(name.trim_start_matches('/'), options)
            .map_err(from_zip_error)
    }

    pub(crate) fn finish(self) -> WriterResult<W> {
        let stream = self.inner.finish().map_err(from_zip_error)?;
        Ok(stream.into_inner())
    }
}

impl<W: Write> Write for ArchiveWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Zip timestamps only cover 1980 through 2107;
/// anything outside falls back to the format's epoch.
fn zip_datetime(datetime: UtcDateTime) -> ZipDateTime {
    u16::try_from(datetime.year())
        .ok()
        .and_then(|year| {
            ZipDateTime::from_date_and_time(
                year,
                datetime.month(),
                datetime.day(),
                datetime.hour(),
                datetime.minute(),
                datetime.second(),
            )
            .ok()
        })
        .unwrap_or_default()
}

fn from_zip_error(error: ZipError) -> PagepubError {
    PagepubError::Io(match error {
        ZipError::Io(error) => error,
        error => io::Error::other(error),
    })
}
