mod container;
mod content;
mod package;
mod toc;

use crate::config::Compression;
use crate::epub::consts::ocf;
use crate::epub::document::Documents;
use crate::epub::state::PackageState;
use crate::progress::ProgressSink;
use crate::writer::WriterResult;
use crate::writer::zip::ArchiveWriter;
use std::io::Write;

struct EpubWriterContext<'ebook> {
    documents: &'ebook Documents,
    state: &'ebook PackageState,
    progress: &'ebook dyn ProgressSink,
}

/// Serializes the package documents, content pages and images into one archive.
///
/// Entry order:
/// 1. `mimetype` (stored)
/// 2. `META-INF/container.xml`
/// 3. `OEBPS/toc.ncx`
/// 4. `OEBPS/content.opf`
/// 5. `OEBPS/nav.xhtml`
/// 6. For each group: its pages, then its images
pub(crate) struct EpubWriter<'ebook, W: Write> {
    ctx: EpubWriterContext<'ebook>,
    zip: ArchiveWriter<W>,
}

impl<'ebook, W: Write> EpubWriter<'ebook, W> {
    pub(crate) fn new(
        documents: &'ebook Documents,
        state: &'ebook PackageState,
        compression: Compression,
        progress: &'ebook dyn ProgressSink,
        writer: W,
    ) -> Self {
        Self {
            ctx: EpubWriterContext {
                documents,
                state,
                progress,
            },
            zip: ArchiveWriter::new(writer, compression, documents.package.metadata.modified),
        }
    }

    pub(crate) fn write(mut self) -> WriterResult<W> {
        self.write_mimetype()?;
        self.write_container()?;
        self.write_ncx()?;
        self.write_package()?;
        self.write_nav()?;
        self.write_groups()?;
        self.zip.finish()
    }

    fn write_mimetype(&mut self) -> WriterResult<()> {
        // EPUB requires that the mimetype file must be first and uncompressed
        self.zip.start_stored_entry(ocf::MIMETYPE_PATH)?;
        self.zip.write_all(ocf::MIMETYPE.as_bytes())?;
        Ok(())
    }
}
