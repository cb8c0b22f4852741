mod ncx;
mod xhtml;

use crate::epub::consts::layout;
use crate::epub::writer::EpubWriter;
use crate::epub::writer::toc::ncx::NcxTocWriter;
use crate::epub::writer::toc::xhtml::XhtmlTocWriter;
use crate::writer::WriterResult;
use std::io::Write;

impl<W: Write> EpubWriter<'_, W> {
    /// Writes the EPUB 2 navigation map, kept for older reading systems.
    pub(super) fn write_ncx(&mut self) -> WriterResult<()> {
        self.zip.start_entry(layout::NCX_PATH)?;
        NcxTocWriter::new(&self.ctx.documents.nav_map, &mut self.zip).write_ncx()
    }

    /// Writes the EPUB 3 navigation document.
    pub(super) fn write_nav(&mut self) -> WriterResult<()> {
        let documents = self.ctx.documents;

        self.zip.start_entry(layout::NAV_PATH)?;
        XhtmlTocWriter::new(&documents.nav, &documents.nav_map, &mut self.zip).write_xhtml()
    }
}
