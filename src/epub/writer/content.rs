use crate::epub::consts::{layout, xhtml, xml};
use crate::epub::document::ContentPage;
use crate::epub::identity;
use crate::epub::state::ImageAsset;
use crate::epub::writer::EpubWriter;
use crate::errors::PagepubError;
use crate::writer::WriterResult;
use crate::writer::xml::{Prolog, XmlWriter, write_element};
use std::fs::File;
use std::io::{self, Write};

/// Writes a content page: an XHTML document wrapping exactly one image.
struct PageWriter<'ebook, W> {
    page: &'ebook ContentPage,
    writer: XmlWriter<'ebook, W>,
}

impl<'ebook, W: Write> PageWriter<'ebook, W> {
    fn new(page: &'ebook ContentPage, writer: W) -> Self {
        Self {
            writer: XmlWriter::new(writer),
            page,
        }
    }

    fn write_page(mut self) -> WriterResult<()> {
        let page = self.page;

        self.writer.write_prolog(Prolog::Xhtml)?;

        write_element! {
            writer: self.writer,
            tag: xhtml::HTML,
            attributes: {
                xml::XMLNS => xhtml::XHTML_NS,
            }
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: xhtml::HEAD,
                    inner_content: {
                        write_element! {
                            writer: self.writer,
                            tag: xhtml::TITLE,
                            text: &page.title,
                        }?;
                    }
                }?;
                self.write_body()?;
            }
        }
    }

    fn write_body(&mut self) -> WriterResult<()> {
        let page = self.page;

        write_element! {
            writer: self.writer,
            tag: xhtml::BODY,
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: xhtml::DIV,
                    inner_content: {
                        write_element! {
                            writer: self.writer,
                            tag: xhtml::IMG,
                            attributes: {
                                xhtml::SRC => page.image_src.as_str(),
                                xhtml::ALT => page.alt.as_str(),
                            }
                        }?;
                    }
                }?;
            }
        }
    }
}

impl<W: Write> EpubWriter<'_, W> {
    /// Writes the pages and images of every group, in group order.
    ///
    /// Image bytes are streamed from their source file.
    pub(super) fn write_groups(&mut self) -> WriterResult<()> {
        let state = self.ctx.state;
        let progress = self.ctx.progress;

        progress.set_total(state.image_count());

        for (group, entry) in state.groups().iter().enumerate() {
            for page in &entry.pages {
                self.write_content_page(page)?;
            }
            for (item, image) in (1..).zip(&entry.images) {
                self.write_image(group, item, image)?;
                progress.increment(1);
            }
        }
        Ok(())
    }

    fn write_content_page(&mut self, page: &ContentPage) -> WriterResult<()> {
        let path = format!("{}/{}", layout::CONTENT_DIR, page.coord.page_href());

        self.zip.start_entry(&path)?;
        PageWriter::new(page, &mut self.zip).write_page()
    }

    fn write_image(&mut self, group: usize, item: usize, image: &ImageAsset) -> WriterResult<()> {
        let path = format!("{}/{}", layout::CONTENT_DIR, identity::image_path(&image.name));
        // Open the source first so a vanished image leaves no dangling entry
        let mut source =
            File::open(&image.source).map_err(|source| PagepubError::UnreadableAsset {
                source,
                group,
                item,
                path: image.source.clone(),
            })?;

        self.zip.start_entry(&path)?;
        io::copy(&mut source, &mut self.zip)?;
        Ok(())
    }
}
