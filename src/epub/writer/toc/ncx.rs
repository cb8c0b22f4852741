use crate::epub::consts::{ncx, xml};
use crate::epub::document::{NavMap, NavPoint};
use crate::writer::WriterResult;
use crate::writer::xml::{Prolog, XmlWriter, write_element};
use std::io::Write;

pub(super) struct NcxTocWriter<'ebook, W> {
    nav_map: &'ebook NavMap,
    writer: XmlWriter<'ebook, W>,
}

impl<'ebook, W: Write> NcxTocWriter<'ebook, W> {
    pub(super) fn new(nav_map: &'ebook NavMap, writer: W) -> Self {
        Self {
            writer: XmlWriter::new(writer),
            nav_map,
        }
    }

    pub(super) fn write_ncx(mut self) -> WriterResult<()> {
        // DOCTYPE for NCX is omitted as EPUB 2 does not require it
        self.writer.write_prolog(Prolog::Xml)?;

        write_element! {
            writer: self.writer,
            tag: ncx::NCX,
            attributes: {
                xml::XMLNS     => ncx::NCX_NS,
                ncx::XMLNS_NCX => ncx::NCX_NS,
                ncx::VERSION   => ncx::NCX_VERSION,
            }
            inner_content: {
                self.write_head()?;
                self.write_doc_title()?;
                self.write_nav_map()?;
            }
        }
    }

    fn write_head(&mut self) -> WriterResult<()> {
        const ZERO: &str = "0";

        let nav_map = self.nav_map;

        write_element! {
            writer: self.writer,
            tag: ncx::HEAD,
            inner_content: {
                self.write_meta(ncx::DTB_UID, &nav_map.uid)?;
                self.write_meta(ncx::DTB_DEPTH, &nav_map.depth().to_string())?;
                self.write_meta(ncx::DTB_TOTAL_PAGE_COUNT, ZERO)?;
                self.write_meta(ncx::DTB_MAX_PAGE_NUMBER, ZERO)?;
            }
        }
    }

    fn write_meta(&mut self, name: &str, content: &str) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: ncx::META,
            attributes: {
                ncx::NAME    => name,
                ncx::CONTENT => content,
            }
        }
    }

    fn write_doc_title(&mut self) -> WriterResult<()> {
        let nav_map = self.nav_map;

        write_element! {
            writer: self.writer,
            tag: ncx::DOC_TITLE,
            inner_content: {
                self.write_text(&nav_map.title)?;
            }
        }
    }

    fn write_nav_map(&mut self) -> WriterResult<()> {
        let nav_map = self.nav_map;

        write_element! {
            writer: self.writer,
            tag: ncx::NAV_MAP,
            inner_content: {
                for point in &nav_map.points {
                    self.write_nav_point(point)?;
                }
            }
        }
    }

    fn write_nav_point(&mut self, point: &NavPoint) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: ncx::NAV_POINT,
            attributes: {
                xml::ID => point.id.as_str(),
            }
            inner_content: {
                self.write_nav_label(&point.label)?;
                // Label-only entries (e.g., empty groups) omit the DTD-required content
                if let Some(href) = &point.href {
                    self.write_content_src(href)?;
                }
                for child in &point.children {
                    self.write_nav_point(child)?;
                }
            }
        }
    }

    fn write_nav_label(&mut self, label: &str) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: ncx::NAV_LABEL,
            inner_content: {
                self.write_text(label)?;
            }
        }
    }

    fn write_text(&mut self, text: &str) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: ncx::TEXT,
            text: text,
        }
    }

    fn write_content_src(&mut self, src: &str) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: ncx::CONTENT,
            attributes: {
                ncx::SRC => src,
            }
        }
    }
}
