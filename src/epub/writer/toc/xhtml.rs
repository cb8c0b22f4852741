use crate::epub::consts::{epub, xhtml, xml};
use crate::epub::document::{NavDocument, NavMap, NavPoint};
use crate::writer::WriterResult;
use crate::writer::xml::{Prolog, XmlWriter, write_element};
use std::io::Write;

pub(super) struct XhtmlTocWriter<'ebook, W> {
    nav: &'ebook NavDocument,
    nav_map: &'ebook NavMap,
    writer: XmlWriter<'ebook, W>,
}

impl<'ebook, W: Write> XhtmlTocWriter<'ebook, W> {
    pub(super) fn new(nav: &'ebook NavDocument, nav_map: &'ebook NavMap, writer: W) -> Self {
        Self {
            writer: XmlWriter::new(writer),
            nav,
            nav_map,
        }
    }

    pub(super) fn write_xhtml(mut self) -> WriterResult<()> {
        self.writer.write_prolog(Prolog::Xhtml)?;

        write_element! {
            writer: self.writer,
            tag: xhtml::HTML,
            attributes: {
                xml::XMLNS  => xhtml::XHTML_NS,
                epub::XMLNS => epub::EPUB_NS,
            }
            inner_content: {
                self.write_nav_head()?;
                self.write_nav_body()?;
            }
        }
    }

    fn write_nav_head(&mut self) -> WriterResult<()> {
        let nav = self.nav;

        write_element! {
            writer: self.writer,
            tag: xhtml::HEAD,
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: xhtml::META,
                    attributes: {
                        xhtml::CHARSET => xhtml::UTF_8,
                    }
                }?;
                write_element! {
                    writer: self.writer,
                    tag: xhtml::TITLE,
                    text: &nav.title,
                }?;
            }
        }
    }

    fn write_nav_body(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: xhtml::BODY,
            inner_content: {
                self.write_toc()?;
                self.write_page_list()?;
            }
        }
    }

    /// One entry per group that has pages.
    fn write_toc(&mut self) -> WriterResult<()> {
        let nav_map = self.nav_map;
        let entries = nav_map
            .points
            .iter()
            .filter_map(|point| Some((point.label.as_str(), point.href.as_deref()?)));

        self.write_nav_root(epub::TOC, None, entries)
    }

    /// One entry per content page, numbered across the whole book.
    fn write_page_list(&mut self) -> WriterResult<()> {
        let nav_map = self.nav_map;
        let pages: Vec<_> = nav_map
            .points
            .iter()
            .flat_map(|point| &point.children)
            .filter_map(|page: &NavPoint| page.href.as_deref())
            .enumerate()
            .map(|(i, href)| (format!("Page {}", i + 1), href))
            .collect();
        let entries = pages.iter().map(|(label, href)| (label.as_str(), *href));

        // Page lists are not meant to be rendered as a table of contents
        self.write_nav_root(epub::PAGE_LIST, Some(xhtml::HIDDEN), entries)
    }

    fn write_nav_root<'a>(
        &mut self,
        epub_type: &str,
        hidden: Option<&str>,
        entries: impl Iterator<Item = (&'a str, &'a str)>,
    ) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: xhtml::NAV,
            attributes: {
                xml::ID       => epub_type,
                epub::TYPE    => epub_type,
                xhtml::HIDDEN => hidden,
            }
            inner_content: {
                self.write_nav_entries(entries)?;
            }
        }
    }

    fn write_nav_entries<'a>(
        &mut self,
        mut entries: impl Iterator<Item = (&'a str, &'a str)>,
    ) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: xhtml::ORDERED_LIST,
            inner_content: {
                match entries.next() {
                    Some(first) => {
                        for (label, href) in std::iter::once(first).chain(entries) {
                            self.write_nav_entry(label, Some(href))?;
                        }
                    }
                    // A navigation list must not be empty
                    None => {
                        let nav = self.nav;
                        self.write_nav_entry(&nav.title, None)?;
                    }
                }
            }
        }
    }

    fn write_nav_entry(&mut self, label: &str, href: Option<&str>) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: xhtml::LIST_ITEM,
            inner_content: {
                match href {
                    Some(href) => write_element! {
                        writer: self.writer,
                        tag: xhtml::ANCHOR,
                        text: label,
                        attributes: {
                            xhtml::HREF => href,
                        }
                    }?,
                    None => write_element! {
                        writer: self.writer,
                        tag: xhtml::SPAN,
                        text: label,
                    }?,
                }
            }
        }
    }
}
