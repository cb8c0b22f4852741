use crate::epub::consts::{dc, layout, opf, xml};
use crate::epub::document::{ManifestItem, PackageDocument, PackageMetadata};
use crate::epub::writer::EpubWriter;
use crate::writer::WriterResult;
use crate::writer::xml::{Prolog, XmlWriter, write_element};
use std::io::Write;

struct PackageWriter<'ebook, W> {
    package: &'ebook PackageDocument,
    writer: XmlWriter<'ebook, W>,
}

impl<'ebook, W: Write> PackageWriter<'ebook, W> {
    fn new(package: &'ebook PackageDocument, writer: W) -> Self {
        Self {
            writer: XmlWriter::new(writer),
            package,
        }
    }

    fn write_opf(mut self) -> WriterResult<()> {
        self.writer.write_prolog(Prolog::Xml)?;

        write_element! {
            writer: self.writer,
            tag: opf::PACKAGE,
            attributes: {
                xml::XMLNS     => opf::OPF_NS,
                opf::VERSION   => opf::EPUB_VERSION,
                opf::UNIQUE_ID => opf::BOOK_ID,
            }
            inner_content: {
                self.write_metadata()?;
                self.write_manifest()?;
                self.write_spine()?;
            }
        }
    }

    fn write_metadata(&mut self) -> WriterResult<()> {
        let package = self.package;
        let metadata = &package.metadata;

        write_element! {
            writer: self.writer,
            tag: opf::METADATA,
            attributes: {
                dc::XMLNS_DC   => dc::DUBLIN_CORE_NS,
                opf::XMLNS_OPF => opf::OPF_NS,
            }
            inner_content: {
                self.write_dublin_core(metadata)?;
                self.write_meta_property(dc::MODIFIED, &metadata.modified.to_string())?;
                // Rendering hints for image-based books
                self.write_meta_name(opf::PRIMARY_WRITING_MODE, opf::HORIZONTAL_RL)?;
                self.write_meta_name(opf::BOOK_TYPE, opf::COMIC)?;
            }
        }
    }

    fn write_dublin_core(&mut self, metadata: &PackageMetadata) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: dc::TITLE,
            text: &metadata.title,
        }?;
        write_element! {
            writer: self.writer,
            tag: dc::LANGUAGE,
            text: &metadata.language,
        }?;
        write_element! {
            writer: self.writer,
            tag: dc::IDENTIFIER,
            text: &metadata.identifier,
            attributes: {
                xml::ID => opf::BOOK_ID,
            }
        }?;

        if let Some(creator) = &metadata.creator {
            write_element! {
                writer: self.writer,
                tag: dc::CREATOR,
                text: creator,
            }?;
        }
        for subject in &metadata.subjects {
            write_element! {
                writer: self.writer,
                tag: dc::SUBJECT,
                text: subject,
            }?;
        }
        Ok(())
    }

    fn write_meta_property(&mut self, property: &str, value: &str) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::META,
            text: value,
            attributes: {
                opf::PROPERTY => property,
            }
        }
    }

    fn write_meta_name(&mut self, name: &str, content: &str) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::META,
            attributes: {
                opf::NAME    => name,
                opf::CONTENT => content,
            }
        }
    }

    fn write_manifest(&mut self) -> WriterResult<()> {
        let package = self.package;

        write_element! {
            writer: self.writer,
            tag: opf::MANIFEST,
            inner_content: {
                for item in &package.manifest {
                    self.write_manifest_item(item)?;
                }
            }
        }
    }

    fn write_manifest_item(&mut self, item: &ManifestItem) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::ITEM,
            attributes: {
                xml::ID         => item.id.as_str(),
                opf::HREF       => item.href.as_str(),
                opf::MEDIA_TYPE => &*item.media_type,
                opf::PROPERTIES => item.properties,
            }
        }
    }

    fn write_spine(&mut self) -> WriterResult<()> {
        let package = self.package;

        write_element! {
            writer: self.writer,
            tag: opf::SPINE,
            attributes: {
                opf::TOC => opf::NCX_ID,
            }
            inner_content: {
                for entry in &package.spine {
                    write_element! {
                        writer: self.writer,
                        tag: opf::ITEMREF,
                        attributes: {
                            opf::IDREF => entry.idref.as_str(),
                        }
                    }?;
                }
            }
        }
    }
}

impl<W: Write> EpubWriter<'_, W> {
    pub(super) fn write_package(&mut self) -> WriterResult<()> {
        self.zip.start_entry(layout::PACKAGE_PATH)?;
        PackageWriter::new(&self.ctx.documents.package, &mut self.zip).write_opf()
    }
}
