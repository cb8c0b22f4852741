use crate::epub::consts::{mime, ocf, xml};
use crate::epub::document::ContainerDocument;
use crate::epub::writer::EpubWriter;
use crate::writer::WriterResult;
use crate::writer::xml::{Prolog, XmlWriter, write_element};
use std::io::Write;

struct ContainerWriter<'ebook, W> {
    container: &'ebook ContainerDocument,
    writer: XmlWriter<'ebook, W>,
}

impl<'ebook, W: Write> ContainerWriter<'ebook, W> {
    fn new(container: &'ebook ContainerDocument, writer: W) -> Self {
        Self {
            writer: XmlWriter::new(writer),
            container,
        }
    }

    fn write_container(mut self) -> WriterResult<()> {
        self.writer.write_prolog(Prolog::Xml)?;

        write_element! {
            writer: self.writer,
            tag: ocf::CONTAINER,
            attributes: {
                ocf::VERSION => ocf::CONTAINER_VERSION,
                xml::XMLNS   => ocf::CONTAINER_NS,
            }
            inner_content: {
                self.write_root_files()?;
            }
        }
    }

    fn write_root_files(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: ocf::ROOT_FILES,
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: ocf::ROOT_FILE,
                    attributes: {
                        ocf::FULL_PATH  => self.container.root_file,
                        ocf::MEDIA_TYPE => mime::OEBPS_PACKAGE,
                    }
                }?;
            }
        }
    }
}

impl<W: Write> EpubWriter<'_, W> {
    pub(super) fn write_container(&mut self) -> WriterResult<()> {
        self.zip.start_entry(ocf::CONTAINER_PATH)?;
        ContainerWriter::new(&self.ctx.documents.container, &mut self.zip).write_container()
    }
}
