use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::{CompressionMethod, ZipArchive};

/// A temporary directory to place page images and archives in.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Encodes a tiny image, its format chosen by the extension of `relative`.
    pub fn image(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        image::RgbImage::from_pixel(2, 2, image::Rgb([200, 40, 40]))
            .save(&path)
            .unwrap();
        path
    }

    pub fn images(&self, relative: &[&str]) -> Vec<PathBuf> {
        relative.iter().map(|relative| self.image(relative)).collect()
    }
}

/// A produced EPUB archive, read back for inspection.
pub struct EpubArchive {
    zip: ZipArchive<Cursor<Vec<u8>>>,
}

impl EpubArchive {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            zip: ZipArchive::new(Cursor::new(bytes)).unwrap(),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(fs::read(path).unwrap())
    }

    /// Entry names in archive order.
    pub fn entry_names(&mut self) -> Vec<String> {
        (0..self.zip.len())
            .map(|i| self.zip.by_index(i).unwrap().name().to_owned())
            .collect()
    }

    pub fn compression(&mut self, name: &str) -> CompressionMethod {
        self.zip.by_name(name).unwrap().compression()
    }

    pub fn read_bytes(&mut self, name: &str) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.zip.by_name(name).unwrap().read_to_end(&mut bytes).unwrap();
        bytes
    }

    pub fn read_string(&mut self, name: &str) -> String {
        String::from_utf8(self.read_bytes(name)).unwrap()
    }
}

/// An XML element with its attributes and direct text content.
#[derive(Debug)]
pub struct Element {
    pub attributes: Vec<(String, String)>,
    pub text: String,
}

impl Element {
    fn new(start: &BytesStart) -> Self {
        let attributes = start
            .attributes()
            .map(|attribute| {
                let attribute = attribute.unwrap();
                let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
                let value = String::from_utf8_lossy(&attribute.value);
                let value = quick_xml::escape::unescape(&value).unwrap().into_owned();
                (key, value)
            })
            .collect();

        Self {
            attributes,
            text: String::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Collects every element named `name` (qualified, e.g. `dc:title`), in document order.
pub fn elements(xml: &str, name: &str) -> Vec<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut found = Vec::new();
    let mut open = None;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(start) if start.name().as_ref() == name.as_bytes() => {
                found.push(Element::new(&start));
                open = Some(found.len() - 1);
            }
            Event::Empty(start) if start.name().as_ref() == name.as_bytes() => {
                found.push(Element::new(&start));
            }
            Event::Text(text) => {
                if let Some(i) = open {
                    found[i].text.push_str(&String::from_utf8_lossy(&text));
                }
            }
            Event::End(end) if end.name().as_ref() == name.as_bytes() => open = None,
            Event::Eof => break,
            _ => {}
        }
    }
    found
}

/// The values of attribute `attr` across every element named `name`.
pub fn attr_values(xml: &str, name: &str, attr: &str) -> Vec<String> {
    elements(xml, name)
        .iter()
        .filter_map(|element| element.attr(attr).map(str::to_owned))
        .collect()
}

/// The text content across every element named `name`.
pub fn texts(xml: &str, name: &str) -> Vec<String> {
    elements(xml, name)
        .into_iter()
        .map(|element| element.text)
        .collect()
}

pub fn assert_stored(archive: &mut EpubArchive, name: &str) {
    assert_eq!(CompressionMethod::Stored, archive.compression(name), "{name}");
}
