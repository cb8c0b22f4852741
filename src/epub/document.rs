//! The package-level documents and content pages, held as structured trees
//! until they are serialized by [`EpubWriter`](super::writer::EpubWriter).

use crate::book::Book;
use crate::epub::consts::{layout, mime, opf};
use crate::epub::identity::PageCoord;
use crate::util::datetime::UtcDateTime;
use std::borrow::Cow;

/// A `<manifest>` item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ManifestItem {
    pub(crate) id: String,
    /// Percent-encoded, relative to the package document.
    pub(crate) href: String,
    pub(crate) media_type: Cow<'static, str>,
    pub(crate) properties: Option<&'static str>,
}

impl ManifestItem {
    pub(crate) fn new(
        id: impl Into<String>,
        href: impl Into<String>,
        media_type: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
            media_type: media_type.into(),
            properties: None,
        }
    }

    fn properties(mut self, properties: &'static str) -> Self {
        self.properties = Some(properties);
        self
    }
}

/// A `<spine>` itemref, referencing a [`ManifestItem`] by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SpineItem {
    pub(crate) idref: String,
}

/// A navigation map entry.
///
/// Entries without an `href` only provide a label
/// (e.g., a group that contains no pages).
/// Their NCX `navPoint` has no `<content>` element, although the NCX DTD requires one;
/// reading systems display such entries as plain labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NavPoint {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) href: Option<String>,
    pub(crate) children: Vec<NavPoint>,
}

/// Dublin Core metadata and presentation hints of the package document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PackageMetadata {
    pub(crate) title: String,
    pub(crate) language: String,
    /// `urn:uuid:<book id>`
    pub(crate) identifier: String,
    pub(crate) subjects: Vec<String>,
    /// Author names joined by `,`
    pub(crate) creator: Option<String>,
    pub(crate) modified: UtcDateTime,
}

/// The package document (`content.opf`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PackageDocument {
    pub(crate) metadata: PackageMetadata,
    pub(crate) manifest: Vec<ManifestItem>,
    pub(crate) spine: Vec<SpineItem>,
}

/// The EPUB 2 navigation map document (`toc.ncx`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NavMap {
    /// `dtb:uid`, the same value as [`PackageMetadata::identifier`].
    pub(crate) uid: String,
    pub(crate) title: String,
    pub(crate) points: Vec<NavPoint>,
}

impl NavMap {
    /// The maximum depth of the navigation tree, at least `1`.
    pub(crate) fn depth(&self) -> usize {
        fn depth_of(point: &NavPoint) -> usize {
            1 + point.children.iter().map(depth_of).max().unwrap_or_default()
        }

        self.points.iter().map(depth_of).max().unwrap_or_default().max(1)
    }
}

/// The EPUB 3 navigation document (`nav.xhtml`).
///
/// Its lists are derived from the [`NavMap`] when written,
/// so both navigation documents never diverge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NavDocument {
    pub(crate) title: String,
}

/// The container descriptor (`META-INF/container.xml`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ContainerDocument {
    /// Archive path of the package document.
    pub(crate) root_file: &'static str,
}

/// A generated XHTML page wrapping exactly one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ContentPage {
    pub(crate) coord: PageCoord,
    pub(crate) title: String,
    /// Percent-encoded href of the image, relative to the page.
    pub(crate) image_src: String,
    /// The original base file name of the image.
    pub(crate) alt: String,
}

/// The four package-level documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Documents {
    pub(crate) container: ContainerDocument,
    pub(crate) package: PackageDocument,
    pub(crate) nav_map: NavMap,
    pub(crate) nav: NavDocument,
}

impl Documents {
    pub(crate) fn new(book: &Book, modified: UtcDateTime) -> Self {
        let identifier = format!("urn:uuid:{}", book.id());
        let authors = book.author_names();

        Self {
            container: ContainerDocument {
                root_file: layout::PACKAGE_PATH,
            },
            package: PackageDocument {
                metadata: PackageMetadata {
                    title: book.title().to_owned(),
                    language: book.language().to_owned(),
                    identifier: identifier.clone(),
                    subjects: book.tag_names().to_vec(),
                    creator: (!authors.is_empty()).then(|| authors.join(",")),
                    modified,
                },
                manifest: vec![
                    ManifestItem::new(opf::NCX_ID, layout::NCX_HREF, mime::NCX),
                    ManifestItem::new(opf::NAV_ID, layout::NAV_HREF, mime::XHTML)
                        .properties(opf::NAV_PROPERTY),
                ],
                spine: Vec::new(),
            },
            nav_map: NavMap {
                uid: identifier,
                title: book.title().to_owned(),
                points: Vec::new(),
            },
            nav: NavDocument {
                title: book.title().to_owned(),
            },
        }
    }
}
