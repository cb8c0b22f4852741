use crate::book::Book;
use crate::capability::Capabilities;
use crate::config::Compression;
use crate::epub::consts::mime;
use crate::epub::document::{ContentPage, Documents, ManifestItem, NavPoint, SpineItem};
use crate::epub::identity::{self, PageCoord};
use crate::epub::state::{GroupEntry, ImageAsset, PackageState};
use crate::epub::writer::EpubWriter;
use crate::errors::{PagepubError, PagepubResult};
use crate::progress::ProgressSink;
use crate::util::datetime::UtcDateTime;
use crate::util::uri;
use std::borrow::Cow;
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A complete, not yet committed group.
struct StagedGroup {
    nav_point: NavPoint,
    manifest: Vec<ManifestItem>,
    spine: Vec<SpineItem>,
    entry: GroupEntry,
}

/// Assembles content groups into the package documents.
///
/// Groups are registered atomically: either every facet of a group
/// (pages, images, manifest items, spine entries and navigation points)
/// is added, or none is and the group index is not consumed.
pub(crate) struct EpubBuilder<'a> {
    capabilities: &'a Capabilities,
    documents: Documents,
    state: PackageState,
}

impl<'a> EpubBuilder<'a> {
    pub(crate) fn new(capabilities: &'a Capabilities, book: &Book) -> Self {
        Self::with_modified(capabilities, book, UtcDateTime::now())
    }

    pub(crate) fn with_modified(
        capabilities: &'a Capabilities,
        book: &Book,
        modified: UtcDateTime,
    ) -> Self {
        Self {
            capabilities,
            documents: Documents::new(book, modified),
            state: PackageState::default(),
        }
    }

    /// Registers a group of page images under the next group index.
    ///
    /// # Errors
    /// [`PagepubError::UnreadableAsset`] if an image cannot be opened
    /// or its format cannot be determined.
    /// The builder is left unchanged.
    pub(crate) fn add_group(&mut self, title: &str, images: &[PathBuf]) -> PagepubResult<()> {
        let group = self.state.next_index();
        let staged = self.stage_group(group, title, images)?;

        tracing::debug!(group, title, pages = images.len(), "registered content group");
        self.commit(staged);
        Ok(())
    }

    fn stage_group(
        &self,
        group: usize,
        title: &str,
        images: &[PathBuf],
    ) -> PagepubResult<StagedGroup> {
        let mut staged = StagedGroup {
            nav_point: NavPoint {
                id: identity::group_nav_id(group),
                label: title.to_owned(),
                // Groups without pages only provide a label
                href: (!images.is_empty()).then(|| identity::group_nav_href(group)),
                children: Vec::with_capacity(images.len()),
            },
            manifest: Vec::with_capacity(images.len() * 2),
            spine: Vec::with_capacity(images.len()),
            entry: GroupEntry::default(),
        };
        let mut names = HashSet::new();

        for (item, path) in (1..).zip(images) {
            let coord = PageCoord::new(group, item);
            let unreadable = |source| PagepubError::UnreadableAsset {
                source,
                group,
                item,
                path: path.clone(),
            };

            let file_name = uri::file_name(path).ok_or_else(|| {
                unreadable(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "image path has no file name",
                ))
            })?;
            let media_type = self.capabilities.media_type(path).map_err(unreadable)?;
            let name = unique_image_name(&mut names, coord, &file_name, path);

            staged.manifest.extend([
                ManifestItem::new(coord.page_id(), coord.page_href(), mime::XHTML),
                ManifestItem::new(coord.image_id(), identity::image_href(&name), media_type),
            ]);
            staged.spine.push(SpineItem {
                idref: coord.page_id(),
            });
            staged.nav_point.children.push(NavPoint {
                id: coord.nav_point_id(),
                label: format!("Page {item}"),
                href: Some(coord.page_href()),
                children: Vec::new(),
            });
            staged.entry.pages.push(ContentPage {
                coord,
                title: title.to_owned(),
                image_src: identity::image_src(&name),
                alt: file_name.into_owned(),
            });
            staged.entry.images.push(ImageAsset {
                source: path.clone(),
                name,
                media_type,
            });
        }
        Ok(staged)
    }

    fn commit(&mut self, staged: StagedGroup) {
        let package = &mut self.documents.package;

        package.manifest.extend(staged.manifest);
        package.spine.extend(staged.spine);
        self.documents.nav_map.points.push(staged.nav_point);
        self.state.push(staged.entry);
    }

    /// Writes the EPUB archive, returning the underlying writer.
    pub(crate) fn write<W: Write>(
        &self,
        compression: Compression,
        progress: &dyn ProgressSink,
        writer: W,
    ) -> PagepubResult<W> {
        EpubWriter::new(&self.documents, &self.state, compression, progress, writer).write()
    }

    #[cfg(test)]
    pub(crate) fn documents(&self) -> &Documents {
        &self.documents
    }

    pub(crate) fn state(&self) -> &PackageState {
        &self.state
    }
}

/// Image names share a flat directory, so identical file names
/// within a group are prefixed with their item index until unique.
fn unique_image_name(
    names: &mut HashSet<String>,
    coord: PageCoord,
    file_name: &str,
    path: &Path,
) -> String {
    let mut file_name = Cow::Borrowed(file_name);

    loop {
        let name = identity::image_name(coord.group, &file_name);

        if names.insert(name.clone()) {
            return name;
        }
        tracing::warn!(
            group = coord.group,
            item = coord.item,
            path = %path.display(),
            "duplicate image file name `{file_name}` within group",
        );
        file_name = Cow::Owned(format!("{}_{file_name}", coord.item));
    }
}
