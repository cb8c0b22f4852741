use crate::epub::document::ContentPage;
use std::path::PathBuf;

/// A source image, copied into the archive when the package is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ImageAsset {
    pub(crate) source: PathBuf,
    /// Unique within the package; not percent-encoded.
    pub(crate) name: String,
    pub(crate) media_type: &'static str,
}

/// The pages and images of one committed content group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct GroupEntry {
    pub(crate) pages: Vec<ContentPage>,
    pub(crate) images: Vec<ImageAsset>,
}

/// Everything accumulated by the builder besides the package-level documents.
///
/// Entries are only ever appended, one complete group at a time.
#[derive(Clone, Debug, Default)]
pub(crate) struct PackageState {
    groups: Vec<GroupEntry>,
}

impl PackageState {
    /// The index the next committed group receives.
    pub(crate) fn next_index(&self) -> usize {
        self.groups.len()
    }

    pub(crate) fn push(&mut self, entry: GroupEntry) {
        self.groups.push(entry);
    }

    pub(crate) fn groups(&self) -> &[GroupEntry] {
        &self.groups
    }

    /// Total number of images across all groups.
    pub(crate) fn image_count(&self) -> usize {
        self.groups.iter().map(|group| group.images.len()).sum()
    }
}
