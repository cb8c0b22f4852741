//! Stable identifiers and relative hrefs for every generated resource.
//!
//! Hrefs are relative to the content directory (`OEBPS/`),
//! which is also the directory of the package, NCX and navigation documents.

use crate::epub::consts::layout;
use crate::util::uri;

/// The coordinate of a content page: a zero-based group index
/// and a one-based item index within that group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct PageCoord {
    pub(crate) group: usize,
    pub(crate) item: usize,
}

impl PageCoord {
    pub(crate) fn new(group: usize, item: usize) -> Self {
        Self { group, item }
    }

    /// `xhtml/<group>_<item>.xhtml`
    pub(crate) fn page_href(self) -> String {
        format!("{}/{}_{}.xhtml", layout::PAGE_DIR, self.group, self.item)
    }

    /// `XHTML_<group>_<item>`
    pub(crate) fn page_id(self) -> String {
        format!("XHTML_{}_{}", self.group, self.item)
    }

    /// `IMAGES_<group>_<item>`
    pub(crate) fn image_id(self) -> String {
        format!("IMAGES_{}_{}", self.group, self.item)
    }

    /// `TOC_<group>_<item>`
    pub(crate) fn nav_point_id(self) -> String {
        format!("TOC_{}_{}", self.group, self.item)
    }
}

/// The archive file name of an image: `<group>_<file_name>`.
///
/// The name is not percent-encoded.
pub(crate) fn image_name(group: usize, file_name: &str) -> String {
    format!("{group}_{file_name}")
}

/// The archive entry of an image, relative to the content directory:
/// `images/<group>_<file_name>`.
pub(crate) fn image_path(image_name: &str) -> String {
    format!("{}/{image_name}", layout::IMAGE_DIR)
}

/// The percent-encoded href of an image, relative to the content directory.
pub(crate) fn image_href(image_name: &str) -> String {
    format!("{}/{}", layout::IMAGE_DIR, uri::encode_segment(image_name))
}

/// The percent-encoded href of an image, relative to a content page.
pub(crate) fn image_src(image_name: &str) -> String {
    format!("../{}", image_href(image_name))
}

/// `TOC_<group>_INIT`
pub(crate) fn group_nav_id(group: usize) -> String {
    format!("TOC_{group}_INIT")
}

/// The href of the first page of a group.
pub(crate) fn group_nav_href(group: usize) -> String {
    PageCoord::new(group, 1).page_href()
}
