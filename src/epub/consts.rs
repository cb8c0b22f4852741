pub(crate) mod ocf {
    pub(crate) const MIMETYPE_PATH: &str = "mimetype";
    pub(crate) const MIMETYPE: &str = "application/epub+zip";
    pub(crate) const CONTAINER_PATH: &str = "META-INF/container.xml";

    pub(crate) const CONTAINER: &str = "container";
    pub(crate) const CONTAINER_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:container";
    pub(crate) const CONTAINER_VERSION: &str = "1.0";
    pub(crate) const ROOT_FILES: &str = "rootfiles";
    pub(crate) const ROOT_FILE: &str = "rootfile";

    pub(crate) const VERSION: &str = "version";
    pub(crate) const FULL_PATH: &str = "full-path";
    pub(crate) const MEDIA_TYPE: &str = "media-type";
}

/// Locations within the archive.
///
/// Paths of package documents are relative to [`CONTENT_DIR`](layout::CONTENT_DIR).
pub(crate) mod layout {
    pub(crate) const CONTENT_DIR: &str = "OEBPS";
    pub(crate) const PACKAGE_PATH: &str = "OEBPS/content.opf";
    pub(crate) const NCX_PATH: &str = "OEBPS/toc.ncx";
    pub(crate) const NAV_PATH: &str = "OEBPS/nav.xhtml";

    pub(crate) const NCX_HREF: &str = "toc.ncx";
    pub(crate) const NAV_HREF: &str = "nav.xhtml";
    pub(crate) const PAGE_DIR: &str = "xhtml";
    pub(crate) const IMAGE_DIR: &str = "images";
}

pub(crate) mod opf {
    pub(crate) const OPF_NS: &str = "http://www.idpf.org/2007/opf";
    pub(crate) const XMLNS_OPF: &str = "xmlns:opf";
    pub(crate) const EPUB_VERSION: &str = "3.0";
    pub(crate) const BOOK_ID: &str = "BookID";

    pub(crate) const PACKAGE: &str = "package";
    pub(crate) const METADATA: &str = "metadata";
    pub(crate) const MANIFEST: &str = "manifest";
    pub(crate) const SPINE: &str = "spine";
    pub(crate) const ITEM: &str = "item";
    pub(crate) const ITEMREF: &str = "itemref";
    pub(crate) const META: &str = "meta";

    pub(crate) const VERSION: &str = "version";
    pub(crate) const UNIQUE_ID: &str = "unique-identifier";
    pub(crate) const PROPERTY: &str = "property";
    pub(crate) const NAME: &str = "name";
    pub(crate) const CONTENT: &str = "content";
    pub(crate) const HREF: &str = "href";
    pub(crate) const MEDIA_TYPE: &str = "media-type";
    pub(crate) const PROPERTIES: &str = "properties";
    pub(crate) const IDREF: &str = "idref";
    pub(crate) const TOC: &str = "toc";

    pub(crate) const NAV_PROPERTY: &str = "nav";
    pub(crate) const NCX_ID: &str = "ncx";
    pub(crate) const NAV_ID: &str = "nav";

    // Presentation hints
    pub(crate) const PRIMARY_WRITING_MODE: &str = "primary-writing-mode";
    pub(crate) const HORIZONTAL_RL: &str = "horizontal-rl";
    pub(crate) const BOOK_TYPE: &str = "book-type";
    pub(crate) const COMIC: &str = "comic";
}

pub(crate) mod dc {
    pub(crate) const XMLNS_DC: &str = "xmlns:dc";
    pub(crate) const DUBLIN_CORE_NS: &str = "http://purl.org/dc/elements/1.1/";

    pub(crate) const TITLE: &str = "dc:title";
    pub(crate) const LANGUAGE: &str = "dc:language";
    pub(crate) const IDENTIFIER: &str = "dc:identifier";
    pub(crate) const CREATOR: &str = "dc:creator";
    pub(crate) const SUBJECT: &str = "dc:subject";
    pub(crate) const MODIFIED: &str = "dcterms:modified";
}

pub(crate) mod ncx {
    pub(crate) const NCX_NS: &str = "http://www.daisy.org/z3986/2005/ncx/";
    pub(crate) const XMLNS_NCX: &str = "xmlns:ncx";
    pub(crate) const NCX_VERSION: &str = "2005-1";

    pub(crate) const NCX: &str = "ncx";
    pub(crate) const HEAD: &str = "head";
    pub(crate) const META: &str = "meta";
    pub(crate) const DOC_TITLE: &str = "docTitle";
    pub(crate) const TEXT: &str = "text";
    pub(crate) const NAV_MAP: &str = "navMap";
    pub(crate) const NAV_POINT: &str = "navPoint";
    pub(crate) const NAV_LABEL: &str = "navLabel";
    pub(crate) const CONTENT: &str = "content";

    pub(crate) const VERSION: &str = "version";
    pub(crate) const NAME: &str = "name";
    pub(crate) const SRC: &str = "src";
    pub(crate) const DTB_UID: &str = "dtb:uid";
    pub(crate) const DTB_DEPTH: &str = "dtb:depth";
    pub(crate) const DTB_TOTAL_PAGE_COUNT: &str = "dtb:totalPageCount";
    pub(crate) const DTB_MAX_PAGE_NUMBER: &str = "dtb:maxPageNumber";
}

pub(crate) mod xhtml {
    pub(crate) const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

    pub(crate) const HTML: &str = "html";
    pub(crate) const HEAD: &str = "head";
    pub(crate) const TITLE: &str = "title";
    pub(crate) const META: &str = "meta";
    pub(crate) const BODY: &str = "body";
    pub(crate) const DIV: &str = "div";
    pub(crate) const IMG: &str = "img";
    pub(crate) const NAV: &str = "nav";
    pub(crate) const ORDERED_LIST: &str = "ol";
    pub(crate) const LIST_ITEM: &str = "li";
    pub(crate) const ANCHOR: &str = "a";
    pub(crate) const SPAN: &str = "span";

    pub(crate) const CHARSET: &str = "charset";
    pub(crate) const UTF_8: &str = "utf-8";
    pub(crate) const SRC: &str = "src";
    pub(crate) const ALT: &str = "alt";
    pub(crate) const HREF: &str = "href";
    pub(crate) const HIDDEN: &str = "hidden";
}

pub(crate) mod epub {
    pub(crate) const XMLNS: &str = "xmlns:epub";
    pub(crate) const EPUB_NS: &str = "http://www.idpf.org/2007/ops";

    pub(crate) const TYPE: &str = "epub:type";
    pub(crate) const TOC: &str = "toc";
    pub(crate) const PAGE_LIST: &str = "page-list";
}

pub(crate) mod xml {
    pub(crate) const XMLNS: &str = "xmlns";
    pub(crate) const ID: &str = "id";
}

pub(crate) mod mime {
    pub(crate) const XHTML: &str = "application/xhtml+xml";
    pub(crate) const NCX: &str = "application/x-dtbncx+xml";
    pub(crate) const OEBPS_PACKAGE: &str = "application/oebps-package+xml";
}
