use crate::convert::util::{Workspace, attr_values, elements, texts};
use crate::convert::{convert_to_archive, demo_archive, demo_book};
use pagepub::{Book, ContentGroup};

#[test]
fn test_container() {
    let workspace = Workspace::new();
    let container = demo_archive(&workspace).read_string("META-INF/container.xml");

    assert_eq!(
        ["OEBPS/content.opf"],
        attr_values(&container, "rootfile", "full-path").as_slice(),
    );
    assert_eq!(
        ["application/oebps-package+xml"],
        attr_values(&container, "rootfile", "media-type").as_slice(),
    );
}

#[test]
fn test_package_metadata() {
    let workspace = Workspace::new();
    let opf = demo_archive(&workspace).read_string("OEBPS/content.opf");

    let package = &elements(&opf, "package")[0];
    assert_eq!(Some("3.0"), package.attr("version"));
    assert_eq!(Some("BookID"), package.attr("unique-identifier"));

    let identifier = &elements(&opf, "dc:identifier")[0];
    assert_eq!(Some("BookID"), identifier.attr("id"));
    assert_eq!("urn:uuid:abc123", identifier.text);

    assert_eq!(["Demo"], texts(&opf, "dc:title").as_slice());
    assert_eq!(["en"], texts(&opf, "dc:language").as_slice());
    assert_eq!(["A,B"], texts(&opf, "dc:creator").as_slice());
    assert_eq!(["Action", "Comedy"], texts(&opf, "dc:subject").as_slice());

    let metas = elements(&opf, "meta");
    let modified = metas
        .iter()
        .find(|meta| meta.attr("property") == Some("dcterms:modified"))
        .unwrap();
    // YYYY-MM-DDThh:mm:ssZ
    assert_eq!(20, modified.text.len());
    assert!(modified.text.ends_with('Z'));

    let hints: Vec<_> = metas
        .iter()
        .filter_map(|meta| Some((meta.attr("name")?, meta.attr("content")?)))
        .collect();
    assert_eq!(
        [("primary-writing-mode", "horizontal-rl"), ("book-type", "comic")],
        hints.as_slice(),
    );
}

#[test]
fn test_no_authors() {
    let workspace = Workspace::new();
    let images = workspace.images(&["p1.png"]);
    let book = Book::new("id", "Untitled", "ja");
    let opf = convert_to_archive(&book, vec![ContentGroup::new("Ch.1", images)])
        .read_string("OEBPS/content.opf");

    assert!(elements(&opf, "dc:creator").is_empty());
    assert!(elements(&opf, "dc:subject").is_empty());
}

#[test]
fn test_manifest_and_spine() {
    let workspace = Workspace::new();
    let opf = demo_archive(&workspace).read_string("OEBPS/content.opf");

    let items = elements(&opf, "item");
    let manifest: Vec<_> = items
        .iter()
        .map(|item| {
            (
                item.attr("id").unwrap(),
                item.attr("href").unwrap(),
                item.attr("media-type").unwrap(),
            )
        })
        .collect();

    assert_eq!(
        [
            ("ncx", "toc.ncx", "application/x-dtbncx+xml"),
            ("nav", "nav.xhtml", "application/xhtml+xml"),
            ("XHTML_0_1", "xhtml/0_1.xhtml", "application/xhtml+xml"),
            ("IMAGES_0_1", "images/0_p1.png", "image/png"),
            ("XHTML_0_2", "xhtml/0_2.xhtml", "application/xhtml+xml"),
            ("IMAGES_0_2", "images/0_p2.png", "image/png"),
        ],
        manifest.as_slice(),
    );
    assert_eq!(Some("nav"), items[1].attr("properties"));

    assert_eq!(["ncx"], attr_values(&opf, "spine", "toc").as_slice());
    assert_eq!(
        ["XHTML_0_1", "XHTML_0_2"],
        attr_values(&opf, "itemref", "idref").as_slice(),
    );
}

#[test]
fn test_spine_across_groups() {
    let workspace = Workspace::new();
    let groups = vec![
        ContentGroup::new("Extras", Vec::<&str>::new()),
        ContentGroup::new("Ch.1", workspace.images(&["a/1.jpg", "a/2.png"])),
        ContentGroup::new("Ch.2", workspace.images(&["b/1.png"])),
    ];
    let mut archive = convert_to_archive(&demo_book(), groups);
    let opf = archive.read_string("OEBPS/content.opf");

    assert_eq!(
        ["XHTML_1_1", "XHTML_1_2", "XHTML_2_1"],
        attr_values(&opf, "itemref", "idref").as_slice(),
    );
    assert!(attr_values(&opf, "item", "media-type").contains(&"image/jpeg".to_owned()));
}

#[test]
fn test_ncx() {
    let workspace = Workspace::new();
    let groups = vec![
        ContentGroup::new("Extras", Vec::<&str>::new()),
        ContentGroup::new("Ch.1", workspace.images(&["p1.png", "p2.png"])),
    ];
    let ncx = convert_to_archive(&demo_book(), groups).read_string("OEBPS/toc.ncx");

    let metas: Vec<_> = elements(&ncx, "meta")
        .iter()
        .map(|meta| {
            (
                meta.attr("name").unwrap().to_owned(),
                meta.attr("content").unwrap().to_owned(),
            )
        })
        .collect();
    assert_eq!(("dtb:uid".to_owned(), "urn:uuid:abc123".to_owned()), metas[0]);
    assert_eq!(("dtb:depth".to_owned(), "2".to_owned()), metas[1]);

    assert_eq!(
        ["TOC_0_INIT", "TOC_1_INIT", "TOC_1_1", "TOC_1_2"],
        attr_values(&ncx, "navPoint", "id").as_slice(),
    );
    // Document title, then labels in document order
    assert_eq!(
        ["Demo", "Extras", "Ch.1", "Page 1", "Page 2"],
        texts(&ncx, "text").as_slice(),
    );
    // The empty group has no content
    assert_eq!(
        ["xhtml/1_1.xhtml", "xhtml/1_1.xhtml", "xhtml/1_2.xhtml"],
        attr_values(&ncx, "content", "src").as_slice(),
    );
}

#[test]
fn test_nav() {
    let workspace = Workspace::new();
    let groups = vec![
        ContentGroup::new("Ch.1", workspace.images(&["a/1.png", "a/2.png"])),
        ContentGroup::new("Extras", Vec::<&str>::new()),
        ContentGroup::new("Ch.3", workspace.images(&["c/1.png"])),
    ];
    let nav = convert_to_archive(&demo_book(), groups).read_string("OEBPS/nav.xhtml");

    assert!(nav.contains("<!DOCTYPE html>"));
    assert_eq!(["Demo"], texts(&nav, "title").as_slice());
    assert_eq!(
        ["toc", "page-list"],
        attr_values(&nav, "nav", "epub:type").as_slice(),
    );
    assert_eq!(["hidden"], attr_values(&nav, "nav", "hidden").as_slice());

    // Groups with pages, then every page
    assert_eq!(
        ["Ch.1", "Ch.3", "Page 1", "Page 2", "Page 3"],
        texts(&nav, "a").as_slice(),
    );
    assert_eq!(
        [
            "xhtml/0_1.xhtml",
            "xhtml/2_1.xhtml",
            "xhtml/0_1.xhtml",
            "xhtml/0_2.xhtml",
            "xhtml/2_1.xhtml",
        ],
        attr_values(&nav, "a", "href").as_slice(),
    );
}

#[test]
fn test_nav_empty_book() {
    let nav = convert_to_archive(&demo_book(), Vec::new()).read_string("OEBPS/nav.xhtml");

    assert!(elements(&nav, "a").is_empty());
    assert_eq!(["Demo", "Demo"], texts(&nav, "span").as_slice());
}

#[test]
fn test_content_page() {
    let workspace = Workspace::new();
    let images = workspace.images(&["ch1/page 01.png"]);
    let mut archive = convert_to_archive(&demo_book(), vec![ContentGroup::new("Ch.1", images)]);
    let page = archive.read_string("OEBPS/xhtml/0_1.xhtml");

    assert!(page.starts_with("<?xml"));
    assert!(page.contains("<!DOCTYPE html>"));
    assert_eq!(["Ch.1"], texts(&page, "title").as_slice());

    let img = elements(&page, "img");
    assert_eq!(1, img.len());
    assert_eq!(Some("../images/0_page%2001.png"), img[0].attr("src"));
    assert_eq!(Some("page 01.png"), img[0].attr("alt"));

    // The archive entry itself is not percent-encoded
    assert!(archive.entry_names().contains(&"OEBPS/images/0_page 01.png".to_owned()));
}

#[test]
fn test_content_page_alt_keeps_whitespace() {
    let workspace = Workspace::new();
    let images = workspace.images(&[" p1.png"]);
    let mut archive = convert_to_archive(&demo_book(), vec![ContentGroup::new("Ch.1", images)]);
    let page = archive.read_string("OEBPS/xhtml/0_1.xhtml");

    assert_eq!([" p1.png"], attr_values(&page, "img", "alt").as_slice());
    assert_eq!(["../images/0_%20p1.png"], attr_values(&page, "img", "src").as_slice());
}
