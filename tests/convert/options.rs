use crate::convert::demo_book;
use crate::convert::util::{EpubArchive, Workspace};
use pagepub::errors::PagepubError;
use pagepub::{ContentGroup, Converter, NoProgress, OpenMode, ProgressCounter, ProgressSink};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::sync::{Mutex, Once};

/// Runs `action` once, when the first copied image is reported.
struct OnFirstImage<F> {
    action: F,
    once: Once,
}

impl<F: Fn() + Send + Sync> OnFirstImage<F> {
    fn new(action: F) -> Self {
        Self {
            action,
            once: Once::new(),
        }
    }
}

impl<F: Fn() + Send + Sync> ProgressSink for OnFirstImage<F> {
    fn set_total(&self, _total: usize) {}

    fn increment(&self, _amount: usize) {
        self.once.call_once(&self.action);
    }
}

fn temp_leftovers(workspace: &Workspace) -> Vec<OsString> {
    fs::read_dir(workspace.path(""))
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name.to_string_lossy().starts_with(".pagepub-"))
        .collect()
}

#[test]
fn test_create_new_existing_target() {
    let workspace = Workspace::new();
    let target = workspace.path("book.epub");
    fs::write(&target, "existing").unwrap();

    let groups = [ContentGroup::new("Ch.1", workspace.images(&["p1.png"]))];
    let error = Converter::new()
        .unwrap()
        .convert(&demo_book(), groups, &target, &NoProgress)
        .unwrap_err();

    assert!(matches!(error, PagepubError::TargetExists(path) if path == target));
    // Untouched
    assert_eq!("existing", fs::read_to_string(&target).unwrap());
}

#[test]
fn test_overwrite_existing_target() {
    let workspace = Workspace::new();
    let target = workspace.path("book.epub");
    fs::write(&target, "existing").unwrap();

    let groups = [ContentGroup::new("Ch.1", workspace.images(&["p1.png"]))];
    Converter::new()
        .unwrap()
        .open_mode(OpenMode::Overwrite)
        .convert(&demo_book(), groups, &target, &NoProgress)
        .unwrap();

    let mut archive = EpubArchive::open(&target);
    assert_eq!("application/epub+zip", archive.read_string("mimetype"));
    // No temporary file is left behind
    let leftovers = temp_leftovers(&workspace);
    assert!(leftovers.is_empty(), "{leftovers:?}");
}

#[test]
fn test_create_new_target_created_during_write() {
    let workspace = Workspace::new();
    let target = workspace.path("book.epub");
    let progress = OnFirstImage::new(|| fs::write(&target, "user data").unwrap());

    let groups = [ContentGroup::new("Ch.1", workspace.images(&["p1.png", "p2.png"]))];
    let error = Converter::new()
        .unwrap()
        .convert(&demo_book(), groups, &target, &progress)
        .unwrap_err();

    assert!(matches!(error, PagepubError::TargetExists(path) if path == target));
    assert_eq!("user data", fs::read_to_string(&target).unwrap());
    assert!(temp_leftovers(&workspace).is_empty());
}

#[test]
fn test_targets_sharing_file_stem() {
    let workspace = Workspace::new();
    let epub = workspace.path("book.epub");
    let zip = workspace.path("book.zip");
    let unrelated = workspace.path("book.pagepub.tmp");
    fs::write(&unrelated, "user data").unwrap();

    let converter = Converter::new().unwrap();
    let inner_images = workspace.images(&["inner/p1.png"]);
    let inner_result = Mutex::new(None);
    // A second conversion runs while the first is still writing
    let progress = OnFirstImage::new(|| {
        let group = ContentGroup::new("Inner", inner_images.clone());
        let result = converter.convert(&demo_book(), [group], &zip, &NoProgress);
        *inner_result.lock().unwrap() = Some(result);
    });

    let groups = [ContentGroup::new("Ch.1", workspace.images(&["p1.png", "p2.png"]))];
    converter
        .convert(&demo_book(), groups, &epub, &progress)
        .unwrap();
    inner_result.lock().unwrap().take().unwrap().unwrap();

    // Fixed documents, then a page and an image per image
    assert_eq!(9, EpubArchive::open(&epub).entry_names().len());
    assert_eq!(7, EpubArchive::open(&zip).entry_names().len());
    assert_eq!("user data", fs::read_to_string(&unrelated).unwrap());
    assert!(temp_leftovers(&workspace).is_empty());
}

#[test]
fn test_unreadable_asset() {
    let workspace = Workspace::new();
    let target = workspace.path("book.epub");
    let mut images = workspace.images(&["ch1/p1.png"]);
    images.push(workspace.path("ch1/missing.png"));

    let progress = ProgressCounter::new();
    let groups = [
        ContentGroup::new("Ch.0", workspace.images(&["ch0/p1.png"])),
        ContentGroup::new("Ch.1", images),
    ];
    let error = Converter::new()
        .unwrap()
        .convert(&demo_book(), groups, &target, &progress)
        .unwrap_err();

    match error {
        PagepubError::UnreadableAsset {
            source,
            group,
            item,
            path,
        } => {
            assert_eq!(ErrorKind::NotFound, source.kind());
            assert_eq!((1, 2), (group, item));
            assert_eq!(workspace.path("ch1/missing.png"), path);
        }
        error => panic!("unexpected error: {error:?}"),
    }
    // Nothing is written
    assert!(!target.exists());
    assert!(temp_leftovers(&workspace).is_empty());
    assert_eq!(0, progress.completed());
}

#[test]
fn test_unrecognized_image() {
    let workspace = Workspace::new();
    let text = workspace.path("notes.png");
    fs::write(&text, "not an image").unwrap();

    let error = Converter::new()
        .unwrap()
        .to_vec(&demo_book(), [ContentGroup::new("Ch.1", [text])], &NoProgress)
        .unwrap_err();

    assert!(matches!(
        error,
        PagepubError::UnreadableAsset { group: 0, item: 1, .. }
    ));
}

#[test]
fn test_write_to_writer() {
    let workspace = Workspace::new();
    let groups = [ContentGroup::new("Ch.1", workspace.images(&["p1.png"]))];

    let bytes = Converter::new()
        .unwrap()
        .write(&demo_book(), groups, Vec::new(), &NoProgress)
        .unwrap();
    let mut archive = EpubArchive::new(bytes);

    assert!(archive.entry_names().contains(&"OEBPS/images/0_p1.png".to_owned()));
}

#[cfg(feature = "async-tokio")]
#[tokio::test]
async fn test_convert_async() {
    use std::sync::Arc;

    let workspace = Workspace::new();
    let target = workspace.path("book.epub");
    let progress = ProgressCounter::new();
    let groups = vec![ContentGroup::new("Ch.1", workspace.images(&["p1.png", "p2.jpg"]))];

    Converter::new()
        .unwrap()
        .convert_async(demo_book(), groups, &target, Arc::new(progress.clone()))
        .await
        .unwrap();

    assert_eq!(2, progress.completed());
    assert_eq!(9, EpubArchive::open(&target).entry_names().len());
}
