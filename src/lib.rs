//! # pagepub
//! - Repository: <https://github.com/DevinSterling/pagepub>
//! - Documentation: <https://docs.rs/pagepub>
//!
//! Packages ordered groups of page images (chapters, volumes) into
//! EPUB 3 archives, with an EPUB 2 NCX for older reading systems.
//!
//! Every image becomes one XHTML content page.
//! Groups appear in the table of contents with one entry per page,
//! and pages are read in the order the groups and images were given.
//!
//! # Features
//! Image formats whose media type can be detected:
//!
//! | Feature | Default | Format |
//! |---------|---------|--------|
//! | `png`   | ✓       | PNG    |
//! | `jpeg`  | ✓       | JPEG   |
//! | `gif`   | ✓       | GIF    |
//! | `webp`  | ✓       | WebP   |
//!
//! With none enabled, [`Converter::new`] fails with
//! [`MissingCapability`](errors::PagepubError::MissingCapability).
//!
//! `async-tokio` enables [`Converter::convert_async`].
//!
//! # Logging
//! Diagnostics are emitted through [`tracing`];
//! no subscriber is installed by this crate.
//!
//! # Examples
//! Converting two chapters, reporting progress:
//! ```no_run
//! use pagepub::{Book, Compression, ContentGroup, Converter, ProgressCounter};
//!
//! # fn main() -> pagepub::errors::PagepubResult<()> {
//! let book = Book::new("abc123", "Demo", "en")
//!     .authors(["A", "B"])
//!     .tags(["Action"]);
//! let groups = vec![
//!     ContentGroup::new("Ch.1", ["ch1/001.png", "ch1/002.png"]),
//!     ContentGroup::new("Ch.2", ["ch2/001.jpg"]),
//! ];
//! let progress = ProgressCounter::new();
//!
//! Converter::new()?
//!     .compression(Compression::from_env()?)
//!     .convert(&book, groups, "demo.epub", &progress)?;
//!
//! println!("{}/{} images", progress.completed(), progress.total());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "async-tokio")]
mod async_convert;
mod book;
mod capability;
mod config;
mod convert;
mod epub;
mod progress;
mod util;
mod writer;

pub mod errors;

pub use self::book::{Book, ContentGroup};
pub use self::config::{Compression, CompressionMethod, OpenMode};
pub use self::convert::Converter;
pub use self::progress::{NoProgress, ProgressCounter, ProgressSink};
