//! Input values describing what to convert.

use std::path::PathBuf;

/// Identity and descriptive metadata of the book being converted.
///
/// A [`Book`] is fixed for the lifetime of a conversion.
///
/// # Examples
/// ```
/// use pagepub::Book;
///
/// let book = Book::new("abc123", "Demo", "en")
///     .authors(["A", "B"])
///     .tags(["Action", "Comedy", "Action"]);
///
/// assert_eq!("abc123", book.id());
/// assert_eq!(["A", "B"], book.author_names());
/// // Duplicate tags are ignored
/// assert_eq!(["Action", "Comedy"], book.tag_names());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    id: String,
    title: String,
    language: String,
    tags: Vec<String>,
    authors: Vec<String>,
}

impl Book {
    /// Creates a book with the given opaque unique `id`, `title` and `language` tag.
    ///
    /// The identifier written to the package is `urn:uuid:{id}`.
    pub fn new(id: impl Into<String>, title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            language: language.into(),
            tags: Vec::new(),
            authors: Vec::new(),
        }
    }

    /// Appends an author, preserving order.
    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.authors.push(name.into());
        self
    }

    /// Appends several authors, preserving order.
    pub fn authors<I: IntoIterator<Item = S>, S: Into<String>>(mut self, names: I) -> Self {
        self.authors.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds a topical tag, ignored if already present.
    pub fn tag(mut self, name: impl Into<String>) -> Self {
        let name = name.into();

        if !self.tags.contains(&name) {
            self.tags.push(name);
        }
        self
    }

    /// Adds several topical tags, ignoring duplicates.
    pub fn tags<I: IntoIterator<Item = S>, S: Into<String>>(self, names: I) -> Self {
        names.into_iter().fold(self, |book, name| book.tag(name))
    }

    /// The opaque unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The language tag (e.g., `en`, `ja`).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Topical tags in insertion order.
    pub fn tag_names(&self) -> &[String] {
        &self.tags
    }

    /// Author names in insertion order.
    pub fn author_names(&self) -> &[String] {
        &self.authors
    }
}

/// One unit of content, such as a chapter or a volume,
/// consisting of a display title and an ordered sequence of page images.
///
/// Image paths must point to already materialized raster images.
/// Their order is the reading order of the group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentGroup {
    title: String,
    images: Vec<PathBuf>,
}

impl ContentGroup {
    /// Creates a group from a `title` and ordered image paths.
    pub fn new<I: IntoIterator<Item = P>, P: Into<PathBuf>>(title: impl Into<String>, images: I) -> Self {
        Self {
            title: title.into(),
            images: images.into_iter().map(Into::into).collect(),
        }
    }

    /// The display title, used as the navigation label of the group.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The ordered image paths.
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }
}

impl<T: Into<String>, I: IntoIterator<Item = P>, P: Into<PathBuf>> From<(T, I)> for ContentGroup {
    fn from((title, images): (T, I)) -> Self {
        Self::new(title, images)
    }
}
