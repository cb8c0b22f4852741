use clap::Args;
use pagepub::errors::PagepubResult;
use pagepub::{Book, Compression, ContentGroup, Converter, OpenMode, ProgressCounter, ProgressSink};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// A directory whose sub-directories each contain the page images of one chapter.
    ///
    /// Chapters and their images are ordered by file name.
    pub source: PathBuf,

    /// The EPUB file to create
    #[arg(short, long)]
    pub output: PathBuf,

    /// Opaque unique identifier of the book
    #[arg(long)]
    id: String,

    /// Title of the book [default: name of the source directory]
    #[arg(long)]
    title: Option<String>,

    /// Language tag of the book
    #[arg(long, default_value = "en")]
    lang: String,

    /// An author of the book (repeatable)
    #[arg(long = "author")]
    authors: Vec<String>,

    /// A topical tag of the book (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Replace the output file if it already exists
    #[arg(long)]
    overwrite: bool,
}

impl ConvertCommand {
    pub fn convert(&self) -> PagepubResult<()> {
        let book = Book::new(&self.id, self.title(), &self.lang)
            .authors(&self.authors)
            .tags(&self.tags);
        let groups = collect_groups(&self.source)?;
        let open_mode = match self.overwrite {
            true => OpenMode::Overwrite,
            false => OpenMode::CreateNew,
        };
        let progress = TerminalProgress::default();

        Converter::new()?
            .compression(Compression::from_env()?)
            .open_mode(open_mode)
            .convert(&book, groups, &self.output, &progress)?;

        progress.finish();
        println!(
            "{} images written to {}",
            progress.counter.completed(),
            self.output.display(),
        );
        Ok(())
    }

    fn title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            file_name(&self.source)
                .unwrap_or_else(|| self.source.display().to_string())
        })
    }
}

/// Reports copied images on stderr.
#[derive(Default)]
struct TerminalProgress {
    counter: ProgressCounter,
}

impl TerminalProgress {
    fn finish(&self) {
        if io::stderr().is_terminal() {
            eprintln!();
        }
    }
}

impl ProgressSink for TerminalProgress {
    fn set_total(&self, total: usize) {
        self.counter.set_total(total);
    }

    fn increment(&self, amount: usize) {
        self.counter.increment(amount);

        let mut stderr = io::stderr().lock();
        if stderr.is_terminal() {
            // Progress output is best-effort
            let _ = write!(
                stderr,
                "\r{}/{} images",
                self.counter.completed(),
                self.counter.total(),
            );
        }
    }
}

/// Every sub-directory of `source` becomes one group, titled by its name.
fn collect_groups(source: &Path) -> io::Result<Vec<ContentGroup>> {
    sorted_entries(source, Path::is_dir)?
        .into_iter()
        .map(|dir| {
            let images = sorted_entries(&dir, Path::is_file)?;
            let title = file_name(&dir).unwrap_or_default();

            tracing::debug!(title, images = images.len(), "collected group");
            Ok(ContentGroup::new(title, images))
        })
        .collect()
}

/// Non-hidden entries of `dir` accepted by `filter`, sorted by name.
fn sorted_entries(dir: &Path, filter: fn(&Path) -> bool) -> io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<io::Result<Vec<_>>>()?;

    entries.retain(|path| {
        filter(path) && !file_name(path).is_some_and(|name| name.starts_with('.'))
    });
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
