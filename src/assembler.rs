//! Book assembly.
//!
//! Reads the configuration and every chapter, builds the header, stitches the
//! whole LaTeX document together, writes it into the build directory, and
//! hands it to the typesetting engine. Any failure aborts the build before the
//! document is written, with the exception of chapters that lack a heading:
//! those are reported and skipped unless [`BuildOptions::strict`] is set.

use crate::chapter::{self, Chapter};
use crate::chapter_ordering::list_chapters;
use crate::compiler::{self, CompileOutput};
use crate::config::{self, DEFAULT_CONFIG_FILE};
use crate::error::{Error, Result};
use crate::header::build_header;
use crate::schema::{Schema, SCHEMA};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

pub const DEFAULT_CHAPTERS_DIR: &str = "chapters";

/// Where a book's inputs live.
#[derive(Debug, Clone)]
pub struct Project {
    /// Directory everything else is resolved against
    pub root: PathBuf,
    pub config: PathBuf,
    pub chapters: PathBuf,
}

impl Project {
    pub fn new<P: Into<PathBuf>>(root: P) -> Project {
        Project {
            root: root.into(),
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            chapters: PathBuf::from(DEFAULT_CHAPTERS_DIR),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(&self.config)
    }

    pub fn chapters_dir(&self) -> PathBuf {
        self.root.join(&self.chapters)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Run the typesetting engine after writing the document
    pub compile: bool,
    /// Fail the build when a chapter has no heading instead of skipping it
    pub strict: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            compile: true,
            strict: false,
        }
    }
}

/// What a build produced, used for user feedback.
#[derive(Debug)]
pub struct BuildReport {
    /// Path of the written LaTeX document
    pub document: PathBuf,
    /// Source file names of the chapters included, in order
    pub chapters: Vec<String>,
    /// Source file names of the chapters left out for lack of a heading
    pub skipped: Vec<String>,
    pub compiled: Option<CompileOutput>,
}

/// Join the header and rendered chapters into the full document text.
pub fn assemble(schema: &Schema, header: &str, chapters: &[Chapter], recto: bool) -> String {
    let mut content = String::new();
    for chapter in chapters {
        content += &chapter.render(schema, recto);
        content.push('\n');
    }

    let mut document = header.to_string();
    document.push('\n');
    document += &(schema.wrapper)(&content);
    document
}

fn read_chapter(path: &Path) -> Result<(String, String)> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let text = std::fs::read_to_string(path).map_err(|source| Error::ChapterRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((name, text))
}

/// Build the book described by `project`.
pub fn build(
    project: &Project,
    options: BuildOptions,
    progress: &ProgressBar,
) -> Result<BuildReport> {
    let config = config::load(&project.config_path())?;
    log::info!("loaded configuration from {}", project.config_path().display());

    let files = list_chapters(&project.chapters_dir())?;
    if files.is_empty() {
        log::warn!(
            "no chapters found in {}, the book will be empty",
            project.chapters_dir().display()
        );
    }
    progress.set_length(files.len() as u64);

    let mut chapters: Vec<Chapter> = Vec::with_capacity(files.len());
    let mut skipped: Vec<String> = Vec::default();
    for path in files.iter() {
        let (name, text) = read_chapter(path)?;
        progress.set_message(name.clone());

        match chapter::extract(&name, &text) {
            Ok(chapter) => {
                log::debug!("chapter {name}: {}", chapter.title);
                chapters.push(chapter);
            }
            Err(e @ Error::MissingHeading { .. }) if !options.strict => {
                log::warn!("{e}, skipping it");
                skipped.push(name);
            }
            Err(e) => return Err(e),
        }
        progress.inc(1);
    }

    log::debug!("using template schema v{}", SCHEMA.version);
    let header = build_header(&config, &SCHEMA)?;
    let document = assemble(&SCHEMA, &header, &chapters, config.chapter_style.recto);

    let output_dir = config.output_dir(&project.root);
    std::fs::create_dir_all(&output_dir).map_err(|source| Error::OutputWrite {
        path: output_dir.clone(),
        source,
    })?;

    let document_path = config.output_path(&project.root);
    std::fs::write(&document_path, document).map_err(|source| Error::OutputWrite {
        path: document_path.clone(),
        source,
    })?;
    log::info!(
        "wrote {} chapter(s) to {}",
        chapters.len(),
        document_path.display()
    );

    let compiled = if options.compile {
        progress.set_message(format!("Running {}...", config.engine));
        Some(compiler::compile(&config.engine, &output_dir, &document_path)?)
    } else {
        None
    };

    Ok(BuildReport {
        document: document_path,
        chapters: chapters.into_iter().map(|c| c.source).collect(),
        skipped,
        compiled,
    })
}
