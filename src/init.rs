//! Scaffolding for a new book.
//!
//! Writes a default configuration (YAML or TOML, depending on the file
//! extension) and a chapters directory with one sample chapter so that a fresh
//! project builds straight away.

use crate::assembler::Project;
use crate::config::{Configuration, Format};
use anyhow::{anyhow, Context, Result};

const SAMPLE_CHAPTER_FILE: &str = "01-introduction.md";
const SAMPLE_CHAPTER: &str = "# Introduction

Every chapter file starts with a level-1 heading, which becomes the chapter
title. Chapters are ordered by the number at the start of their file name.
";

/// Create the configuration file and chapters directory for `project`.
pub fn run(project: &Project, force: bool) -> Result<()> {
    let config_path = project.config_path();
    if config_path.exists() && !force {
        return Err(anyhow!(
            "{} already exists, pass --force to overwrite it",
            config_path.display()
        ));
    }

    let config = Format::from_path(&config_path)
        .serialize(&Configuration::default())
        .with_context(|| "Failed to serialise default configuration")?;
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(&config_path, config)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("{} written!", config_path.display());

    let chapters_dir = project.chapters_dir();
    std::fs::create_dir_all(&chapters_dir)
        .with_context(|| format!("Failed to create directory {}", chapters_dir.display()))?;
    let is_empty = std::fs::read_dir(&chapters_dir)
        .with_context(|| format!("Failed to list {}", chapters_dir.display()))?
        .next()
        .is_none();
    if is_empty {
        let sample = chapters_dir.join(SAMPLE_CHAPTER_FILE);
        std::fs::write(&sample, SAMPLE_CHAPTER)
            .with_context(|| format!("Failed to write {}", sample.display()))?;
        println!("{} written!", sample.display());
    } else {
        log::info!(
            "{} already has chapters, leaving it alone",
            chapters_dir.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assembler::{build, BuildOptions};
    use indicatif::ProgressBar;
    use std::path::PathBuf;

    #[test]
    fn initialised_project_builds() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let project = Project::new(dir.path());
        run(&project, false).expect("can initialise");

        let options = BuildOptions {
            compile: false,
            strict: true,
        };
        let report = build(&project, options, &ProgressBar::hidden()).expect("can build");
        assert_eq!(report.chapters, vec![SAMPLE_CHAPTER_FILE]);
        assert_eq!(report.document, dir.path().join("build").join("book.tex"));
    }

    #[test]
    fn can_initialise_toml_project() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let mut project = Project::new(dir.path());
        project.config = PathBuf::from("book.toml");
        run(&project, false).expect("can initialise");

        let config = crate::config::load(&project.config_path()).expect("can load config");
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let project = Project::new(dir.path());
        std::fs::write(project.config_path(), "custom").expect("can write config");

        assert!(run(&project, false).is_err());
        assert_eq!(
            std::fs::read_to_string(project.config_path()).expect("can read config"),
            "custom"
        );

        run(&project, true).expect("can overwrite with force");
        assert!(crate::config::load(&project.config_path()).is_ok());
    }

    #[test]
    fn keeps_existing_chapters() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let project = Project::new(dir.path());
        std::fs::create_dir_all(project.chapters_dir()).expect("can create chapters");
        std::fs::write(project.chapters_dir().join("01.md"), "# Mine").expect("can write");

        run(&project, false).expect("can initialise");
        assert!(!project.chapters_dir().join(SAMPLE_CHAPTER_FILE).exists());
    }
}
