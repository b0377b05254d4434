//! Error kinds raised while binding a book.
//!
//! Every variant aborts a build except [`Error::MissingHeading`], which the
//! assembler reports per chapter unless strict mode is enabled.

use std::path::PathBuf;
use std::process::ExitStatus;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read configuration file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Configuration is missing a value for `{group}.{field}`")]
    MissingConfigValue { group: String, field: String },

    #[error("Failed to read chapter {}", path.display())]
    ChapterRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chapter `{chapter}` has no level-1 heading (a line starting with `# `)")]
    MissingHeading { chapter: String },

    #[error("Failed to write {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run `{engine}`: {reason}")]
    CompilerInvocation {
        engine: String,
        reason: CompilerFailure,
    },
}

/// Why the typesetting engine didn't produce a document.
#[derive(Debug)]
pub enum CompilerFailure {
    /// The process could not be started at all
    Launch(std::io::Error),
    /// The process ran but reported failure
    Exit {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

impl std::fmt::Display for CompilerFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompilerFailure::Launch(e) => write!(f, "could not launch process: {e}"),
            CompilerFailure::Exit {
                status,
                stdout,
                stderr,
            } => {
                write!(f, "process exited with {status}")?;
                if !stdout.trim().is_empty() {
                    write!(f, "\n--- stdout ---\n{}", stdout.trim_end())?;
                }
                if !stderr.trim().is_empty() {
                    write!(f, "\n--- stderr ---\n{}", stderr.trim_end())?;
                }
                Ok(())
            }
        }
    }
}
