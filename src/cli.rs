use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Project directory; the config and chapters paths are relative to it
    #[clap(long, default_value = ".")]
    pub root: PathBuf,
    /// Configuration file (`.yml`, `.yaml` or `.toml`)
    #[clap(long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a default configuration file and a sample chapter
    Init {
        #[clap(flatten)]
        project: ProjectArgs,
        /// Overwrite an existing configuration file
        #[clap(long)]
        force: bool,
    },
    /// Assembles the chapters into a LaTeX document and typesets it
    Build {
        #[clap(flatten)]
        project: ProjectArgs,
        /// Directory holding the chapter files
        #[clap(long, default_value = crate::assembler::DEFAULT_CHAPTERS_DIR)]
        chapters: PathBuf,
        /// Only write the LaTeX document, don't run the typesetting engine
        #[clap(long)]
        no_compile: bool,
        /// Fail if any chapter is missing its `# Title` heading
        #[clap(long)]
        strict: bool,
    },
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}
