use anyhow::{Context, Result};
use assembler::{BuildOptions, Project};
use cli::{Cli, Commands, ProjectArgs};
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;

mod assembler;
mod chapter;
mod chapter_ordering;
mod cli;
mod compiler;
mod config;
mod error;
mod header;
mod init;
mod schema;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn project(args: &ProjectArgs) -> Project {
    let mut project = Project::new(&args.root);
    project.config = args.config.clone();
    project
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Init {
            project: args,
            force,
        } => init::run(&project(args), *force),
        Commands::Build {
            project: args,
            chapters,
            no_compile,
            strict,
        } => {
            let mut project = project(args);
            project.chapters = chapters.clone();

            let options = BuildOptions {
                compile: !no_compile,
                strict: *strict,
            };

            let progress = ProgressBar::new(0);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .expect("can parse progress style")
                    .progress_chars("#>-"),
            );
            progress.set_message("Reading chapters...");

            let report = assembler::build(&project, options, &progress)
                .with_context(|| "Failed to build book")?;
            progress.finish_and_clear();

            println!();
            println!("  Document: {}", report.document.display());
            println!("  Chapters: {}", report.chapters.len());
            if !report.skipped.is_empty() {
                println!(
                    "  {} {} (no `# ` heading)",
                    console::style("Skipped:").yellow(),
                    report.skipped.join(", ")
                );
            }
            if let Some(compiled) = &report.compiled {
                println!(
                    "  Output:   {} ({})",
                    report
                        .document
                        .parent()
                        .unwrap_or(&report.document)
                        .display(),
                    compiled.status
                );
                if cli.verbose > 0 && !compiled.stdout.trim().is_empty() {
                    println!("\n{}", compiled.stdout.trim_end());
                }
                if !compiled.stderr.trim().is_empty() {
                    println!(
                        "\n{}\n{}",
                        console::style("Engine stderr:").yellow(),
                        compiled.stderr.trim_end()
                    );
                }
            }

            Ok(())
        }
    }
}
