//! Typesetting engine invocation.

use crate::error::{CompilerFailure, Error, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Captured result of a successful compiler run.
///
/// The engine's output is returned rather than printed so the caller decides
/// how much of it the user sees.
#[derive(Debug)]
pub struct CompileOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `engine --output-directory=<output_dir> <tex_path>` and wait for it.
///
/// Both streams are captured. A process that can't be started, or that exits
/// unsuccessfully, is a [`Error::CompilerInvocation`].
pub fn compile(engine: &str, output_dir: &Path, tex_path: &Path) -> Result<CompileOutput> {
    log::info!("running {engine} on {}", tex_path.display());

    let output = Command::new(engine)
        .arg(format!("--output-directory={}", output_dir.display()))
        .arg(tex_path)
        .output()
        .map_err(|e| Error::CompilerInvocation {
            engine: engine.to_string(),
            reason: CompilerFailure::Launch(e),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if !output.status.success() {
        return Err(Error::CompilerInvocation {
            engine: engine.to_string(),
            reason: CompilerFailure::Exit {
                status: output.status,
                stdout,
                stderr,
            },
        });
    }

    log::debug!(
        "{engine} finished: {} byte(s) on stdout, {} byte(s) on stderr",
        stdout.len(),
        stderr.len()
    );

    Ok(CompileOutput {
        status: output.status,
        stdout,
        stderr,
    })
}
