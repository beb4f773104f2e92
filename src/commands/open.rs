//! Open a rendered page with the platform's default application.

use std::path::Path;
use std::process::{Command, ExitStatus};

/// Launch the default viewer for `path`.
///
/// The page is already written when this runs, so failures only warn.
pub fn open_file(path: &Path) {
    match launch(path) {
        Ok(status) if status.success() => {
            tracing::debug!(path = %path.display(), "opened file");
        }
        Ok(status) => {
            tracing::warn!(path = %path.display(), %status, "file opener exited with failure");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not launch file opener");
        }
    }
}

#[cfg(target_os = "windows")]
fn launch(path: &Path) -> std::io::Result<ExitStatus> {
    // empty string is the window title expected by `start`
    Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .status()
}

#[cfg(target_os = "macos")]
fn launch(path: &Path) -> std::io::Result<ExitStatus> {
    Command::new("open").arg(path).status()
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn launch(path: &Path) -> std::io::Result<ExitStatus> {
    Command::new("xdg-open").arg(path).status()
}
