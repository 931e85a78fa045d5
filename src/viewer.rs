// src/viewer.rs

use log::{debug, warn};
use std::path::Path;
use std::process::Command;

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Opens a rendered figure with the platform image viewer.
///
/// Waits for the launcher (`xdg-open`, `open`, `start`) to exit so no child
/// is left unreaped. Returns false if no viewer could be launched; that is
/// logged, not fatal.
pub fn show_figure(path: &Path) -> bool {
    let mut cmd = viewer_command(path);
    debug!("Launching viewer: {:?}", cmd);
    match cmd.status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            warn!("Viewer for '{}' exited with {}", path.display(), status);
            false
        }
        Err(e) => {
            warn!("Could not open '{}' in a viewer: {}", path.display(), e);
            false
        }
    }
}

// src/viewer.rs
