//! [`Desktop`] backed by the running eframe viewport and `std::process`.

use std::path::Path;
use std::process::{Command, Stdio};

use eframe::egui::{self, Pos2, ViewportCommand};

use crate::error::{AppError, Result};
use crate::host::Desktop;

/// Start `program` with inherited environment and working directory and drop
/// the child handle immediately.
pub fn spawn_detached(program: &Path) -> Result<()> {
    let child = Command::new(program)
        .stdin(Stdio::null())
        .spawn()
        .map_err(|source| AppError::Spawn {
            path: program.to_path_buf(),
            source,
        })?;
    log::info!("Launched {} (pid {}).", program.display(), child.id());
    Ok(())
}

/// Routes window effects through the egui context of the current frame.
pub struct NativeDesktop<'a> {
    ctx: &'a egui::Context,
}

impl<'a> NativeDesktop<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl Desktop for NativeDesktop<'_> {
    fn spawn_detached(&mut self, program: &Path) -> Result<()> {
        spawn_detached(program)
    }

    fn open_url(&mut self, url: &str) {
        // eframe hands this to the platform's default browser at frame end.
        self.ctx.open_url(egui::OpenUrl::new_tab(url));
    }

    fn move_window(&mut self, top_left: Pos2) {
        self.ctx
            .send_viewport_cmd(ViewportCommand::OuterPosition(top_left));
    }

    fn close_window(&mut self) {
        self.ctx.send_viewport_cmd(ViewportCommand::Close);
    }

    fn announce(&mut self, message: &str) {
        log::info!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawning_a_missing_program_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = spawn_detached(&missing).unwrap_err();
        match err {
            AppError::Spawn { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn native_desktop_reports_spawn_failure_without_panicking() {
        let ctx = egui::Context::default();
        let mut desktop = NativeDesktop::new(&ctx);
        assert!(desktop.spawn_detached(Path::new("/nonexistent/trinity")).is_err());
    }
}
