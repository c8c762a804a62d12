//! Host layer: the operating-system side effects the launcher performs.

pub mod native;

use std::path::Path;

use eframe::egui::Pos2;

use crate::error::Result;

/// Side effects requested by the launcher.
///
/// The live window uses [`native::NativeDesktop`]; tests substitute a
/// recorder so the window logic runs without a display.
pub trait Desktop {
    /// Start `program` as a detached child. The child is never waited on.
    fn spawn_detached(&mut self, program: &Path) -> Result<()>;

    /// Open `url` with the system's default handler. Fire-and-forget.
    fn open_url(&mut self, url: &str);

    /// Move the window's outer top-left corner to `top_left` (screen points).
    fn move_window(&mut self, top_left: Pos2);

    fn close_window(&mut self);

    /// Emit an informational message.
    fn announce(&mut self, message: &str);
}
