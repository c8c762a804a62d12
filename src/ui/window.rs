//! The `Region` trait and the shared `ViewState` passed to each region.
//!
//! Regions only draw and report what was clicked. They push [`Command`]s into
//! `ViewState::commands`; `LauncherApp` dispatches them after the frame is
//! laid out, so no region ever mutates launcher state directly.

use eframe::egui::{self, Pos2, TextureHandle};

use crate::launcher::commands::Command;
use crate::launcher::theme::StyleState;

/// Per-frame view of the launcher handed to every region.
pub struct ViewState<'a> {
    pub style: &'a StyleState,
    pub app_name: &'a str,
    /// Already prefixed, e.g. `v2.90.0`.
    pub version: &'a str,
    pub logo: Option<&'a TextureHandle>,
    pub theme_menu_open: bool,
    pub dragging: bool,
    /// Bottom-left of the settings glyph, written by the title bar.
    pub menu_anchor: Option<Pos2>,
    pub commands: Vec<Command>,
}

/// A piece of the launcher window.
pub trait Region {
    /// Stable name, used as the region's id salt.
    fn name(&self) -> &'static str;

    /// Draw the region. Called every frame by `LauncherApp::render`.
    fn show(&mut self, ui: &mut egui::Ui, state: &mut ViewState<'_>);
}
