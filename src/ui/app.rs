//! Application orchestrator: owns the launcher state and draws the window.

use std::sync::Arc;

use eframe::egui::{self, CornerRadius, Margin, Stroke, TextureHandle, Vec2, vec2};

use crate::config::LauncherConfig;
use crate::host::native::NativeDesktop;
use crate::launcher::fade::FadeIn;
use crate::launcher::state::Launcher;
use crate::ui::assets;
use crate::ui::regions::{
    identity_view::IdentityView, launch_view::LaunchView, theme_menu::ThemeMenu,
    title_bar::TitleBar,
};
use crate::ui::window::{Region, ViewState};

/// Fixed outer size of the window.
pub const WINDOW_SIZE: Vec2 = vec2(533.0, 267.0);

/// Frameless, transparent, fixed-size viewport with the configured icon.
pub fn viewport(config: &LauncherConfig) -> egui::ViewportBuilder {
    let mut builder = egui::ViewportBuilder::default()
        .with_title(config.app_name.clone())
        .with_inner_size(WINDOW_SIZE)
        .with_min_inner_size(WINDOW_SIZE)
        .with_max_inner_size(WINDOW_SIZE)
        .with_resizable(false)
        .with_maximize_button(false)
        .with_decorations(false)
        .with_transparent(true);
    if let Some(icon) = assets::load_icon(config.icon_source()) {
        builder = builder.with_icon(Arc::new(icon));
    }
    builder
}

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// Each frame:
/// 1. Regions draw from the current style and collect commands.
/// 2. Collected commands are dispatched to [`Launcher`] against the native
///    desktop (spawn, open URL, move, close).
pub struct LauncherApp {
    launcher: Launcher,
    fade: FadeIn,
    version: String,
    logo: Option<TextureHandle>,

    // ── Regions ─────────────────────────────────────────────────────────────
    title_bar: TitleBar,
    columns: [Box<dyn Region>; 2],
    theme_menu: ThemeMenu,
}

impl LauncherApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: LauncherConfig) -> Self {
        Self::with_context(&cc.egui_ctx, config)
    }

    pub fn with_context(ctx: &egui::Context, config: LauncherConfig) -> Self {
        let logo = assets::load_logo(ctx, config.logo_path.as_deref());
        Self {
            launcher: Launcher::new(config),
            fade: FadeIn::default(),
            version: format!("v{}", env!("CARGO_PKG_VERSION")),
            logo,
            title_bar: TitleBar,
            columns: [Box::new(IdentityView::default()), Box::new(LaunchView)],
            theme_menu: ThemeMenu,
        }
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    /// Draw one frame and execute whatever the user asked for.
    pub fn render(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.launcher.mark_closed();
        }
        if self.launcher.is_closed() {
            return;
        }

        let now = ctx.input(|i| i.time);
        let opacity = self.fade.opacity_at(now);
        if !self.fade.is_finished(now) {
            ctx.request_repaint();
        }

        let launcher = &self.launcher;
        let style = *launcher.style();
        let mut state = ViewState {
            style: launcher.style(),
            app_name: &launcher.config().app_name,
            version: &self.version,
            logo: self.logo.as_ref(),
            theme_menu_open: launcher.is_theme_menu_open(),
            dragging: launcher.is_dragging(),
            menu_anchor: None,
            commands: Vec::new(),
        };

        let title_bar = &mut self.title_bar;
        let columns = &mut self.columns;
        let theme_menu = &mut self.theme_menu;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.multiply_opacity(opacity);
                egui::Frame::new()
                    .fill(style.central_bg)
                    .stroke(Stroke::new(1.0, style.central_border))
                    .corner_radius(CornerRadius::same(10))
                    .show(ui, |ui| {
                        ui.set_min_size(ui.available_size());
                        ui.spacing_mut().item_spacing = Vec2::ZERO;
                        ui.push_id(title_bar.name(), |ui| title_bar.show(ui, &mut state));

                        egui::Frame::NONE
                            .inner_margin(Margin::same(10))
                            .show(ui, |ui| {
                                ui.spacing_mut().item_spacing = vec2(10.0, 5.0);
                                ui.columns(2, |cols| {
                                    for (col, region) in cols.iter_mut().zip(columns.iter_mut()) {
                                        col.push_id(region.name(), |ui| region.show(ui, &mut state));
                                    }
                                });
                            });
                    });
                ui.push_id(theme_menu.name(), |ui| theme_menu.show(ui, &mut state));
            });

        let commands = state.commands;
        if commands.is_empty() {
            return;
        }
        let mut desktop = NativeDesktop::new(ctx);
        for command in commands {
            self.launcher.dispatch(command, &mut desktop);
        }
        // Restyle or menu changes show up on the next frame.
        ctx.request_repaint();
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::theme::{StyleState, ThemeId};

    fn run_frames(app: &mut LauncherApp, ctx: &egui::Context, frames: usize) {
        for frame in 0..frames {
            let input = egui::RawInput {
                time: Some(frame as f64 * 0.1),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| app.render(ctx));
        }
    }

    #[test]
    fn viewport_is_fixed_frameless_and_transparent() {
        let builder = viewport(&LauncherConfig::default());
        assert_eq!(builder.inner_size, Some(vec2(533.0, 267.0)));
        assert_eq!(builder.min_inner_size, builder.inner_size);
        assert_eq!(builder.max_inner_size, builder.inner_size);
        assert_eq!(builder.resizable, Some(false));
        assert_eq!(builder.decorations, Some(false));
        assert_eq!(builder.transparent, Some(true));
        assert_eq!(builder.title.as_deref(), Some("Trinity"));
        assert!(builder.icon.is_none());
    }

    #[test]
    fn renders_headless_in_default_theme() {
        let ctx = egui::Context::default();
        let mut app = LauncherApp::with_context(&ctx, LauncherConfig::default());
        assert!(app.logo.is_none());
        assert_eq!(app.version, "v2.90.0");

        run_frames(&mut app, &ctx, 8);

        let launcher = app.launcher();
        assert_eq!(launcher.theme(), ThemeId::Default);
        assert_eq!(*launcher.style(), StyleState::for_theme(ThemeId::Default));
        assert!(!launcher.is_theme_menu_open());
        assert!(!launcher.is_closed());
        assert!(app.fade.is_finished(0.7));
    }

    #[test]
    fn renders_with_menu_open_and_regular_theme() {
        use crate::launcher::commands::Command;
        use crate::launcher::state::tests::RecordingDesktop;

        let ctx = egui::Context::default();
        let mut app = LauncherApp::with_context(&ctx, LauncherConfig::default());
        let mut desktop = RecordingDesktop::default();
        app.launcher.dispatch(Command::SelectTheme(ThemeId::Regular), &mut desktop);
        app.launcher.dispatch(Command::OpenThemeMenu, &mut desktop);

        run_frames(&mut app, &ctx, 3);

        assert_eq!(app.launcher().theme(), ThemeId::Regular);
        assert!(app.launcher().is_theme_menu_open());
    }
}
