//! Window state and command execution, independent of rendering.

use crate::config::LauncherConfig;
use crate::error::AppError;
use crate::host::Desktop;
use crate::launcher::commands::Command;
use crate::launcher::drag::DragState;
use crate::launcher::theme::{StyleState, ThemeId, apply_theme};

/// Everything the window remembers between frames.
///
/// Lifecycle: `themed(Default)` after [`Launcher::new`], `themed(X)` after a
/// menu selection, and `closed` (terminal) after a close request.
pub struct Launcher {
    config: LauncherConfig,
    theme: ThemeId,
    style: StyleState,
    drag: DragState,
    theme_menu_open: bool,
    closed: bool,
    last_error: Option<String>,
}

impl Launcher {
    pub fn new(config: LauncherConfig) -> Self {
        let theme = ThemeId::default();
        Self {
            config,
            theme,
            style: StyleState::for_theme(theme),
            drag: DragState::default(),
            theme_menu_open: false,
            closed: false,
            last_error: None,
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn is_theme_menu_open(&self) -> bool {
        self.theme_menu_open
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Most recent launch failure, if any.
    #[allow(dead_code)]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The window manager closed the window behind our back.
    pub fn mark_closed(&mut self) {
        if !self.closed {
            log::info!("Window closed by the window manager.");
            self.closed = true;
        }
    }

    pub fn dispatch<D: Desktop + ?Sized>(&mut self, command: Command, desktop: &mut D) {
        if self.closed {
            log::debug!("Ignoring {command:?}: window is closed.");
            return;
        }

        match command {
            Command::OpenThemeMenu => self.theme_menu_open = true,
            Command::DismissThemeMenu => self.theme_menu_open = false,
            Command::SelectTheme(theme) => {
                self.theme_menu_open = false;
                self.set_theme(theme);
            }
            Command::Close => {
                log::info!("Close requested.");
                self.closed = true;
                self.drag.end();
                desktop.close_window();
            }
            Command::Launch => self.launch(desktop),
            Command::OpenChat => desktop.open_url(&self.config.chat_url),
            Command::About => {
                desktop.announce(&format!("About {} button clicked.", self.config.app_name));
            }
            Command::BeginDrag {
                pointer,
                window_top_left,
            } => self.drag.begin(pointer, window_top_left),
            Command::ContinueDrag { pointer } => {
                if let Some(top_left) = self.drag.update(pointer) {
                    desktop.move_window(top_left);
                }
            }
            Command::EndDrag => self.drag.end(),
        }
    }

    fn set_theme(&mut self, theme: ThemeId) {
        if theme != self.theme {
            log::info!("Theme changed to {}.", theme.label());
        }
        self.theme = theme;
        apply_theme(&mut self.style, theme);
    }

    fn launch<D: Desktop + ?Sized>(&mut self, desktop: &mut D) {
        let result = match self.config.executable_path.as_deref() {
            Some(path) => desktop.spawn_detached(path),
            None => Err(AppError::NoExecutable),
        };
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                log::error!("Error launching the executable: {e}");
                self.last_error = Some(e.to_string());
            }
        }
    }
}
