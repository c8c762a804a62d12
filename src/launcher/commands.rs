//! UI element identifiers, launcher commands, and the table between them.

use eframe::egui::Pos2;

use crate::launcher::theme::ThemeId;

/// Clickable elements of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    SettingsButton,
    CloseButton,
    LaunchButton,
    ChatLink,
    AboutLink,
    ThemeOption(ThemeId),
}

/// Everything the window can be asked to do, produced by the UI each frame
/// and executed by [`crate::launcher::state::Launcher::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    OpenThemeMenu,
    DismissThemeMenu,
    SelectTheme(ThemeId),
    Close,
    Launch,
    OpenChat,
    About,
    /// Pointer positions are in screen coordinates.
    BeginDrag {
        pointer: Pos2,
        window_top_left: Pos2,
    },
    ContinueDrag {
        pointer: Pos2,
    },
    EndDrag,
}

/// Dispatch table: which command a click on `element` triggers.
pub fn command_for(element: ElementId) -> Command {
    match element {
        ElementId::SettingsButton => Command::OpenThemeMenu,
        ElementId::CloseButton => Command::Close,
        ElementId::LaunchButton => Command::Launch,
        ElementId::ChatLink => Command::OpenChat,
        ElementId::AboutLink => Command::About,
        ElementId::ThemeOption(theme) => Command::SelectTheme(theme),
    }
}
