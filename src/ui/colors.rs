//! Fixed chrome colours that do not change with the theme.

use eframe::egui::Color32;

/// Text on the title-bar glyphs and the launch button.
pub const GLYPH_TEXT: Color32 = Color32::WHITE;

pub const SETTINGS_HOVER: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);

pub const CLOSE_HOVER: Color32 = Color32::RED;

pub const VERSION_TEXT: Color32 = Color32::GRAY;
