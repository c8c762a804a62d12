//! Theme store and the style state every themed widget reads from.
//!
//! A theme is one of two fixed [`Palette`]s. Widgets never look at the
//! palette directly: [`apply_theme`] copies the palette into a [`StyleState`]
//! and the UI paints from that on the next frame.

use eframe::egui::Color32;

/// Identifier of a built-in theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    /// Dark theme, selected at startup.
    #[default]
    Default,
    /// Light theme.
    Regular,
}

impl ThemeId {
    /// Menu order.
    pub const ALL: [ThemeId; 2] = [ThemeId::Default, ThemeId::Regular];

    /// Label shown in the theme menu.
    pub fn label(self) -> &'static str {
        match self {
            ThemeId::Default => "Default",
            ThemeId::Regular => "Regular",
        }
    }
}

/// The eight colour slots a theme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub title_bar_bg: Color32,
    pub central_bg: Color32,
    pub central_border: Color32,
    pub launch_bg: Color32,
    pub launch_hover: Color32,
    pub accent_text: Color32,
    pub accent_hover: Color32,
    pub title_text: Color32,
}

pub const DEFAULT_PALETTE: Palette = Palette {
    title_bar_bg: Color32::from_rgb(0x1F, 0x1F, 0x1F),
    central_bg: Color32::from_rgb(0x1F, 0x1F, 0x1F),
    central_border: Color32::from_rgb(0x2D, 0x2D, 0x2D),
    launch_bg: Color32::from_rgb(0x2D, 0x2D, 0x2D),
    launch_hover: Color32::from_rgb(0x37, 0x39, 0x3B),
    accent_text: Color32::from_rgb(0, 170, 255),
    accent_hover: Color32::from_rgb(0x37, 0x39, 0x3B),
    title_text: Color32::WHITE,
};

pub const REGULAR_PALETTE: Palette = Palette {
    title_bar_bg: Color32::from_rgb(0xF0, 0xF0, 0xF0),
    central_bg: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    central_border: Color32::from_rgb(0xCC, 0xCC, 0xCC),
    launch_bg: Color32::from_rgb(0xE0, 0xE0, 0xE0),
    launch_hover: Color32::from_rgb(0xD0, 0xD0, 0xD0),
    accent_text: Color32::BLACK,
    accent_hover: Color32::from_rgb(0xD0, 0xD0, 0xD0),
    title_text: Color32::BLACK,
};

/// Look up a theme's palette. Total over [`ThemeId`].
pub fn palette(theme: ThemeId) -> &'static Palette {
    match theme {
        ThemeId::Default => &DEFAULT_PALETTE,
        ThemeId::Regular => &REGULAR_PALETTE,
    }
}

/// Normal and hovered fill of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub normal: Color32,
    pub hover: Color32,
}

/// Text colour and hovered fill of a transparent link button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkColors {
    pub text: Color32,
    pub hover: Color32,
}

/// Colours currently pushed into the styled widgets.
///
/// Both link buttons (chat and about) share `links`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleState {
    pub title_bar_bg: Color32,
    pub central_bg: Color32,
    pub central_border: Color32,
    pub launch: ButtonColors,
    pub links: LinkColors,
    pub title_text: Color32,
}

impl StyleState {
    pub fn for_theme(theme: ThemeId) -> Self {
        let p = palette(theme);
        Self {
            title_bar_bg: p.title_bar_bg,
            central_bg: p.central_bg,
            central_border: p.central_border,
            launch: ButtonColors {
                normal: p.launch_bg,
                hover: p.launch_hover,
            },
            links: LinkColors {
                text: p.accent_text,
                hover: p.accent_hover,
            },
            title_text: p.title_text,
        }
    }
}

/// Overwrite every themed slot of `style` with `theme`'s palette.
pub fn apply_theme(style: &mut StyleState, theme: ThemeId) {
    *style = StyleState::for_theme(theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matches_palette(style: &StyleState, p: &Palette) {
        assert_eq!(style.title_bar_bg, p.title_bar_bg);
        assert_eq!(style.central_bg, p.central_bg);
        assert_eq!(style.central_border, p.central_border);
        assert_eq!(style.launch.normal, p.launch_bg);
        assert_eq!(style.launch.hover, p.launch_hover);
        assert_eq!(style.links.text, p.accent_text);
        assert_eq!(style.links.hover, p.accent_hover);
        assert_eq!(style.title_text, p.title_text);
    }

    #[test]
    fn applying_a_theme_sets_every_slot() {
        for theme in ThemeId::ALL {
            // Start from the other theme so every slot has to change.
            let other = if theme == ThemeId::Default {
                ThemeId::Regular
            } else {
                ThemeId::Default
            };
            let mut style = StyleState::for_theme(other);
            apply_theme(&mut style, theme);
            assert_matches_palette(&style, palette(theme));
        }
    }

    #[test]
    fn applying_twice_is_idempotent() {
        for theme in ThemeId::ALL {
            let mut style = StyleState::for_theme(ThemeId::Default);
            apply_theme(&mut style, theme);
            let once = style;
            apply_theme(&mut style, theme);
            assert_eq!(style, once);
        }
    }

    #[test]
    fn default_palette_values() {
        assert_eq!(DEFAULT_PALETTE.accent_text, Color32::from_rgb(0, 170, 255));
        assert_eq!(REGULAR_PALETTE.central_bg, Color32::WHITE);
        assert_eq!(ThemeId::default(), ThemeId::Default);
        assert_eq!(ThemeId::Regular.label(), "Regular");
    }
}
