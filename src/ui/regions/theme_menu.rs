//! Theme choice popup anchored below the settings glyph.

use eframe::egui::{self, Order};

use crate::launcher::commands::{Command, ElementId, command_for};
use crate::launcher::theme::ThemeId;
use crate::ui::window::{Region, ViewState};

#[derive(Default)]
pub struct ThemeMenu;

impl Region for ThemeMenu {
    fn name(&self) -> &'static str {
        "theme_menu"
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &mut ViewState<'_>) {
        if !state.theme_menu_open {
            return;
        }
        let Some(anchor) = state.menu_anchor else {
            return;
        };

        let ctx = ui.ctx().clone();
        let mut selected = None;
        let area = egui::Area::new(ui.id().with("popup"))
            .order(Order::Foreground)
            .fixed_pos(anchor)
            .show(&ctx, |ui| {
                egui::Frame::menu(ui.style()).show(ui, |ui| {
                    for theme in ThemeId::ALL {
                        if ui.button(theme.label()).clicked() {
                            selected = Some(theme);
                        }
                    }
                });
            });

        match selected {
            Some(theme) => state
                .commands
                .push(command_for(ElementId::ThemeOption(theme))),
            // The click that opened the menu landed on an earlier frame, so
            // any click outside it now is a dismissal.
            None if area.response.clicked_elsewhere() => {
                state.commands.push(Command::DismissThemeMenu);
            }
            None => {}
        }
    }
}
