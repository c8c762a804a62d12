//! Right column: the launch button, centred.

use eframe::egui::{self, Align, Layout, vec2};

use crate::launcher::commands::{ElementId, command_for};
use crate::ui::colors::GLYPH_TEXT;
use crate::ui::widgets::{ButtonStyle, styled_button};
use crate::ui::window::{Region, ViewState};

const LAUNCH_SIZE: egui::Vec2 = vec2(200.0, 50.0);

#[derive(Default)]
pub struct LaunchView;

impl Region for LaunchView {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &mut ViewState<'_>) {
        let style = ButtonStyle {
            fill: state.style.launch.normal,
            hover_fill: state.style.launch.hover,
            text: GLYPH_TEXT,
            font_size: 12.0,
            corner_radius: 6,
        };
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(((ui.available_height() - LAUNCH_SIZE.y) / 2.0).max(0.0));
            if styled_button(ui, LAUNCH_SIZE, "Launch Application", &style).clicked() {
                state.commands.push(command_for(ElementId::LaunchButton));
            }
        });
    }
}
