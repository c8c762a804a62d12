//! Left column: logo, name and version, then the chat and about links.

use eframe::egui::{self, Align, Image, Label, Layout, RichText, load::SizedTexture, vec2};

use crate::launcher::commands::{ElementId, command_for};
use crate::ui::assets::fit_height;
use crate::ui::colors::VERSION_TEXT;
use crate::ui::widgets::{ButtonStyle, styled_button};
use crate::ui::window::{Region, ViewState};

const LOGO_HEIGHT: f32 = 80.0;
const LINK_SIZE: egui::Vec2 = vec2(200.0, 40.0);
const CHAT_LABEL: &str = "Join the Discord";

#[derive(Default)]
pub struct IdentityView {
    /// Width of the logo/title row last frame, used to centre it.
    row_width: f32,
}

impl Region for IdentityView {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &mut ViewState<'_>) {
        let spacing = ui.spacing().item_spacing.y;
        let content = LOGO_HEIGHT + 5.0 + 2.0 * LINK_SIZE.y + 3.0 * spacing;
        ui.add_space(((ui.available_height() - content) / 2.0).max(0.0));

        let pad = ((ui.available_width() - self.row_width) / 2.0).max(0.0);
        let row = ui.horizontal(|ui| {
            ui.add_space(pad);
            if let Some(logo) = state.logo {
                let size = fit_height(logo.size_vec2(), LOGO_HEIGHT);
                ui.add(Image::new(SizedTexture::new(logo.id(), size)));
            }
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                ui.add(
                    Label::new(
                        RichText::new(state.app_name)
                            .color(state.style.title_text)
                            .size(16.0),
                    )
                    .selectable(false),
                );
                ui.add(
                    Label::new(RichText::new(state.version).color(VERSION_TEXT).size(10.0))
                        .selectable(false),
                );
            });
        });
        self.row_width = row.response.rect.width() - pad;

        ui.add_space(5.0);

        let links = ButtonStyle::flat(state.style.links.text, state.style.links.hover, 12.0);
        let about_label = format!("About {}", state.app_name);
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            if styled_button(ui, LINK_SIZE, CHAT_LABEL, &links).clicked() {
                state.commands.push(command_for(ElementId::ChatLink));
            }
            if styled_button(ui, LINK_SIZE, &about_label, &links).clicked() {
                state.commands.push(command_for(ElementId::AboutLink));
            }
        });
    }
}
