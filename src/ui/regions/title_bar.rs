//! Custom title bar: logo, app name, settings and close glyphs, drag-to-move.

use eframe::egui::{
    self, Align, CornerRadius, Image, Label, Layout, PointerButton, Pos2, Response, RichText,
    Sense, UiBuilder, Vec2, load::SizedTexture, vec2,
};

use crate::launcher::commands::{Command, ElementId, command_for};
use crate::ui::assets::fit_within;
use crate::ui::colors::{CLOSE_HOVER, GLYPH_TEXT, SETTINGS_HOVER};
use crate::ui::widgets::{ButtonStyle, styled_button};
use crate::ui::window::{Region, ViewState};

pub const TITLE_BAR_HEIGHT: f32 = 30.0;
const LOGO_BOUND: Vec2 = vec2(24.0, 24.0);
const GLYPH_SIZE: Vec2 = vec2(30.0, 30.0);

#[derive(Default)]
pub struct TitleBar;

impl TitleBar {
    /// Pointer and window top-left, both in screen points.
    fn screen_positions(ctx: &egui::Context) -> Option<(Pos2, Pos2)> {
        ctx.input(|i| {
            let viewport = i.viewport();
            let inner = viewport.inner_rect?;
            let window = viewport.outer_rect.unwrap_or(inner).min;
            let local = i.pointer.interact_pos()?;
            Some((inner.min + local.to_vec2(), window))
        })
    }

    fn handle_drag(ui: &egui::Ui, response: &Response, state: &mut ViewState<'_>) {
        let ctx = ui.ctx();
        let pressed = ctx.input(|i| i.pointer.primary_pressed());
        if pressed && response.is_pointer_button_down_on() {
            if let Some((pointer, window_top_left)) = Self::screen_positions(ctx) {
                state.commands.push(Command::BeginDrag {
                    pointer,
                    window_top_left,
                });
            }
        } else if state.dragging && response.dragged_by(PointerButton::Primary) {
            if let Some((pointer, _)) = Self::screen_positions(ctx) {
                state.commands.push(Command::ContinueDrag { pointer });
            }
        }

        if state.dragging && !ctx.input(|i| i.pointer.primary_down()) {
            state.commands.push(Command::EndDrag);
        }
    }
}

impl Region for TitleBar {
    fn name(&self) -> &'static str {
        "title_bar"
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &mut ViewState<'_>) {
        let (rect, _) =
            ui.allocate_exact_size(vec2(ui.available_width(), TITLE_BAR_HEIGHT), Sense::hover());
        let corners = CornerRadius {
            nw: 10,
            ne: 10,
            sw: 0,
            se: 0,
        };
        ui.painter().rect_filled(rect, corners, state.style.title_bar_bg);

        // Registered before the glyphs so the glyphs win hit-testing.
        let drag = ui.interact(rect, ui.id().with("drag"), Sense::click_and_drag());
        Self::handle_drag(ui, &drag, state);

        let mut bar = ui.new_child(
            UiBuilder::new()
                .max_rect(rect.shrink2(vec2(5.0, 0.0)))
                .layout(Layout::left_to_right(Align::Center)),
        );

        if let Some(logo) = state.logo {
            let size = fit_within(logo.size_vec2(), LOGO_BOUND);
            bar.add(Image::new(SizedTexture::new(logo.id(), size)));
        }
        bar.add_space(5.0);
        bar.add(
            Label::new(
                RichText::new(state.app_name)
                    .color(state.style.title_text)
                    .size(14.0),
            )
            .selectable(false),
        );

        bar.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let close = ButtonStyle::flat(GLYPH_TEXT, CLOSE_HOVER, 14.0);
            if styled_button(ui, GLYPH_SIZE, "X", &close).clicked() {
                state.commands.push(command_for(ElementId::CloseButton));
            }

            let settings = ButtonStyle::flat(GLYPH_TEXT, SETTINGS_HOVER, 16.0);
            let response = styled_button(ui, GLYPH_SIZE, "⚙", &settings);
            state.menu_anchor = Some(response.rect.left_bottom());
            if response.clicked() {
                state.commands.push(command_for(ElementId::SettingsButton));
            }
        });
    }
}
