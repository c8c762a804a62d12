//! Flat buttons with an explicit hover fill.

use eframe::egui::{
    self, Align2, Color32, CornerRadius, CursorIcon, FontId, Response, Sense, Vec2,
};

#[derive(Debug, Clone, Copy)]
pub struct ButtonStyle {
    pub fill: Color32,
    pub hover_fill: Color32,
    pub text: Color32,
    pub font_size: f32,
    pub corner_radius: u8,
}

impl ButtonStyle {
    /// Transparent until hovered.
    pub fn flat(text: Color32, hover_fill: Color32, font_size: f32) -> Self {
        Self {
            fill: Color32::TRANSPARENT,
            hover_fill,
            text,
            font_size,
            corner_radius: 0,
        }
    }
}

/// Fixed-size button painted entirely from `style`.
pub fn styled_button(ui: &mut egui::Ui, size: Vec2, label: &str, style: &ButtonStyle) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let fill = if response.hovered() {
            style.hover_fill
        } else {
            style.fill
        };
        let painter = ui.painter();
        painter.rect_filled(rect, CornerRadius::same(style.corner_radius), fill);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(style.font_size),
            style.text,
        );
    }
    response.on_hover_cursor(CursorIcon::PointingHand)
}
