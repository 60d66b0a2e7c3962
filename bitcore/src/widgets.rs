//! Small widgets shared by the editor window.

use crate::theme::{BitColors, BitTheme};
use egui::{Response, RichText, Ui, Widget};

/// Line numbers in the editor font, right-aligned to `width_chars` digits.
pub fn line_gutter(ui: &mut Ui, numbers: &str, font_size: u32, width_chars: usize) {
    let font = BitTheme::editor_font(font_size);
    let glyph_width = ui.fonts(|f| f.glyph_width(&font, '0'));
    BitTheme::gutter_frame().show(ui, |ui| {
        ui.set_min_width(glyph_width * width_chars as f32);
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            ui.label(RichText::new(numbers).font(font).color(BitColors::GREEN));
        });
    });
}

/// Status bar: one line of text on the bar colour.
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(BitColors::BAR)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

/// Row in the open-file window.
pub struct FileListItem<'a> {
    name: &'a str,
    is_directory: bool,
    selected: bool,
}

impl<'a> FileListItem<'a> {
    pub fn new(name: &'a str, is_directory: bool) -> Self {
        Self { name, is_directory, selected: false }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for FileListItem<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = 20.0;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            egui::Sense::click(),
        );

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let (fill, text_color) = if self.selected {
                (BitColors::GREEN, BitColors::BLACK)
            } else if response.hovered() {
                (BitColors::DARK_GRAY, BitColors::GREEN)
            } else {
                (BitColors::BLACK, BitColors::GREEN)
            };
            painter.rect_filled(rect, 0.0, fill);

            let label = if self.is_directory {
                format!("{}/", self.name)
            } else {
                self.name.to_string()
            };
            painter.text(
                egui::pos2(rect.min.x + 6.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                label,
                egui::FontId::monospace(12.0),
                text_color,
            );
        }

        response
    }
}
