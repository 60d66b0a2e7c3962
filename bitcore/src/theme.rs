//! BitNotes theme: green monospace text on black, dark grey gutter.
//!
//! Applied once per process before the first frame.

use egui::{Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::path::PathBuf;

pub struct BitColors;

impl BitColors {
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const GREEN: Color32 = Color32::from_rgb(0, 128, 0);
    pub const DARK_GRAY: Color32 = Color32::from_rgb(64, 64, 64);
    pub const BAR: Color32 = Color32::from_rgb(24, 24, 24);
}

/// Optional replacement for the built-in monospace font.
pub const CUSTOM_FONT_FILE: &str = "BitNotesMono.ttf";

pub struct BitTheme {
    pub font_size_ui: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for BitTheme {
    fn default() -> Self {
        Self {
            font_size_ui: 14.0,
            window_padding: 6.0,
            item_spacing: 6.0,
        }
    }
}

impl BitTheme {
    fn font_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                paths.push(dir.join("fonts").join(CUSTOM_FONT_FILE));
                paths.push(dir.join(CUSTOM_FONT_FILE));
            }
        }
        paths.push(PathBuf::from("/usr/share/bitnotes/fonts").join(CUSTOM_FONT_FILE));
        paths
    }

    fn load_custom_font() -> Option<Vec<u8>> {
        Self::font_search_paths()
            .into_iter()
            .find_map(|path| std::fs::read(path).ok())
    }

    /// Apply fonts, spacing and colours to `ctx`.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut fonts = FontDefinitions::default();
        match Self::load_custom_font() {
            Some(data) => {
                fonts.font_data.insert("BitNotesMono".to_owned(), FontData::from_owned(data));
                fonts.families
                    .entry(FontFamily::Monospace)
                    .or_default()
                    .insert(0, "BitNotesMono".to_owned());
                ctx.set_fonts(fonts);
            }
            None => log::debug!("{} not found, using the built-in monospace font", CUSTOM_FONT_FILE),
        }

        let mut style = Style::default();
        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_ui - 3.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_ui, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_ui, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_ui + 6.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_ui, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(BitColors::GREEN);
        visuals.panel_fill = BitColors::BAR;
        visuals.window_fill = BitColors::BAR;
        visuals.extreme_bg_color = BitColors::BLACK;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, BitColors::GREEN);
        visuals.selection.bg_fill = BitColors::GREEN;
        visuals.selection.stroke = Stroke::new(1.0, BitColors::BLACK);

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.rounding = Rounding::ZERO;
            ws.fg_stroke = Stroke::new(1.0, BitColors::GREEN);
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);

        ctx.set_style(style);
    }

    /// Monospace font shared by the text area and the gutter.
    pub fn editor_font(font_size: u32) -> FontId {
        FontId::monospace(font_size as f32)
    }

    /// Frame around the settings bar.
    pub fn settings_bar_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(BitColors::BAR)
            .inner_margin(egui::Margin::symmetric(8.0, 6.0))
    }

    /// Frame around the line-number gutter.
    pub fn gutter_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(BitColors::DARK_GRAY)
            .inner_margin(egui::Margin::symmetric(6.0, 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_font_is_monospace() {
        let font = BitTheme::editor_font(18);
        assert_eq!(font.size, 18.0);
        assert_eq!(font.family, FontFamily::Monospace);
    }

    #[test]
    fn test_font_search_includes_system_path() {
        let paths = BitTheme::font_search_paths();
        assert!(paths
            .iter()
            .any(|p| p == &PathBuf::from("/usr/share/bitnotes/fonts/BitNotesMono.ttf")));
    }

    #[test]
    fn test_apply_without_custom_font() {
        let ctx = egui::Context::default();
        BitTheme::default().apply(&ctx);
        let style = ctx.style();
        assert_eq!(style.visuals.override_text_color, Some(BitColors::GREEN));
        assert_eq!(style.visuals.extreme_bg_color, BitColors::BLACK);
    }
}
