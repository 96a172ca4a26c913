//! Nord-flavored dark theme for the reverser window.

use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub window_background: egui::Color32,
    pub text: egui::Color32,
    pub entry_background: egui::Color32,
    pub entry_text: egui::Color32,
    pub button_background: egui::Color32,
    pub button_hovered: egui::Color32,
    pub button_text: egui::Color32,
    pub result_text: egui::Color32,
    pub error_text: egui::Color32,
}

impl Palette {
    pub fn nord() -> Self {
        Self {
            window_background: egui::Color32::from_rgb(0x2E, 0x34, 0x40),
            text: egui::Color32::from_rgb(0xD8, 0xDE, 0xE9),
            entry_background: egui::Color32::from_rgb(0x3B, 0x42, 0x52),
            entry_text: egui::Color32::from_rgb(0xEC, 0xEF, 0xF4),
            button_background: egui::Color32::from_rgb(0x5E, 0x81, 0xAC),
            button_hovered: egui::Color32::from_rgb(0x81, 0xA1, 0xC1),
            button_text: egui::Color32::from_rgb(0xEC, 0xEF, 0xF4),
            result_text: egui::Color32::from_rgb(0xA3, 0xBE, 0x8C),
            error_text: egui::Color32::RED,
        }
    }
}

fn visuals_for_palette(palette: Palette) -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(palette.text);
    visuals.window_fill = palette.window_background;
    visuals.panel_fill = palette.window_background;
    // Text edits draw on extreme_bg_color.
    visuals.extreme_bg_color = palette.entry_background;
    visuals.faint_bg_color = palette.entry_background;
    visuals.selection.bg_fill = palette.button_background;
    visuals.widgets.inactive.bg_fill = palette.button_background;
    visuals.widgets.hovered.bg_fill = palette.button_hovered;
    visuals.widgets.active.bg_fill = palette.button_hovered;
    visuals
}

/// Applied once at startup; the palette never changes at runtime.
pub fn apply(ctx: &egui::Context, palette: Palette) {
    let mut style = (*ctx.style()).clone();
    style.visuals = visuals_for_palette(palette);
    style.spacing.button_padding = egui::vec2(20.0, 5.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visuals_carry_the_window_and_entry_backgrounds() {
        let palette = Palette::nord();
        let visuals = visuals_for_palette(palette);

        assert_eq!(visuals.panel_fill, palette.window_background);
        assert_eq!(visuals.extreme_bg_color, palette.entry_background);
        assert_eq!(visuals.override_text_color, Some(palette.text));
    }
}
