use eframe::egui::{self, Color32};

use crate::app::theme::ThemeVariant;

/// Every color the window uses. A pure function of the theme variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background_top: Color32,
    pub background_bottom: Color32,
    pub text: Color32,
    pub heading: Color32,
    pub tile_fill: Color32,
    pub tile_stroke: Color32,
    pub tile_overlay: Color32,
    pub backdrop: Color32,
    pub close_button: Color32,
    pub toggle_track: Color32,
    pub toggle_thumb: Color32,
    pub particle: Color32,
    pub particle_radius: f32,
    pub placeholder: Color32,
}

impl Palette {
    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self {
                background_top: Color32::from_rgb(0x1a, 0x1a, 0x2e),
                background_bottom: Color32::from_rgb(0x0f, 0x34, 0x60),
                text: Color32::WHITE,
                heading: Color32::WHITE,
                tile_fill: Color32::from_white_alpha(26),
                tile_stroke: Color32::from_white_alpha(51),
                tile_overlay: Color32::from_black_alpha(204),
                backdrop: Color32::from_black_alpha(230),
                close_button: Color32::from_white_alpha(51),
                toggle_track: Color32::from_rgb(0x16, 0x21, 0x3e),
                toggle_thumb: Color32::from_rgb(0x63, 0x6e, 0x72),
                particle: Color32::from_white_alpha(26),
                particle_radius: 2.0,
                placeholder: Color32::from_rgb(0x2d, 0x34, 0x36),
            },
            ThemeVariant::Light => Self {
                background_top: Color32::from_rgb(0x74, 0xb9, 0xff),
                background_bottom: Color32::from_rgb(0x6c, 0x5c, 0xe7),
                text: Color32::from_rgb(0x2d, 0x34, 0x36),
                heading: Color32::WHITE,
                tile_fill: Color32::from_white_alpha(242),
                tile_stroke: Color32::from_white_alpha(204),
                tile_overlay: Color32::from_black_alpha(204),
                backdrop: Color32::from_rgba_unmultiplied(116, 185, 255, 230),
                close_button: Color32::from_black_alpha(77),
                toggle_track: Color32::from_rgb(0x09, 0x84, 0xe3),
                toggle_thumb: Color32::from_rgb(0xf3, 0x9c, 0x12),
                particle: Color32::from_white_alpha(26),
                particle_radius: 3.0,
                placeholder: Color32::from_rgb(0xb2, 0xbe, 0xc3),
            },
        }
    }

    pub fn visuals(variant: ThemeVariant) -> egui::Visuals {
        match variant {
            ThemeVariant::Dark => egui::Visuals::dark(),
            ThemeVariant::Light => egui::Visuals::light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_depends_only_on_variant() {
        assert_eq!(
            Palette::for_variant(ThemeVariant::Dark),
            Palette::for_variant(ThemeVariant::Dark)
        );
        assert_ne!(
            Palette::for_variant(ThemeVariant::Dark).background_top,
            Palette::for_variant(ThemeVariant::Light).background_top
        );
    }
}
