use std::collections::{BTreeMap, BTreeSet};

use clap::ValueEnum;
use eframe::egui::Color32;
use palette::{FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

use crate::data::model::LayerKey;

// ---------------------------------------------------------------------------
// Spectrum: one hue per distinct layer
// ---------------------------------------------------------------------------

const SPECTRUM_SATURATION: f32 = 0.8;
const SPECTRUM_LIGHTNESS: f32 = 0.4;

/// Colour of the `index`-th of `count` layers.  Hues start at red and walk
/// the wheel in equal steps, so neighbouring layers never share a hue.
pub fn spectrum_color(index: usize, count: usize) -> Color32 {
    let hue = 360.0 * index as f32 / count.max(1) as f32;
    let rgb = Srgb::from_color(Hsl::new(hue, SPECTRUM_SATURATION, SPECTRUM_LIGHTNESS))
        .into_format::<u8>();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

/// Fixed colours for the first four depth layers (0, 1, 2, 3).
const CLASSIC: [(f64, Color32); 4] = [
    (0.0, Color32::from_rgb(255, 0, 0)),
    (1.0, Color32::from_rgb(0, 255, 0)),
    (2.0, Color32::from_rgb(0, 0, 255)),
    (3.0, Color32::from_rgb(255, 200, 0)),
];

/// How layer colours are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Evenly spaced hues over the distinct layers of the file.
    #[default]
    Spectrum,
    /// Red, green, blue, orange for layers 0–3; gray for anything else.
    Classic,
}

impl Palette {
    pub const ALL: [Palette; 2] = [Palette::Spectrum, Palette::Classic];

    pub fn label(&self) -> &'static str {
        match self {
            Palette::Spectrum => "Spectrum",
            Palette::Classic => "Classic",
        }
    }
}

// ---------------------------------------------------------------------------
// Color mapping: layer → Color32
// ---------------------------------------------------------------------------

/// Maps each distinct layer to a colour.  Deterministic for a given file.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<LayerKey, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map for the given layers.
    pub fn new(palette: Palette, layers: &BTreeSet<LayerKey>) -> Self {
        let mapping: BTreeMap<LayerKey, Color32> = match palette {
            Palette::Spectrum => layers
                .iter()
                .enumerate()
                .map(|(i, &k)| (k, spectrum_color(i, layers.len())))
                .collect(),
            Palette::Classic => CLASSIC
                .iter()
                .map(|&(layer, c)| (LayerKey(layer), c))
                .filter(|(k, _)| layers.contains(k))
                .collect(),
        };

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given layer.
    pub fn color_for(&self, layer: LayerKey) -> Color32 {
        self.mapping
            .get(&layer)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers(values: &[f64]) -> BTreeSet<LayerKey> {
        values.iter().copied().map(LayerKey).collect()
    }

    #[test]
    fn spectrum_starts_at_red_and_stays_distinct() {
        let first = spectrum_color(0, 6);
        assert!(first.r() > first.g() && first.r() > first.b());
        let unique: BTreeSet<[u8; 4]> = (0..6).map(|i| spectrum_color(i, 6).to_array()).collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn single_layer_spectrum_does_not_divide_by_zero() {
        assert_eq!(spectrum_color(0, 0), spectrum_color(0, 1));
    }

    #[test]
    fn spectrum_is_deterministic() {
        let ls = layers(&[0.0, 1.0, 2.0]);
        let a = ColorMap::new(Palette::Spectrum, &ls);
        let b = ColorMap::new(Palette::Spectrum, &ls);
        for k in &ls {
            assert_eq!(a.color_for(*k), b.color_for(*k));
        }
        assert_ne!(a.color_for(LayerKey(0.0)), a.color_for(LayerKey(1.0)));
    }

    #[test]
    fn classic_uses_fixed_colours_and_gray_fallback() {
        let cm = ColorMap::new(Palette::Classic, &layers(&[0.0, 3.0, 7.0]));
        assert_eq!(cm.color_for(LayerKey(0.0)), Color32::from_rgb(255, 0, 0));
        assert_eq!(cm.color_for(LayerKey(3.0)), Color32::from_rgb(255, 200, 0));
        assert_eq!(cm.color_for(LayerKey(7.0)), Color32::GRAY);
    }

    #[test]
    fn unknown_layer_is_gray() {
        let cm = ColorMap::new(Palette::Spectrum, &layers(&[1.0]));
        assert_eq!(cm.color_for(LayerKey(42.0)), Color32::GRAY);
    }
}
