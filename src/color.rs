use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Point color for records whose type is absent or unknown, and for the
/// centroid marker.
pub const DEFAULT_POINT_COLOR: Color32 = Color32::from_rgb(200, 30, 0);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: volcano type → Color32
// ---------------------------------------------------------------------------

/// Maps the distinct volcano types of a dataset to distinct colours for the
/// map layer.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map from the dataset's sorted distinct types.
    pub fn new(kinds: &[String]) -> Self {
        let palette = generate_palette(kinds.len());
        let mapping: BTreeMap<String, Color32> = kinds
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();
        ColorMap { mapping }
    }

    /// Colour for a record's type; absent or unknown types get the default
    /// point colour.
    pub fn color_for(&self, kind: Option<&str>) -> Color32 {
        kind.and_then(|k| self.mapping.get(k).copied())
            .unwrap_or(DEFAULT_POINT_COLOR)
    }

    /// Legend entries (type label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(k, c)| (k.clone(), *c))
            .collect()
    }
}
