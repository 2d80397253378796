use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::data::model::SonarDataset;
use crate::data::normalize::BoundingBox;

// ---------------------------------------------------------------------------
// Pre-normalized draw instructions
// ---------------------------------------------------------------------------

/// One layer group ready to draw: points already in unit cell space.
#[derive(Debug, Clone)]
pub struct LayerPlot {
    pub title: String,
    pub color: Color32,
    /// Bounds the points were normalized against (after padding).
    pub bounds: BoundingBox,
    /// `[u, v]` in `[0, 1]²`, `u` left → right, `v` top → bottom.
    pub points: Vec<[f64; 2]>,
}

/// Every group of a dataset, in input order, ready for either view.
///
/// Built once per load, palette or mode change; painting only scales the
/// unit coordinates to whatever rectangle it has.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub plots: Vec<LayerPlot>,
}

impl Scene {
    /// `padding` grows each group's bounding box by that many data units.
    pub fn build(dataset: &SonarDataset, colors: &ColorMap, padding: f64) -> Self {
        let plots = dataset
            .groups
            .iter()
            .filter_map(|group| {
                let bounds = BoundingBox::of(group.points())?.padded(padding);
                if bounds.is_degenerate() {
                    log::debug!("{} has a degenerate bounding box, centring it", group.title());
                }
                let points = group
                    .points()
                    .iter()
                    .map(|p| bounds.to_unit(p.x, p.y))
                    .collect();
                Some(LayerPlot {
                    title: group.title(),
                    color: colors.color_for(group.key()),
                    bounds,
                    points,
                })
            })
            .collect();
        Scene { plots }
    }

    /// Plots at the given group indices, skipping any out of range.
    pub fn select<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a LayerPlot> + 'a {
        indices.iter().filter_map(|&i| self.plots.get(i))
    }
}
