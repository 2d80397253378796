use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Overlay plot (central panel)
// ---------------------------------------------------------------------------

/// Draw every visible layer into one plot area.  Each layer was normalized to
/// the unit square on its own, so layers of different size fill the same area.
pub fn overlay_plot(ui: &mut Ui, state: &AppState) {
    if super::empty_view(ui, state) {
        return;
    }

    let radius = state.config.overlay.marker_radius;

    Plot::new("overlay_plot")
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .include_x(0.0)
        .include_x(1.0)
        .include_y(0.0)
        .include_y(1.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for layer in state.scene.select(&state.visible_indices) {
                // Scene rows run top → bottom, plot y runs bottom → top.
                let points: PlotPoints = layer
                    .points
                    .iter()
                    .map(|&[u, v]| [u, 1.0 - v])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(&layer.title)
                        .color(layer.color)
                        .shape(MarkerShape::Square)
                        .radius(radius),
                );
            }
        });
}
