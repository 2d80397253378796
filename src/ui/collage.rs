use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, ScrollArea, Sense, Stroke, StrokeKind, Ui, pos2, vec2,
};

use crate::config::CollageConfig;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Cell layout
// ---------------------------------------------------------------------------

/// Place `count` cells left to right, starting a new row once the next cell
/// would run past `available_width`.  Rects are relative to the canvas origin.
pub fn layout_cells(count: usize, available_width: f32, cfg: &CollageConfig) -> Vec<Rect> {
    let size = vec2(cfg.cell_width, cfg.cell_height);
    let mut x = cfg.origin;
    let mut y = cfg.origin;
    let mut cells = Vec::with_capacity(count);

    for _ in 0..count {
        cells.push(Rect::from_min_size(pos2(x, y), size));
        x += cfg.cell_width + cfg.gap;
        if x + cfg.cell_width > available_width {
            x = cfg.origin;
            y += cfg.cell_height + cfg.gap;
        }
    }
    cells
}

/// Area inside a cell where points land: below the title strip, inset on the
/// right and bottom.
pub fn data_rect(cell: Rect, cfg: &CollageConfig) -> Rect {
    Rect::from_min_max(
        pos2(cell.left(), cell.top() + cfg.title_height),
        pos2(
            cell.right() - cfg.data_padding,
            cell.bottom() - cfg.data_padding,
        ),
    )
}

/// Centre of a marker whose bounding square has its top-left corner at `point`.
pub fn marker_center(point: Pos2, diameter: f32) -> Pos2 {
    point + vec2(diameter, diameter) / 2.0
}

/// Smallest canvas that holds every cell plus the outer margin.
fn canvas_size(cells: &[Rect], cfg: &CollageConfig) -> egui::Vec2 {
    cells
        .iter()
        .fold(egui::Vec2::ZERO, |acc, c| acc.max(c.max.to_vec2()))
        + vec2(cfg.origin, cfg.origin)
}

// ---------------------------------------------------------------------------
// Collage view (central panel)
// ---------------------------------------------------------------------------

/// Draw one bordered, titled cell per visible layer group.
pub fn collage(ui: &mut Ui, state: &AppState) {
    if super::empty_view(ui, state) {
        return;
    }

    let cfg = &state.config.collage;
    let layers: Vec<_> = state.scene.select(&state.visible_indices).collect();
    let cells = layout_cells(layers.len(), ui.available_width(), cfg);
    let size = canvas_size(&cells, cfg);

    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let (response, painter) = ui.allocate_painter(size, Sense::hover());
            let offset = response.rect.min.to_vec2();

            for (layer, cell) in layers.iter().zip(&cells) {
                let cell = cell.translate(offset);
                painter.rect_filled(cell, 0.0, Color32::WHITE);
                painter.rect_stroke(
                    cell,
                    0.0,
                    Stroke::new(1.0, Color32::BLACK),
                    StrokeKind::Inside,
                );
                painter.text(
                    pos2(cell.left() + 5.0, cell.top() + cfg.title_height - 5.0),
                    Align2::LEFT_BOTTOM,
                    &layer.title,
                    FontId::proportional(13.0),
                    Color32::BLACK,
                );
                painter.text(
                    pos2(cell.right() - 5.0, cell.top() + cfg.title_height - 5.0),
                    Align2::RIGHT_BOTTOM,
                    format!("{:.2} × {:.2}", layer.bounds.width(), layer.bounds.height()),
                    FontId::proportional(11.0),
                    Color32::DARK_GRAY,
                );

                let area = data_rect(cell, cfg);
                for &[u, v] in &layer.points {
                    let p = area.lerp_inside(vec2(u as f32, v as f32));
                    painter.circle_filled(
                        marker_center(p, cfg.marker_diameter),
                        cfg.marker_diameter / 2.0,
                        layer.color,
                    );
                }
            }
        });
}
