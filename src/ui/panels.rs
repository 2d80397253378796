use std::collections::BTreeMap;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::Palette;
use crate::config::PlotMode;
use crate::data::loader::ParsePolicy;
use crate::data::model::LayerKey;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – view options and layer toggles
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("View");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        for mode in PlotMode::ALL {
            if ui
                .selectable_label(state.mode() == mode, mode.label())
                .clicked()
            {
                state.set_mode(mode);
            }
        }
    });

    ui.strong("Colors");
    let current = state.config.palette;
    egui::ComboBox::from_id_salt("palette")
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for palette in Palette::ALL {
                if ui.selectable_label(current == palette, palette.label()).clicked() {
                    state.set_palette(palette);
                }
            }
        });

    ui.strong("Non-numeric fields");
    let policy = state.config.parse_policy;
    ui.horizontal(|ui: &mut Ui| {
        for (p, label) in [(ParsePolicy::Skip, "Skip line"), (ParsePolicy::Abort, "Stop load")] {
            if ui.selectable_label(policy == p, label).clicked() && policy != p {
                state.config.parse_policy = p;
                state.reload();
            }
        }
    });

    ui.add_space(8.0);
    ui.heading("Layers");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No data loaded.");
            return;
        }
    };

    // Snapshot what we need so we can mutate state inside the loop.
    let mut points_per_layer: BTreeMap<LayerKey, usize> = BTreeMap::new();
    for group in &dataset.groups {
        *points_per_layer.entry(group.key()).or_default() += group.len();
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (layer, n_points) in &points_per_layer {
                let mut text = RichText::new(format!("Z: {layer}  ({n_points} pts)"));
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(*layer));
                }

                let mut checked = state.selection.contains(layer);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_layer(*layer);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} layer groups ({} points), {} visible, {} lines skipped",
                ds.len(),
                ds.point_count(),
                state.visible_indices.len(),
                state.skipped_lines
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sonar data")
        .add_filter("Sonar data", &["csv", "txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.open(path);
    }
}
