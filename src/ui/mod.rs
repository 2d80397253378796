use eframe::egui::Ui;

use crate::state::AppState;

pub mod collage;
pub mod panels;
pub mod plot;

/// Show a hint in place of the plot when there is nothing to draw.
/// Returns `true` when the hint was shown.
pub fn empty_view(ui: &mut Ui, state: &AppState) -> bool {
    let hint = match &state.dataset {
        None => "Open a sonar data file  (File → Open…)",
        Some(ds) if ds.is_empty() => "No samples found in this file",
        Some(_) => return false,
    };
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(hint);
    });
    true
}
