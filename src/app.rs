use std::path::PathBuf;

use eframe::egui;

use crate::config::{Config, PlotMode};
use crate::state::AppState;
use crate::ui::{collage, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SonarPlotApp {
    pub state: AppState,
}

impl SonarPlotApp {
    /// Create the app, loading `initial` right away when given.
    pub fn new(config: Config, initial: Option<PathBuf>) -> Self {
        let mut state = AppState::new(config);
        if let Some(path) = initial {
            state.open(path);
        }
        Self { state }
    }
}

impl eframe::App for SonarPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: view options and layers ----
        egui::SidePanel::left("layer_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.mode() {
            PlotMode::Overlay => plot::overlay_plot(ui, &self.state),
            PlotMode::Collage => collage::collage(ui, &self.state),
        });
    }
}
