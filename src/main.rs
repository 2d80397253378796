mod app;
mod color;
mod config;
mod data;
mod scene;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eframe::egui;

use app::SonarPlotApp;
use color::Palette;
use config::{Config, PlotMode};
use data::loader::ParsePolicy;

#[derive(Parser, Debug)]
#[command(name = "sonar-plot")]
#[command(version, about = "Plot layered sonar ping data as overlay or collage scatter plots")]
struct Args {
    /// CSV file with `layer,angle,distance` lines
    file: Option<PathBuf>,

    /// How layers are arranged
    #[arg(short, long)]
    mode: Option<PlotMode>,

    /// What to do with lines holding a non-numeric field
    #[arg(short, long)]
    policy: Option<ParsePolicy>,

    /// Layer colour scheme
    #[arg(long)]
    palette: Option<Palette>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(policy) = args.policy {
        config.parse_policy = policy;
    }
    if let Some(palette) = args.palette {
        config.palette = palette;
    }
    let initial = args.file.or_else(|| config.data_file.clone());

    log::info!("Starting in {:?} mode", config.mode);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sonar Data Plot",
        options,
        Box::new(move |_cc| Ok(Box::new(SonarPlotApp::new(config, initial)))),
    )
    .map_err(|e| anyhow::anyhow!("running the viewer: {e}"))
}
