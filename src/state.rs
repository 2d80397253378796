use std::path::PathBuf;

use crate::color::{ColorMap, Palette};
use crate::config::{Config, PlotMode};
use crate::data::filter::{LayerSelection, init_selection, visible_groups};
use crate::data::loader::load_file;
use crate::data::model::{LayerKey, SonarDataset};
use crate::scene::Scene;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Loaded dataset (None until a file loads).
    pub dataset: Option<SonarDataset>,

    /// File the dataset came from, for reloading.
    pub source: Option<PathBuf>,

    /// Layers currently shown.
    pub selection: LayerSelection,

    /// Indices of groups passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Active colour map.
    pub color_map: Option<ColorMap>,

    /// Draw instructions for the current mode.
    pub scene: Scene,

    /// Lines dropped by the last load.
    pub skipped_lines: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            dataset: None,
            source: None,
            selection: LayerSelection::new(),
            visible_indices: Vec::new(),
            color_map: None,
            scene: Scene::default(),
            skipped_lines: 0,
            status_message: None,
        }
    }

    pub fn mode(&self) -> PlotMode {
        self.config.mode
    }

    /// Load `path` and replace the current dataset.
    ///
    /// If the file cannot be opened the view is cleared.  If reading stops
    /// part-way, the groups read so far are kept and the reason is shown.
    pub fn open(&mut self, path: PathBuf) {
        match load_file(&path, self.config.parse_policy) {
            Ok(report) => {
                self.skipped_lines = report.skipped.len();
                self.set_dataset(report.dataset);
                self.status_message = report
                    .aborted
                    .map(|e| format!("Load stopped early: {e:#}"));
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.clear();
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
        self.source = Some(path);
    }

    /// Re-read the current source file, e.g. after changing the parse policy.
    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.open(path);
        }
    }

    /// Ingest a newly loaded dataset, initialise the selection and colours.
    pub fn set_dataset(&mut self, dataset: SonarDataset) {
        self.selection = init_selection(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.color_map = Some(ColorMap::new(self.config.palette, &dataset.layers));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.rebuild_scene();
    }

    fn clear(&mut self) {
        self.dataset = None;
        self.selection.clear();
        self.visible_indices.clear();
        self.color_map = None;
        self.scene = Scene::default();
        self.skipped_lines = 0;
    }

    /// Recompute the draw instructions for the current mode and palette.
    pub fn rebuild_scene(&mut self) {
        let (Some(ds), Some(colors)) = (&self.dataset, &self.color_map) else {
            self.scene = Scene::default();
            return;
        };
        let padding = match self.config.mode {
            PlotMode::Overlay => self.config.overlay.data_padding,
            PlotMode::Collage => 0.0,
        };
        self.scene = Scene::build(ds, colors, padding);
    }

    pub fn set_mode(&mut self, mode: PlotMode) {
        if self.config.mode != mode {
            self.config.mode = mode;
            self.rebuild_scene();
        }
    }

    pub fn set_palette(&mut self, palette: Palette) {
        if self.config.palette == palette {
            return;
        }
        self.config.palette = palette;
        if let Some(ds) = &self.dataset {
            self.color_map = Some(ColorMap::new(palette, &ds.layers));
        }
        self.rebuild_scene();
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = visible_groups(ds, &self.selection);
        }
    }

    /// Toggle a single layer on or off.
    pub fn toggle_layer(&mut self, layer: LayerKey) {
        if !self.selection.remove(&layer) {
            self.selection.insert(layer);
        }
        self.refilter();
    }

    pub fn select_all(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selection = init_selection(ds);
            self.refilter();
        }
    }

    pub fn select_none(&mut self) {
        self.selection.clear();
        self.refilter();
    }
}
