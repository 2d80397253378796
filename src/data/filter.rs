use std::collections::BTreeSet;

use super::model::{LayerKey, SonarDataset};

// ---------------------------------------------------------------------------
// Layer selection: which layers are drawn
// ---------------------------------------------------------------------------

/// Set of layers currently shown.  An empty set hides everything.
pub type LayerSelection = BTreeSet<LayerKey>;

/// Initialise a [`LayerSelection`] with every layer selected.
pub fn init_selection(dataset: &SonarDataset) -> LayerSelection {
    dataset.layers.clone()
}

/// Return indices of groups whose layer is selected, in input order.
pub fn visible_groups(dataset: &SonarDataset, selection: &LayerSelection) -> Vec<usize> {
    dataset
        .groups
        .iter()
        .enumerate()
        .filter(|(_, g)| selection.contains(&g.key()))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::grouping::LayerGrouper;
    use crate::data::model::Sample;

    fn dataset(layers: &[f64]) -> SonarDataset {
        let mut grouper = LayerGrouper::new();
        for &layer in layers {
            grouper.push(&Sample {
                layer,
                angle_degrees: 0.0,
                distance: 1.0,
            });
        }
        SonarDataset::from_groups(grouper.finish())
    }

    #[test]
    fn everything_visible_initially() {
        let ds = dataset(&[0.0, 1.0, 0.0]);
        let sel = init_selection(&ds);
        assert_eq!(visible_groups(&ds, &sel), vec![0, 1, 2]);
    }

    #[test]
    fn deselecting_a_layer_hides_all_its_runs() {
        let ds = dataset(&[0.0, 1.0, 0.0, 2.0]);
        let mut sel = init_selection(&ds);
        sel.remove(&LayerKey(0.0));
        assert_eq!(visible_groups(&ds, &sel), vec![1, 3]);
    }

    #[test]
    fn negative_zero_layer_follows_zero_checkbox() {
        let ds = dataset(&[0.0, 1.0, -0.0]);
        assert_eq!(ds.layers.len(), 2);
        let mut sel = init_selection(&ds);
        sel.remove(&LayerKey(0.0));
        assert_eq!(visible_groups(&ds, &sel), vec![1]);
    }

    #[test]
    fn empty_selection_hides_everything() {
        let ds = dataset(&[0.0, 1.0]);
        assert!(visible_groups(&ds, &LayerSelection::new()).is_empty());
    }
}
