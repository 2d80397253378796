use super::model::{LayerGroup, Sample};

// ---------------------------------------------------------------------------
// Adjacency-based grouping
// ---------------------------------------------------------------------------

/// Splits an ordered stream of samples into runs of equal layer value.
///
/// A new group starts whenever a sample's layer differs from the previous
/// accepted sample's layer, so `[0, 0, 1, 1, 0]` yields three groups, not two.
/// Comparison is plain IEEE `!=`: a NaN layer always opens a new group.
#[derive(Debug, Default)]
pub struct LayerGrouper {
    current: Option<LayerGroup>,
    groups: Vec<LayerGroup>,
}

impl LayerGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project `sample` and append it, closing the open group on a layer change.
    pub fn push(&mut self, sample: &Sample) {
        let point = sample.project();
        if let Some(group) = self
            .current
            .as_mut()
            .filter(|g| g.layer() == sample.layer)
        {
            group.push(point);
            return;
        }
        if let Some(done) = self.current.replace(LayerGroup::new(point)) {
            self.groups.push(done);
        }
    }

    /// Close the open group and return all groups in input order.
    pub fn finish(mut self) -> Vec<LayerGroup> {
        if let Some(last) = self.current.take() {
            self.groups.push(last);
        }
        self.groups
    }
}
