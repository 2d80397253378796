use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// LayerKey – a layer value usable as a map / set key
// ---------------------------------------------------------------------------

/// A layer (Z) value with a total order.
/// Using `BTreeMap` / `BTreeSet` downstream so the key must be `Ord`.
/// `-0.0` and `0.0` are the same key, matching how grouping compares layers.
#[derive(Debug, Clone, Copy)]
pub struct LayerKey(pub f64);

impl LayerKey {
    /// The value with negative zero folded into positive zero.
    fn canonical(&self) -> f64 {
        self.0 + 0.0
    }
}

// -- Manual Eq/Ord so we can put LayerKey in BTreeSet --

impl PartialEq for LayerKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for LayerKey {}

impl PartialOrd for LayerKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LayerKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

impl std::hash::Hash for LayerKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state);
    }
}

impl fmt::Display for LayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

// ---------------------------------------------------------------------------
// Sample – one accepted input line
// ---------------------------------------------------------------------------

/// A raw sonar ping: which layer it belongs to, where the head pointed and
/// how far away the echo was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub layer: f64,
    pub angle_degrees: f64,
    pub distance: f64,
}

// ---------------------------------------------------------------------------
// ProjectedPoint / LayerGroup
// ---------------------------------------------------------------------------

/// A sample after polar → Cartesian projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub layer: f64,
}

/// A run of adjacent points sharing one layer value.  Never empty.
#[derive(Debug, Clone)]
pub struct LayerGroup {
    layer: f64,
    points: Vec<ProjectedPoint>,
}

impl LayerGroup {
    /// Open a group with its first point.
    pub fn new(first: ProjectedPoint) -> Self {
        LayerGroup {
            layer: first.layer,
            points: vec![first],
        }
    }

    pub(crate) fn push(&mut self, point: ProjectedPoint) {
        self.points.push(point);
    }

    pub fn layer(&self) -> f64 {
        self.layer
    }

    pub fn key(&self) -> LayerKey {
        LayerKey(self.layer)
    }

    pub fn points(&self) -> &[ProjectedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Label drawn next to the group in both plot modes.
    pub fn title(&self) -> String {
        format!("Z: {}", self.key())
    }
}

// ---------------------------------------------------------------------------
// SonarDataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All layer groups of one file, in input order, plus the distinct layers.
#[derive(Debug, Clone, Default)]
pub struct SonarDataset {
    /// Groups in the order they appeared in the file.
    pub groups: Vec<LayerGroup>,
    /// Sorted set of distinct layer values.
    pub layers: BTreeSet<LayerKey>,
}

impl SonarDataset {
    /// Build the layer index from the grouped points.
    pub fn from_groups(groups: Vec<LayerGroup>) -> Self {
        let layers = groups.iter().map(LayerGroup::key).collect();
        SonarDataset { groups, layers }
    }

    /// Number of layer groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no group was loaded.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of projected points across all groups.
    pub fn point_count(&self) -> usize {
        self.groups.iter().map(LayerGroup::len).sum()
    }
}
