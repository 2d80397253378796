/// Data layer: parsing, projection, grouping and normalization.
///
/// Architecture:
/// ```text
///  layer,angle,distance  (one ping per line)
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  line → Sample (or skipped line)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ projection  │  angle % 360, polar → (x, y)
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ grouping  │  adjacent equal layers → LayerGroup
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SonarDataset  │  Vec<LayerGroup>, layer index
///   └──────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  per-group bounding box → unit cell coordinates
///   └───────────┘
/// ```

pub mod filter;
pub mod grouping;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod projection;
