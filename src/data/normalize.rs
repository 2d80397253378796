use super::model::ProjectedPoint;

// ---------------------------------------------------------------------------
// Linear remap
// ---------------------------------------------------------------------------

/// Whether `[from_min, from_max]` is too narrow to divide by.
#[inline]
pub fn is_degenerate(from_min: f64, from_max: f64) -> bool {
    (from_max - from_min).abs() < f64::EPSILON
}

/// Map `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// A degenerate source range (a one-point or collinear layer) maps every
/// value to the midpoint of the target range.
pub fn remap(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    if is_degenerate(from_min, from_max) {
        return (to_min + to_max) / 2.0;
    }
    (value - from_min) * (to_max - to_min) / (from_max - from_min) + to_min
}

// ---------------------------------------------------------------------------
// Bounding box
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn of(points: &[ProjectedPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(points[1..].iter().fold(init, |b, p| BoundingBox {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Grow the box by `margin` data units on every side.
    pub fn padded(&self, margin: f64) -> Self {
        BoundingBox {
            min_x: self.min_x - margin,
            max_x: self.max_x + margin,
            min_y: self.min_y - margin,
            max_y: self.max_y + margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when either axis collapses to a single value.
    pub fn is_degenerate(&self) -> bool {
        is_degenerate(self.min_x, self.max_x) || is_degenerate(self.min_y, self.max_y)
    }

    /// Position of `(x, y)` inside the box as unit cell coordinates.
    ///
    /// `u` runs left → right and `v` top → bottom.  The x axis is mirrored
    /// (`max_x` lands at `u = 0`) and larger y is drawn higher (`max_y` at
    /// `v = 0`), for both overlay and collage views.
    pub fn to_unit(&self, x: f64, y: f64) -> [f64; 2] {
        [
            remap(-x, -self.max_x, -self.min_x, 0.0, 1.0),
            remap(-y, -self.max_y, -self.min_y, 0.0, 1.0),
        ]
    }
}
