use super::model::{ProjectedPoint, Sample};

/// Fold an angle into (-360, 360).  `%` keeps the sign of the dividend, so
/// `-90` stays `-90` rather than becoming `270`; sine and cosine are periodic
/// so the projected point is the same either way.
#[inline]
pub fn normalize_angle(angle_degrees: f64) -> f64 {
    angle_degrees % 360.0
}

/// Convert a polar reading to Cartesian `(x, y)`.
#[inline]
pub fn project(angle_degrees: f64, distance: f64) -> (f64, f64) {
    let theta = normalize_angle(angle_degrees).to_radians();
    (distance * theta.cos(), distance * theta.sin())
}

impl Sample {
    /// Project this sample, carrying its layer along.
    pub fn project(&self) -> ProjectedPoint {
        let (x, y) = project(self.angle_degrees, self.distance);
        ProjectedPoint {
            x,
            y,
            layer: self.layer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
    }

    #[test]
    fn cardinal_directions() {
        assert!(close(project(0.0, 10.0), (10.0, 0.0)));
        assert!(close(project(90.0, 10.0), (0.0, 10.0)));
        assert!(close(project(180.0, 2.0), (-2.0, 0.0)));
        assert!(close(project(270.0, 2.0), (0.0, -2.0)));
    }

    #[test]
    fn matches_formula_for_arbitrary_samples() {
        for &(a, d) in &[(12.5, 3.0), (359.9, 1.0), (725.0, 4.2), (-33.0, 7.7)] {
            let rad = (a % 360.0_f64).to_radians();
            assert!(close(project(a, d), (d * rad.cos(), d * rad.sin())));
        }
    }

    #[test]
    fn negative_angle_keeps_its_sign() {
        assert_eq!(normalize_angle(-90.0), -90.0);
        assert_eq!(normalize_angle(-450.0), -90.0);
        assert_eq!(normalize_angle(450.0), 90.0);
        assert!(close(project(-90.0, 10.0), (0.0, -10.0)));
    }

    #[test]
    fn symmetric_and_true_modulo_agree_after_trig() {
        for i in -20..20 {
            let a = i as f64 * 47.3;
            let sym = normalize_angle(a).to_radians();
            let true_mod = a.rem_euclid(360.0).to_radians();
            assert!((sym.cos() - true_mod.cos()).abs() < EPS, "cos at {a}");
            assert!((sym.sin() - true_mod.sin()).abs() < EPS, "sin at {a}");
        }
    }

    #[test]
    fn non_finite_input_propagates() {
        let (x, y) = project(f64::NAN, 1.0);
        assert!(x.is_nan() && y.is_nan());
        let (x, _) = project(0.0, f64::INFINITY);
        assert!(x.is_infinite());
    }

    #[test]
    fn sample_projection_keeps_layer() {
        let p = Sample {
            layer: 4.0,
            angle_degrees: 0.0,
            distance: 5.0,
        }
        .project();
        assert_eq!(p.layer, 4.0);
        assert!((p.x - 5.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }
}
