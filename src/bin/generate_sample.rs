//! Writes `sample_data.csv` (or the path given as the first argument): a
//! rectangular pool scanned from an off-centre transducer at several depths.

use anyhow::Context;

/// Pool walls relative to the transducer, in metres: (min_x, max_x, min_y, max_y).
const POOL: (f64, f64, f64, f64) = (-2.0, 4.0, -1.5, 2.5);
const DEPTHS: u32 = 4;
/// The sonar head steps through 400 positions per sweep.
const STEPS: u32 = 400;

/// Distance from the origin along `angle_deg` to the first wall of a box.
fn distance_to_wall(angle_deg: f64, (min_x, max_x, min_y, max_y): (f64, f64, f64, f64)) -> f64 {
    let (dy, dx) = angle_deg.to_radians().sin_cos();
    let mut best = f64::INFINITY;
    if dx > 0.0 {
        best = best.min(max_x / dx);
    } else if dx < 0.0 {
        best = best.min(min_x / dx);
    }
    if dy > 0.0 {
        best = best.min(max_y / dy);
    } else if dy < 0.0 {
        best = best.min(min_y / dy);
    }
    best
}

/// SplitMix64: enough randomness for noise, and the same file on every run.
struct Noise(u64);

impl Noise {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Standard normal via Box-Muller; only the cosine branch is used.
    fn normal(&mut self) -> f64 {
        let r = (-2.0 * (1.0 - self.unit()).ln()).sqrt();
        r * (std::f64::consts::TAU * self.unit()).cos()
    }
}

fn main() -> anyhow::Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_data.csv".to_string());

    let mut noise = Noise(42);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&output_path)
        .with_context(|| format!("cannot create {output_path}"))?;

    for depth in 0..DEPTHS {
        // The floor slopes, so deeper sweeps see a slightly smaller outline.
        let shrink = 1.0 - 0.06 * depth as f64;
        let walls = (POOL.0 * shrink, POOL.1 * shrink, POOL.2 * shrink, POOL.3 * shrink);

        for angle in 0..STEPS {
            let clean = distance_to_wall(angle as f64, walls);
            // Occasional multipath echo lands well past the wall.
            let echo = if noise.unit() < 0.02 { noise.unit() * 1.5 } else { 0.0 };
            let distance = (clean + echo + 0.03 * noise.normal()).max(0.2);

            writer.write_record([depth.to_string(), angle.to_string(), format!("{distance:.3}")])?;
        }
    }
    writer.flush()?;

    println!(
        "Wrote {} pings ({DEPTHS} layers × {STEPS} angles) to {output_path}",
        DEPTHS * STEPS
    );
    Ok(())
}
