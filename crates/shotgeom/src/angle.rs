//! Shot angle ∠APB and sweeps along a walk line.

use nalgebra::Vector2;

use crate::cfg::GeomCfg;
use crate::error::GeomError;
use crate::util::linspace;

/// Angle at `p` between rays `p→a` and `p→b`, in `[0, π]`.
///
/// Returns 0 when `p` coincides with `a` or `b` so the evaluator stays total.
/// That value is a display convention, not a meaningful angle.
pub fn shot_angle(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    shot_angle_with(p, a, b, GeomCfg::default())
}

/// Same as `shot_angle`, treating rays shorter than `cfg.eps_len` as degenerate.
pub fn shot_angle_with(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>, cfg: GeomCfg) -> f64 {
    let v1 = a - p;
    let v2 = b - p;
    let n1 = v1.norm();
    let n2 = v2.norm();
    if n1 <= cfg.eps_len || n2 <= cfg.eps_len {
        return 0.0;
    }
    // clamp absorbs rounding overshoot past ±1
    let c = (v1.dot(&v2) / (n1 * n2)).clamp(-1.0, 1.0);
    c.acos()
}

/// One sample of the angle along a vertical walk line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSample {
    pub y: f64,
    /// Radians.
    pub angle: f64,
}

impl AngleSample {
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.angle.to_degrees()
    }
}

/// Evenly spaced samples `y_min..=y_max` on `x = line_x`.
pub fn angle_sweep(
    a: Vector2<f64>,
    b: Vector2<f64>,
    line_x: f64,
    y_min: f64,
    y_max: f64,
    samples: usize,
) -> Result<Vec<AngleSample>, GeomError> {
    let ys = linspace(y_min, y_max, samples)?;
    Ok(ys
        .into_iter()
        .map(|y| AngleSample {
            y,
            angle: shot_angle(Vector2::new(line_x, y), a, b),
        })
        .collect())
}

/// Sample with the largest angle (first one on ties).
pub fn best_sample(samples: &[AngleSample]) -> Option<AngleSample> {
    let mut best: Option<AngleSample> = None;
    for s in samples {
        if best.as_ref().is_none_or(|b| s.angle > b.angle) {
            best = Some(*s);
        }
    }
    best
}
