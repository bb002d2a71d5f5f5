//! Circle through two posts tangent to a vertical walk line.
//!
//! Model
//! - Posts are level and mirrored about `x = 0`, so the perpendicular bisector
//!   is the y-axis and the center is `(0, y0 + cy)`.
//! - Equidistance from the posts and from the line gives
//!   `half² + cy² = line_x²`, hence `cy = sqrt(line_x² − half²)` and
//!   radius `|line_x|`. The tangency point is `(line_x, y0 + cy)`.
//! - Of the two mirror circles the one on the `+y` side (the field) is returned.

use nalgebra::Vector2;

use crate::cfg::GeomCfg;
use crate::error::GeomError;

/// Circle in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    /// Signed distance from `p` to the circle (negative inside).
    #[inline]
    pub fn signed_distance(&self, p: Vector2<f64>) -> f64 {
        (p - self.center).norm() - self.radius
    }
}

/// Solution of the tangent-circle problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tangency {
    pub circle: Circle,
    /// Point on the walk line where the circle touches it.
    pub point: Vector2<f64>,
}

/// Circle through `post_a`, `post_b` tangent to `x = line_x`, default tolerances.
pub fn solve_tangent_circle(
    post_a: Vector2<f64>,
    post_b: Vector2<f64>,
    line_x: f64,
) -> Result<Tangency, GeomError> {
    solve_tangent_circle_with(post_a, post_b, line_x, GeomCfg::default())
}

/// Pre: posts share y and satisfy `a.x = −b.x` (within `cfg.eps_sym`, scaled).
/// Post: `|center − post| = radius = |line_x|` for both posts; tangency lies on the line.
pub fn solve_tangent_circle_with(
    post_a: Vector2<f64>,
    post_b: Vector2<f64>,
    line_x: f64,
    cfg: GeomCfg,
) -> Result<Tangency, GeomError> {
    let scale = 1.0_f64.max(post_a.x.abs()).max(post_b.x.abs());
    let tol = cfg.eps_sym * scale;
    if (post_a.y - post_b.y).abs() > tol || (post_a.x + post_b.x).abs() > tol {
        return Err(GeomError::AsymmetricPosts {
            a: (post_a.x, post_a.y),
            b: (post_b.x, post_b.y),
        });
    }
    let half = 0.5 * (post_b.x - post_a.x).abs();
    let cy_sq = line_x * line_x - half * half;
    if !(cy_sq > 0.0) {
        return Err(GeomError::LineNotOutside {
            line_x,
            half_separation: half,
        });
    }
    let y0 = 0.5 * (post_a.y + post_b.y);
    let cy = y0 + cy_sq.sqrt();
    Ok(Tangency {
        circle: Circle {
            center: Vector2::new(0.0, cy),
            radius: line_x.abs(),
        },
        point: Vector2::new(line_x, cy),
    })
}
