//! Value types for the tilt solver.

use nalgebra::{Unit, Vector2};

use crate::error::{GeomError, Target};

/// Unit vector in the plane; only meaningful together with its source point.
pub type Direction = Unit<Vector2<f64>>;

/// Straight rail from a source point to a target, derived on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rail {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
}

impl Rail {
    #[inline]
    pub fn new(from: Vector2<f64>, to: Vector2<f64>) -> Self {
        Self { from, to }
    }
    #[inline]
    pub fn offset(&self) -> Vector2<f64> {
        self.to - self.from
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.offset().norm()
    }
    /// Unit direction, or None if the rail is shorter than `eps`.
    #[inline]
    pub fn unit(&self, eps: f64) -> Option<Direction> {
        Unit::try_new(self.offset(), eps)
    }
}

/// How the downhill direction was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltBranch {
    /// Regular 2×2 solve with both `ghat·u_i >= accel_floor`; the equal-time
    /// postcondition holds.
    Solved,
    /// Rails (nearly) collinear, or the solved direction is too shallow on a
    /// rail: `ghat = u_A` by convention. Arrival times generally differ here.
    CollinearFallback,
}

/// Result of the equal-time tilt solve. Index 0 is target A, index 1 is B.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltSolution {
    pub source: Vector2<f64>,
    /// Downhill direction.
    pub ghat: Direction,
    /// Rail lengths `s_i`.
    pub distances: [f64; 2],
    /// Rail unit directions `u_i`.
    pub units: [Vector2<f64>; 2],
    /// Floored acceleration coefficients `max(ghat·u_i, floor)` (unit gravity).
    pub accelerations: [f64; 2],
    /// Common arrival time `sqrt(2 s_A / a_A)` (unit gravity).
    pub arrival_time: f64,
    pub branch: TiltBranch,
}

impl TiltSolution {
    /// Per-rail arrival times `sqrt(2 s_i / a_i)` at unit gravity.
    pub fn arrival_times(&self) -> [f64; 2] {
        [
            (2.0 * self.distances[0] / self.accelerations[0]).sqrt(),
            (2.0 * self.distances[1] / self.accelerations[1]).sqrt(),
        ]
    }

    /// Arrival time of `target`'s rail at unit gravity.
    #[inline]
    pub fn rail_time(&self, target: Target) -> f64 {
        self.arrival_times()[target.index()]
    }

    /// Common arrival time for gravity magnitude `g` (`T/sqrt(g)`).
    pub fn arrival_time_for_gravity(&self, g: f64) -> Result<f64, GeomError> {
        if !(g > 0.0) {
            return Err(GeomError::NonPositiveGravity { g });
        }
        Ok(self.arrival_time / g.sqrt())
    }

    /// Largest relative gap between the two per-rail times.
    pub fn time_mismatch(&self) -> f64 {
        let [ta, tb] = self.arrival_times();
        (ta - tb).abs() / ta.max(tb)
    }
}
