//! Positions along both rails over the shared normalized time `τ = t/T`.

use nalgebra::{Vector2, Vector3};

use super::types::{Direction, Rail, TiltSolution};
use crate::util::linspace;
use crate::error::GeomError;

/// Position after normalized time `tau` on the rail `p→target`: the covered
/// fraction is `τ²`. `τ` outside `[0, 1]` extrapolates.
///
/// Written as a convex combination so `τ = 0` and `τ = 1` reproduce the
/// endpoints bit-exactly.
#[inline]
pub fn rail_position(tau: f64, p: Vector2<f64>, target: Vector2<f64>) -> Vector2<f64> {
    let f = tau * tau;
    p * (1.0 - f) + target * f
}

/// `frames` evenly spaced values of τ from 0 to 1 inclusive.
pub fn frame_taus(frames: usize) -> Result<Vec<f64>, GeomError> {
    linspace(0.0, 1.0, frames)
}

/// Both pucks at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RailSample {
    pub tau: f64,
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

/// Plane tilted so that `ghat` points downhill: `z = −scale·(ghat·xy)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltedPlane {
    pub ghat: Direction,
    pub scale: f64,
}

impl TiltedPlane {
    #[inline]
    pub fn height(&self, xy: Vector2<f64>) -> f64 {
        -self.scale * self.ghat.dot(&xy)
    }
    #[inline]
    pub fn lift(&self, xy: Vector2<f64>) -> Vector3<f64> {
        Vector3::new(xy.x, xy.y, self.height(xy))
    }
}

/// The two rails of a tilt solution, ready for time sweeps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rails {
    pub rails: [Rail; 2],
    pub accelerations: [f64; 2],
    pub arrival_time: f64,
}

impl Rails {
    /// `a`, `b` must be the targets `sol` was solved for.
    pub fn new(sol: &TiltSolution, a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            rails: [Rail::new(sol.source, a), Rail::new(sol.source, b)],
            accelerations: sol.accelerations,
            arrival_time: sol.arrival_time,
        }
    }

    pub fn sample(&self, tau: f64) -> RailSample {
        let [ra, rb] = self.rails;
        RailSample {
            tau,
            a: rail_position(tau, ra.from, ra.to),
            b: rail_position(tau, rb.from, rb.to),
        }
    }

    /// Positions lifted onto the tilted plane.
    pub fn sample_3d(&self, tau: f64, plane: &TiltedPlane) -> [Vector3<f64>; 2] {
        let s = self.sample(tau);
        [plane.lift(s.a), plane.lift(s.b)]
    }

    /// Elapsed time `τ·T` at unit gravity.
    #[inline]
    pub fn elapsed(&self, tau: f64) -> f64 {
        tau * self.arrival_time
    }

    /// `½ a_i t²` per rail; equals `s_i τ²` whenever the arrival times agree.
    pub fn distance_covered(&self, tau: f64) -> [f64; 2] {
        let t = self.elapsed(tau);
        [
            0.5 * self.accelerations[0] * t * t,
            0.5 * self.accelerations[1] * t * t,
        ]
    }

    pub fn sweep(&self, frames: usize) -> Result<Vec<RailSample>, GeomError> {
        Ok(frame_taus(frames)?
            .into_iter()
            .map(|tau| self.sample(tau))
            .collect())
    }
}
