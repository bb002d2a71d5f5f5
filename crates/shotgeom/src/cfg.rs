//! Tolerances shared by all solvers.
//!
//! Policy
//! - Every epsilon lives here. Solvers take a `GeomCfg` (or use its default)
//!   instead of hard-coding thresholds at call sites.
//! - The acceleration floor is a robustness policy inherited from the demo
//!   model, not a physical law: an "uphill" rail is treated as having a tiny
//!   positive acceleration instead of being rejected.

/// Length below which a vector counts as zero (rays, rails, solved `g`).
pub(crate) const LEN_EPS: f64 = 1e-12;
/// Threshold on `|det [u_A; u_B]|` below which the rails count as collinear.
pub(crate) const DET_EPS: f64 = 1e-12;
/// Lower bound on the per-rail acceleration coefficient `ghat·u`.
pub(crate) const ACCEL_FLOOR: f64 = 1e-9;
/// Tolerance for "posts are symmetric about x = 0 and level".
pub(crate) const SYM_EPS: f64 = 1e-9;

/// Solver configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_len: f64,
    pub eps_det: f64,
    pub accel_floor: f64,
    pub eps_sym: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_len: LEN_EPS,
            eps_det: DET_EPS,
            accel_floor: ACCEL_FLOOR,
            eps_sym: SYM_EPS,
        }
    }
}
