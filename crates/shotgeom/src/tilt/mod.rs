//! Equal-time tilt: a direction under which two frictionless slides from rest
//! reach their targets simultaneously, plus the resulting rail kinematics.
//!
//! Model
//! - A particle at `P` slides along the straight rail `P→T` with acceleration
//!   `g·(ghat·u)`, `u` the rail's unit direction. From rest, `t = sqrt(2s/a)`.
//! - Equal times ⇔ `s_A/(ghat·u_A) = s_B/(ghat·u_B)`, which is linear in an
//!   unnormalized `g`: solve `[u_A; u_B] g = [s_A, s_B]`, then normalize.
//! - With `t = τ·T` each rail covers the fraction `τ²` of its length, the same
//!   for both rails.
//!
//! Code cross-refs: `solve::solve_equal_time_tilt`, `rails::Rails`, `GeomCfg`

pub mod rails;
mod solve;
mod types;

pub use rails::{frame_taus, rail_position, RailSample, Rails, TiltedPlane};
pub use solve::{solve_equal_time_tilt, solve_equal_time_tilt_with};
pub use types::{Direction, Rail, TiltBranch, TiltSolution};

#[cfg(test)]
mod tests;
