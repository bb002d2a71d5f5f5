use nalgebra::{Matrix2, Unit, Vector2};

use super::types::{Rail, TiltBranch, TiltSolution};
use crate::cfg::GeomCfg;
use crate::error::{GeomError, Target};

/// Equal-time downhill direction at `p` for targets `a`, `b`, default tolerances.
pub fn solve_equal_time_tilt(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
) -> Result<TiltSolution, GeomError> {
    solve_equal_time_tilt_with(p, a, b, GeomCfg::default())
}

/// Pre: `p` differs from both targets by more than `cfg.eps_len`.
/// Post: `ghat` has unit norm; on `TiltBranch::Solved` both rails share the
/// arrival time (`time_mismatch() ≈ 0`) and no acceleration is floored.
/// A solve whose rail components fall below `cfg.accel_floor` is reported as
/// `TiltBranch::CollinearFallback`.
///
/// The acceleration floor keeps an uphill rail finite instead of failing.
/// That is an approximation carried over from the demo model, not a
/// guarantee that a physical equal-time tilt exists.
pub fn solve_equal_time_tilt_with(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
    cfg: GeomCfg,
) -> Result<TiltSolution, GeomError> {
    let rail_a = Rail::new(p, a);
    let rail_b = Rail::new(p, b);
    let s_a = rail_a.length();
    let s_b = rail_b.length();
    let u_a = rail_a
        .unit(cfg.eps_len)
        .ok_or(GeomError::ZeroRail { target: Target::A })?;
    let u_b = rail_b
        .unit(cfg.eps_len)
        .ok_or(GeomError::ZeroRail { target: Target::B })?;

    let m = Matrix2::new(u_a.x, u_a.y, u_b.x, u_b.y);
    let (ghat, branch) = if m.determinant().abs() <= cfg.eps_det {
        (u_a, TiltBranch::CollinearFallback)
    } else {
        // Any positive multiple of g satisfies the ratio; only its direction matters.
        let g = m
            .lu()
            .solve(&Vector2::new(s_a, s_b))
            .and_then(|g| Unit::try_new(g, cfg.eps_len));
        // ghat·u_i = s_i/|g|; below the floor the rails are collinear in effect
        // and flooring would break the equal-time postcondition.
        match g {
            Some(ghat)
                if ghat.dot(u_a.as_ref()) >= cfg.accel_floor
                    && ghat.dot(u_b.as_ref()) >= cfg.accel_floor =>
            {
                (ghat, TiltBranch::Solved)
            }
            _ => (u_a, TiltBranch::CollinearFallback),
        }
    };

    let acc_a = ghat.dot(u_a.as_ref()).max(cfg.accel_floor);
    let acc_b = ghat.dot(u_b.as_ref()).max(cfg.accel_floor);
    let arrival_time = (2.0 * s_a / acc_a).sqrt();
    Ok(TiltSolution {
        source: p,
        ghat,
        distances: [s_a, s_b],
        units: [u_a.into_inner(), u_b.into_inner()],
        accelerations: [acc_a, acc_b],
        arrival_time,
        branch,
    })
}
