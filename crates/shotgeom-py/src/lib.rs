//! PyO3 bindings for the `shotgeom` solvers.
//!
//! Notes
//! - Keep bindings thin; points cross the boundary as `(x, y)` tuples and the
//!   Python side owns all plotting and animation.
//! - Core errors surface as `ValueError` with the core's message.

use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use shotgeom::GeomError;

type Pt = (f64, f64);

#[inline]
fn v(p: Pt) -> Vector2<f64> {
    Vector2::new(p.0, p.1)
}

#[inline]
fn t(p: Vector2<f64>) -> Pt {
    (p.x, p.y)
}

fn map_err(err: GeomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Circle through the posts tangent to `x = line_x`: `(center, radius, tangent_point)`.
#[pyfunction]
fn tangent_circle(post_a: Pt, post_b: Pt, line_x: f64) -> PyResult<(Pt, f64, Pt)> {
    let sol = shotgeom::tangent::solve_tangent_circle(v(post_a), v(post_b), line_x)
        .map_err(map_err)?;
    Ok((t(sol.circle.center), sol.circle.radius, t(sol.point)))
}

/// Angle APB in radians (0 if `p` coincides with a post).
#[pyfunction]
fn shot_angle(p: Pt, a: Pt, b: Pt) -> f64 {
    shotgeom::angle::shot_angle(v(p), v(a), v(b))
}

/// `[(y, angle_rad)]` along `x = line_x`.
#[pyfunction]
fn angle_sweep(
    a: Pt,
    b: Pt,
    line_x: f64,
    y_min: f64,
    y_max: f64,
    samples: usize,
) -> PyResult<Vec<(f64, f64)>> {
    let out = shotgeom::angle::angle_sweep(v(a), v(b), line_x, y_min, y_max, samples)
        .map_err(map_err)?;
    Ok(out.into_iter().map(|s| (s.y, s.angle)).collect())
}

/// `(ghat, (s_a, s_b), (a_a, a_b), arrival_time, fell_back)`.
#[pyfunction]
fn solve_equal_time_tilt(
    p: Pt,
    a: Pt,
    b: Pt,
) -> PyResult<(Pt, (f64, f64), (f64, f64), f64, bool)> {
    let sol = shotgeom::tilt::solve_equal_time_tilt(v(p), v(a), v(b)).map_err(map_err)?;
    Ok((
        t(sol.ghat.into_inner()),
        (sol.distances[0], sol.distances[1]),
        (sol.accelerations[0], sol.accelerations[1]),
        sol.arrival_time,
        sol.branch == shotgeom::tilt::TiltBranch::CollinearFallback,
    ))
}

/// Position after normalized time `tau` on the rail `p → target`.
#[pyfunction]
fn rail_position(tau: f64, p: Pt, target: Pt) -> Pt {
    t(shotgeom::tilt::rail_position(tau, v(p), v(target)))
}

#[pymodule]
fn shotgeom_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(tangent_circle, m)?)?;
    m.add_function(wrap_pyfunction!(shot_angle, m)?)?;
    m.add_function(wrap_pyfunction!(angle_sweep, m)?)?;
    m.add_function(wrap_pyfunction!(solve_equal_time_tilt, m)?)?;
    m.add_function(wrap_pyfunction!(rail_position, m)?)?;
    Ok(())
}
