//! Prints the reference scene: tangent point, best sampled angle, tilt and a
//! few rail frames.
//!
//! Run: cargo run -p shotgeom --example optimal_shot

use shotgeom::prelude::*;

fn main() {
    let scene = Scene::default();
    let report = scene.evaluate().expect("default scene is valid");
    let p = report.tangency.point;
    println!(
        "line_x={:.3} center=({:.3}, {:.3}) radius={:.3}",
        report.line_x,
        report.tangency.circle.center.x,
        report.tangency.circle.center.y,
        report.tangency.circle.radius
    );
    println!(
        "tangent=({:.3}, {:.3}) angle_deg={:.3} best_sample_y={:.3} best_deg={:.3}",
        p.x,
        p.y,
        report.tangent_angle.to_degrees(),
        report.best.y,
        report.best.degrees()
    );
    let [ta, tb] = report.tilt.arrival_times();
    println!(
        "ghat=({:.6}, {:.6}) branch={:?} t_a={ta:.9} t_b={tb:.9}",
        report.tilt.ghat.x, report.tilt.ghat.y, report.tilt.branch
    );
    for tau in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let [a, b] = report.rails.sample_3d(tau, &report.plane);
        println!(
            "tau={tau:.2} a=({:.3}, {:.3}, {:.3}) b=({:.3}, {:.3}, {:.3})",
            a.x, a.y, a.z, b.x, b.y, b.z
        );
    }
}
