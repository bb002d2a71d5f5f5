use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use shotgeom::scene::Scene;
use shotgeom::tilt::{frame_taus, TiltSolution};
use shotgeom::Vec2;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;
mod scene_cfg;

use scene_cfg::SceneArgs;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Shot-angle and equal-time tilt calculator")]
struct Cmd {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Circle through the posts tangent to the walk line, as JSON
    Tangent,
    /// Write the shot angle along the walk line (CSV or Parquet)
    Sweep {
        #[arg(long)]
        out: PathBuf,
    },
    /// Equal-time tilt at the tangent point, as JSON
    Tilt,
    /// Write rail positions over the τ frames (CSV or Parquet)
    Rails {
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let scene = cmd.scene.resolve()?;
    match cmd.action {
        Action::Tangent => tangent(&scene),
        Action::Sweep { out } => sweep(&scene, out),
        Action::Tilt => tilt(&scene),
        Action::Rails { out } => rails(&scene, out),
        Action::Report => report(&scene),
    }
}

fn tangent(scene: &Scene) -> Result<()> {
    let r = scene.evaluate()?;
    tracing::info!(
        line_x = r.line_x,
        tangent_y = r.tangency.point.y,
        "tangent"
    );
    let obj = json!({
        "posts": [pt(r.posts[0]), pt(r.posts[1])],
        "line_x": r.line_x,
        "center": pt(r.tangency.circle.center),
        "radius": r.tangency.circle.radius,
        "tangent_point": pt(r.tangency.point),
        "angle_rad": r.tangent_angle,
        "angle_deg": r.tangent_angle.to_degrees(),
        "best_sample": { "y": r.best.y, "angle_deg": r.best.degrees() },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn sweep(scene: &Scene, out: PathBuf) -> Result<()> {
    let r = scene.evaluate()?;
    tracing::info!(samples = r.sweep.len(), out = %out.display(), "sweep");
    let mut df = export::sweep_table(&r.sweep)?;
    export::write_table(&mut df, &out)?;
    let prov = provenance::write_sidecar(&out, provenance::scene_params(scene))?;
    tracing::info!(provenance = %prov.display(), "sweep_written");
    Ok(())
}

fn tilt(scene: &Scene) -> Result<()> {
    let r = scene.evaluate()?;
    tracing::info!(branch = ?r.tilt.branch, t = r.tilt.arrival_time, "tilt");
    println!("{}", serde_json::to_string_pretty(&tilt_json(&r.tilt))?);
    Ok(())
}

fn rails(scene: &Scene, out: PathBuf) -> Result<()> {
    let r = scene.evaluate()?;
    let taus = frame_taus(scene.frames)?;
    tracing::info!(frames = taus.len(), out = %out.display(), "rails");
    let mut df = export::rails_table(&r.rails, &r.plane, &taus)?;
    export::write_table(&mut df, &out)?;
    let mut params = provenance::scene_params(scene);
    params["tilt"] = tilt_json(&r.tilt);
    let prov = provenance::write_sidecar(&out, params)?;
    tracing::info!(provenance = %prov.display(), "rails_written");
    Ok(())
}

fn report(scene: &Scene) -> Result<()> {
    let obj = provenance::block(provenance::scene_params(scene), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn pt(v: Vec2<f64>) -> Value {
    json!([v.x, v.y])
}

fn tilt_json(sol: &TiltSolution) -> Value {
    let [t_a, t_b] = sol.arrival_times();
    json!({
        "source": pt(sol.source),
        "ghat": pt(sol.ghat.into_inner()),
        "branch": format!("{:?}", sol.branch),
        "distances": sol.distances,
        "accelerations": sol.accelerations,
        "arrival_time": sol.arrival_time,
        "arrival_times": [t_a, t_b],
    })
}
