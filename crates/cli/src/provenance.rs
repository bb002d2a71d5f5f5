use anyhow::{Context, Result};
use serde_json::{json, Value};
use shotgeom::scene::Scene;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Scene parameters as recorded next to every artifact.
pub fn scene_params(scene: &Scene) -> Value {
    json!({
        "goal_width": scene.goal_width,
        "walk_offset": scene.walk_offset,
        "line_x": scene.line_x(),
        "y_min": scene.y_min,
        "y_max": scene.y_max,
        "samples": scene.samples,
        "frames": scene.frames,
        "tilt_scale": scene.tilt_scale,
    })
}

/// Provenance block shared by `report` and the sidecars.
pub fn block(params: Value, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "shotgeom_version": shotgeom::VERSION,
        "params": params,
        "outputs": outputs,
    })
}

/// Write `<artifact>.provenance.json` with git commit, callsite, params and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = block(params, &[artifact.to_string_lossy().into_owned()]);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(baked) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return baked.to_string();
    }
    if let Ok(from_env) = std::env::var("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
