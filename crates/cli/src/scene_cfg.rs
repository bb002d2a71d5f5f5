//! Scene configuration: defaults, then an optional JSON file, then flags.

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use shotgeom::scene::Scene;
use std::fs;
use std::path::{Path, PathBuf};

/// Scene overrides shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct SceneArgs {
    /// JSON file with scene fields (any subset)
    #[arg(long, global = true)]
    pub scene: Option<PathBuf>,
    /// Distance between the posts
    #[arg(long, global = true)]
    pub goal_width: Option<f64>,
    /// Distance from the right post to the walk line
    #[arg(long, global = true)]
    pub offset: Option<f64>,
    #[arg(long, global = true)]
    pub y_min: Option<f64>,
    #[arg(long, global = true)]
    pub y_max: Option<f64>,
    /// Angle samples along the walk line
    #[arg(long, global = true)]
    pub samples: Option<usize>,
    /// τ frames for the rail sweep
    #[arg(long, global = true)]
    pub frames: Option<usize>,
    /// Slope factor of the tilted plane
    #[arg(long, global = true)]
    pub tilt_scale: Option<f64>,
}

/// On-disk scene file; missing fields keep their defaults.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SceneFile {
    pub goal_width: Option<f64>,
    pub walk_offset: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub samples: Option<usize>,
    pub frames: Option<usize>,
    pub tilt_scale: Option<f64>,
}

impl SceneFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing scene {}", path.display()))
    }

    fn apply(&self, s: &mut Scene) {
        override_with(&mut s.goal_width, self.goal_width);
        override_with(&mut s.walk_offset, self.walk_offset);
        override_with(&mut s.y_min, self.y_min);
        override_with(&mut s.y_max, self.y_max);
        override_with(&mut s.samples, self.samples);
        override_with(&mut s.frames, self.frames);
        override_with(&mut s.tilt_scale, self.tilt_scale);
    }
}

impl SceneArgs {
    pub fn resolve(&self) -> Result<Scene> {
        let mut scene = Scene::default();
        if let Some(path) = &self.scene {
            SceneFile::load(path)?.apply(&mut scene);
        }
        override_with(&mut scene.goal_width, self.goal_width);
        override_with(&mut scene.walk_offset, self.offset);
        override_with(&mut scene.y_min, self.y_min);
        override_with(&mut scene.y_max, self.y_max);
        override_with(&mut scene.samples, self.samples);
        override_with(&mut scene.frames, self.frames);
        override_with(&mut scene.tilt_scale, self.tilt_scale);
        scene.validate()?;
        Ok(scene)
    }
}

#[inline]
fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}
