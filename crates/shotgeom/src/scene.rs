//! Goal scene: posts on `y = 0`, a vertical walk line beside the goal, and the
//! full chain tangent circle → angle sweep → equal-time tilt → rail frames.

use nalgebra::Vector2;

use crate::angle::{angle_sweep, best_sample, shot_angle, AngleSample};
use crate::error::GeomError;
use crate::tangent::{solve_tangent_circle, Tangency};
use crate::tilt::{solve_equal_time_tilt, RailSample, Rails, TiltSolution, TiltedPlane};

/// Scene parameters (meters unless noted).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    /// Distance between the posts.
    pub goal_width: f64,
    /// Distance from the right post to the walk line.
    pub walk_offset: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Number of angle samples along the walk line.
    pub samples: usize,
    /// Number of τ frames for the rail sweep.
    pub frames: usize,
    /// Slope factor of the tilted plane (visual only).
    pub tilt_scale: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            goal_width: 40.0,
            walk_offset: 12.0,
            y_min: 0.5,
            y_max: 60.0,
            samples: 300,
            frames: 150,
            tilt_scale: 0.15,
        }
    }
}

/// Everything the rendering layer needs for one scene.
#[derive(Clone, Debug)]
pub struct SceneReport {
    pub posts: [Vector2<f64>; 2],
    pub line_x: f64,
    pub tangency: Tangency,
    /// Shot angle at the tangency point (radians).
    pub tangent_angle: f64,
    pub sweep: Vec<AngleSample>,
    pub best: AngleSample,
    pub tilt: TiltSolution,
    pub rails: Rails,
    pub plane: TiltedPlane,
    pub frames: Vec<RailSample>,
}

impl Scene {
    /// Left and right post, mirrored about `x = 0`.
    pub fn posts(&self) -> [Vector2<f64>; 2] {
        let half = 0.5 * self.goal_width;
        [Vector2::new(-half, 0.0), Vector2::new(half, 0.0)]
    }

    #[inline]
    pub fn line_x(&self) -> f64 {
        0.5 * self.goal_width + self.walk_offset
    }

    pub fn validate(&self) -> Result<(), GeomError> {
        if !(self.goal_width.is_finite() && self.goal_width > 0.0) {
            return Err(GeomError::InvalidScene {
                reason: "goal width must be positive and finite",
            });
        }
        if !self.walk_offset.is_finite() {
            return Err(GeomError::InvalidScene {
                reason: "walk offset must be finite",
            });
        }
        if !(self.y_min.is_finite() && self.y_max.is_finite()) {
            return Err(GeomError::InvalidScene {
                reason: "sweep range must be finite",
            });
        }
        if !(self.tilt_scale.is_finite() && self.tilt_scale >= 0.0) {
            return Err(GeomError::InvalidScene {
                reason: "tilt scale must be finite and non-negative",
            });
        }
        Ok(())
    }

    pub fn evaluate(&self) -> Result<SceneReport, GeomError> {
        self.validate()?;
        let [a, b] = self.posts();
        let line_x = self.line_x();
        let tangency = solve_tangent_circle(a, b, line_x)?;
        let sweep = angle_sweep(a, b, line_x, self.y_min, self.y_max, self.samples)?;
        let best = best_sample(&sweep).ok_or(GeomError::TooFewSamples {
            requested: self.samples,
        })?;
        let tilt = solve_equal_time_tilt(tangency.point, a, b)?;
        let rails = Rails::new(&tilt, a, b);
        let frames = rails.sweep(self.frames)?;
        Ok(SceneReport {
            posts: [a, b],
            line_x,
            tangent_angle: shot_angle(tangency.point, a, b),
            tangency,
            sweep,
            best,
            tilt,
            rails,
            plane: TiltedPlane {
                ghat: tilt.ghat,
                scale: self.tilt_scale,
            },
            frames,
        })
    }
}
