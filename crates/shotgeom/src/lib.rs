//! Optimal shot-angle geometry and equal-time tilt kinematics.
//!
//! Components (all pure, stateless, `Copy` values in and out):
//! - `tangent`: circle through two posts tangent to a vertical walk line.
//! - `angle`: shot angle ∠APB and sweeps along the walk line.
//! - `tilt`: equal-time downhill direction and rail kinematics.
//! - `scene`: the goal scene chaining the three above.
//!
//! Rendering (plots, animations, image export) is out of scope; callers get
//! points, angles, directions and times.

pub mod angle;
pub mod cfg;
pub mod draw;
pub mod error;
pub mod scene;
pub mod tangent;
pub mod tilt;
mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::{GeomError, Target};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{angle_sweep, best_sample, shot_angle, shot_angle_with, AngleSample};
    pub use crate::error::{GeomError, Target};
    pub use crate::scene::{Scene, SceneReport};
    pub use crate::tangent::{solve_tangent_circle, Circle, Tangency};
    pub use crate::tilt::{
        frame_taus, rail_position, solve_equal_time_tilt, Direction, RailSample, Rails,
        TiltBranch, TiltSolution, TiltedPlane,
    };
    pub use crate::GeomCfg;
    pub use nalgebra::Vector2 as Vec2;
}
