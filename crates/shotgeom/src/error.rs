//! Error type shared by the solvers.

use std::fmt;

/// Which of the two targets a per-rail error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    A,
    B,
}

impl Target {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Target::A => 0,
            Target::B => 1,
        }
    }
}

/// Errors surfaced by the geometry and kinematics solvers.
///
/// The collinear tilt configuration is not an error; see
/// `tilt::TiltBranch::CollinearFallback`.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// The vertical line `x = line_x` passes between or through the posts.
    LineNotOutside { line_x: f64, half_separation: f64 },
    /// Posts are not level and mirrored about `x = 0`.
    AsymmetricPosts { a: (f64, f64), b: (f64, f64) },
    /// Source coincides with a target (zero-length rail).
    ZeroRail { target: Target },
    /// A sampler was asked for fewer than two samples.
    TooFewSamples { requested: usize },
    /// Sampling range is empty or reversed.
    EmptyRange { lo: f64, hi: f64 },
    /// Gravity scale must be strictly positive.
    NonPositiveGravity { g: f64 },
    /// Scene parameters are out of range.
    InvalidScene { reason: &'static str },
}

impl GeomError {
    /// True for violated geometric preconditions (as opposed to bad sampling
    /// or scene parameters).
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            GeomError::LineNotOutside { .. }
                | GeomError::AsymmetricPosts { .. }
                | GeomError::ZeroRail { .. }
        )
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::LineNotOutside {
                line_x,
                half_separation,
            } => write!(
                f,
                "line x = {line_x} is not strictly outside the posts (half separation {half_separation})"
            ),
            GeomError::AsymmetricPosts { a, b } => write!(
                f,
                "posts {a:?} and {b:?} must share y and be mirrored about x = 0"
            ),
            GeomError::ZeroRail { target } => {
                write!(f, "source coincides with target {target:?} (zero-length rail)")
            }
            GeomError::TooFewSamples { requested } => {
                write!(f, "need at least 2 samples, got {requested}")
            }
            GeomError::EmptyRange { lo, hi } => write!(f, "empty sampling range [{lo}, {hi}]"),
            GeomError::NonPositiveGravity { g } => {
                write!(f, "gravity scale must be positive, got {g}")
            }
            GeomError::InvalidScene { reason } => write!(f, "invalid scene: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}
