//! Seeded random (source, target, target) configurations for tests and benches.
//!
//! Model
//! - The source is uniform in a square `[-extent, extent]²`.
//! - Rail A gets a uniform heading; rail B is rotated away from it by an
//!   angle whose sine is at least `min_sin`, so draws are never collinear.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TriangleCfg {
    /// Half-width of the square the source is drawn from.
    pub extent: f64,
    /// Rail lengths are uniform in `[rail_min, rail_max]`.
    pub rail_min: f64,
    pub rail_max: f64,
    /// Lower bound on `|sin ∠(u_A, u_B)|`. Clamped to `[0, 1)`.
    pub min_sin: f64,
}

impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            extent: 40.0,
            rail_min: 1.0,
            rail_max: 40.0,
            min_sin: 0.05,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A source point and two targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub source: Vector2<f64>,
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

pub fn draw_triangle(cfg: &TriangleCfg, tok: ReplayToken) -> Triangle {
    let mut rng = tok.to_std_rng();
    let extent = cfg.extent.abs();
    let lo = cfg.rail_min.max(1e-6);
    let hi = cfg.rail_max.max(lo);
    let min_sin = cfg.min_sin.clamp(0.0, 1.0 - 1e-9);

    let source = Vector2::new(
        rng.gen_range(-extent..=extent),
        rng.gen_range(-extent..=extent),
    );
    let heading_a = rng.gen::<f64>() * std::f64::consts::TAU;
    // |sin δ| >= min_sin for δ in [asin(min_sin), π − asin(min_sin)]
    let gap_lo = min_sin.asin();
    let gap_hi = std::f64::consts::PI - gap_lo;
    let gap = rng.gen_range(gap_lo..=gap_hi);
    let heading_b = if rng.gen::<bool>() {
        heading_a + gap
    } else {
        heading_a - gap
    };
    let len_a = rng.gen_range(lo..=hi);
    let len_b = rng.gen_range(lo..=hi);
    Triangle {
        source,
        a: source + polar(heading_a) * len_a,
        b: source + polar(heading_b) * len_b,
    }
}

#[inline]
fn polar(theta: f64) -> Vector2<f64> {
    Vector2::new(theta.cos(), theta.sin())
}
