//! Random spatial sampling inside the world square.
//!
//! # Annulus sampling
//!
//! [`random_point_in_annulus`] draws i.i.d. uniform world points and accepts
//! the first one whose distance from `origin` lies in `[min, max]`.  The
//! expected number of draws is `1 / p`, where `p` is the fraction of the
//! world covered by the annulus (clipped to the square).  For the fleet
//! defaults (`[100 000, 150 000]` and `[150 000, 400 000]` on a 1 000 000
//! square) `p` is at least ~1 % even from a corner origin, so acceptance is
//! fast.
//!
//! Bands that touch almost nothing of the square (e.g. `min` close to the
//! world diagonal) make `p` vanish.  Those are cut off in two ways:
//!
//! 1. Bands that cannot intersect the square at all (`min` beyond the
//!    farthest corner from `origin`, `min > max`, negative or NaN bounds)
//!    fail immediately.
//! 2. Everything else fails after [`MAX_ANNULUS_ATTEMPTS`] rejected draws.

use rand::Rng;
use tracing::warn;

use crate::{CoreError, CoreResult, Point, WORLD_SIZE};

/// Upper bound on proposals drawn by [`random_point_in_annulus`].
pub const MAX_ANNULUS_ATTEMPTS: u64 = 1_000_000;

/// Rejection count after which a slow-acceptance warning is logged.
const SLOW_ACCEPTANCE_ATTEMPTS: u64 = 10_000;

/// A point with both coordinates drawn independently and uniformly from
/// `[0, WORLD_SIZE]`.
#[inline]
pub fn random_point_in_world<R: Rng + ?Sized>(rng: &mut R) -> Point {
    Point::new(rng.gen_range(0.0..=WORLD_SIZE), rng.gen_range(0.0..=WORLD_SIZE))
}

/// A uniform world point whose distance from `origin` lies in the closed
/// band `[min_dist, max_dist]`.
///
/// # Errors
///
/// [`CoreError::UnsatisfiableDistance`] if the band cannot intersect the
/// world square, or if no proposal was accepted within
/// [`MAX_ANNULUS_ATTEMPTS`] draws.
pub fn random_point_in_annulus<R: Rng + ?Sized>(
    rng:      &mut R,
    origin:   Point,
    min_dist: f64,
    max_dist: f64,
) -> CoreResult<Point> {
    let unsatisfiable = |attempts| CoreError::UnsatisfiableDistance {
        origin,
        min: min_dist,
        max: max_dist,
        attempts,
    };

    // `!(a <= b)` also rejects NaN bounds.
    if !(0.0 <= max_dist && min_dist <= max_dist) || min_dist > farthest_corner(origin) {
        return Err(unsatisfiable(0));
    }

    for attempt in 1..=MAX_ANNULUS_ATTEMPTS {
        let candidate = random_point_in_world(rng);
        let d = candidate.distance(origin);
        if (min_dist..=max_dist).contains(&d) {
            return Ok(candidate);
        }
        if attempt == SLOW_ACCEPTANCE_ATTEMPTS {
            warn!(
                %origin, min_dist, max_dist,
                "annulus sampling has rejected {SLOW_ACCEPTANCE_ATTEMPTS} proposals; \
                 distance band covers very little of the world"
            );
        }
    }

    Err(unsatisfiable(MAX_ANNULUS_ATTEMPTS))
}

/// Distance from `origin` to the world corner farthest from it.
fn farthest_corner(origin: Point) -> f64 {
    let dx = origin.x.max(WORLD_SIZE - origin.x);
    let dy = origin.y.max(WORLD_SIZE - origin.y);
    Point::new(dx, dy).length()
}
