// External Dependencies ------------------------------------------------------
use rand::Rng;


// Internal Dependencies ------------------------------------------------------
use crate::geometry::Point2;
use crate::scene::{CircleOccluder, Wall};


// Occlusion Set --------------------------------------------------------------

/// The geometry a shadow ray can be blocked by.
///
/// Occluders are excluded by their index in the scene rather than by value,
/// two occluders may well share position and radius.
#[derive(Debug, Copy, Clone)]
pub struct Occlusion<'a> {
    occluders: &'a [CircleOccluder],
    walls: &'a [Wall],
    exclude: Option<usize>
}

impl<'a> Occlusion<'a> {

    pub fn new(occluders: &'a [CircleOccluder], walls: &'a [Wall]) -> Occlusion<'a> {
        Occlusion {
            occluders: occluders,
            walls: walls,
            exclude: None
        }
    }

    pub fn excluding(self, index: usize) -> Occlusion<'a> {
        Occlusion {
            exclude: Some(index),
            .. self
        }
    }

    pub fn is_empty(&self) -> bool {
        let excluded = match self.exclude {
            Some(i) if i < self.occluders.len() => 1,
            _ => 0
        };
        self.walls.is_empty() && self.occluders.len() <= excluded
    }

    /// Whether a ray cast from `origin` along the unit vector `direction`
    /// hits any of the remaining occluders or walls.
    pub fn blocks(&self, origin: Point2, direction: Point2) -> bool {

        let by_occluder = self.occluders.iter().enumerate().any(|(i, o)| {
            Some(i) != self.exclude && o.shape().ray_intersect(origin, direction).is_some()
        });

        by_occluder || self.walls.iter().any(|w| {
            w.shape().ray_intersect(origin, direction).is_some()
        })

    }

}


// Soft Shadows ---------------------------------------------------------------

/// Estimates how much of the light arriving along `direction` makes it past
/// `occlusion`, as the fraction of `samples` jittered rays left unblocked.
///
/// Each ray's angle is offset by a uniform draw from
/// `[-jitter_spread, jitter_spread]` radians. The result is a stochastic
/// estimate in `[0, 1]`, repeated calls on the same geometry will differ
/// unless `rng` is seeded identically. Zero samples, or nothing left to
/// block the rays, count as fully visible.
pub fn sample_visibility<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Point2,
    direction: Point2,
    jitter_spread: f64,
    samples: u32,
    occlusion: &Occlusion

) -> f64 {

    if samples == 0 || occlusion.is_empty() {
        return 1.0;
    }

    let spread = if jitter_spread.is_finite() {
        jitter_spread.abs()

    } else {
        0.0
    };

    let base = direction.angle();
    let mut visible: u32 = 0;
    for _ in 0..samples {
        let r = base + rng.gen_range(-spread..=spread);
        if !occlusion.blocks(origin, Point2::from_angle(r)) {
            visible += 1;
        }
    }

    f64::from(visible) / f64::from(samples)

}
