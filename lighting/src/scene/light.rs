// Internal Dependencies ------------------------------------------------------
use crate::error::SceneError;
use crate::geometry::Point2;
use super::check_position;


// Statics --------------------------------------------------------------------
pub const DEFAULT_LIGHT_RADIUS: f64 = 10.0;
pub const DEFAULT_LIGHT_RAYS: u32 = 360;
pub const DEFAULT_PENUMBRA_SAMPLES: u32 = 4;
pub const DEFAULT_LIGHT_STRENGTH: f64 = 1.5;


// Light Source ---------------------------------------------------------------
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    position: Point2,
    radius: f64,
    rays: u32,
    penumbra_samples: u32,
    strength: f64
}

impl Light {

    pub fn new(
        position: Point2,
        radius: f64,
        rays: u32,
        penumbra_samples: u32,
        strength: f64

    ) -> Result<Light, SceneError> {

        check_position("light", position)?;

        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius {
                what: "light",
                radius: radius
            });
        }

        if penumbra_samples < 1 {
            return Err(SceneError::InvalidSampleCount(penumbra_samples));
        }

        if !(strength.is_finite() && strength >= 0.0) {
            return Err(SceneError::InvalidStrength(strength));
        }

        Ok(Light {
            position: position,
            radius: radius,
            rays: rays,
            penumbra_samples: penumbra_samples,
            strength: strength
        })

    }

    /// A light at `position` with the sandbox's default parameters.
    pub fn at(position: Point2) -> Result<Light, SceneError> {
        Light::new(
            position,
            DEFAULT_LIGHT_RADIUS,
            DEFAULT_LIGHT_RAYS,
            DEFAULT_PENUMBRA_SAMPLES,
            DEFAULT_LIGHT_STRENGTH
        )
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Visual size only, takes no part in the shading math.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn rays(&self) -> u32 {
        self.rays
    }

    pub fn penumbra_samples(&self) -> u32 {
        self.penumbra_samples
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn set_position(&mut self, position: Point2) -> Result<(), SceneError> {
        check_position("light", position)?;
        self.position = position;
        Ok(())
    }

}
