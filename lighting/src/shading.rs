// External Dependencies ------------------------------------------------------
use rand::Rng;
use serde::Deserialize;


// Internal Dependencies ------------------------------------------------------
use crate::color::Color;
use crate::error::SceneError;
use crate::geometry::{Point2, surface_normal};
use crate::scene::Scene;
use crate::shadow::{Occlusion, sample_visibility};


// Statics --------------------------------------------------------------------
pub const AMBIENT_FLOOR: f64 = 0.2;
pub const JITTER_SPREAD: f64 = 0.1;
pub const ATTENUATION_SCALE: f64 = 100.0;


// Shading Configuration ------------------------------------------------------
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadingConfig {
    pub ambient: f64,
    #[serde(rename = "jitter")]
    pub jitter_spread: f64,
    #[serde(rename = "attenuation")]
    pub attenuation_scale: f64
}

impl ShadingConfig {

    pub fn new(ambient: f64, jitter_spread: f64, attenuation_scale: f64) -> Result<ShadingConfig, SceneError> {
        ShadingConfig {
            ambient: ambient,
            jitter_spread: jitter_spread,
            attenuation_scale: attenuation_scale

        }.validate()
    }

    pub fn validate(self) -> Result<ShadingConfig, SceneError> {

        if !(self.ambient.is_finite() && self.ambient >= 0.0) {
            Err(SceneError::InvalidShading {
                name: "ambient",
                value: self.ambient
            })

        } else if !(self.jitter_spread.is_finite() && self.jitter_spread >= 0.0) {
            Err(SceneError::InvalidShading {
                name: "jitter",
                value: self.jitter_spread
            })

        } else if !(self.attenuation_scale.is_finite() && self.attenuation_scale > 0.0) {
            Err(SceneError::InvalidShading {
                name: "attenuation",
                value: self.attenuation_scale
            })

        } else {
            Ok(self)
        }

    }

}

impl Default for ShadingConfig {
    fn default() -> ShadingConfig {
        ShadingConfig {
            ambient: AMBIENT_FLOOR,
            jitter_spread: JITTER_SPREAD,
            attenuation_scale: ATTENUATION_SCALE
        }
    }
}


// Shading Result -------------------------------------------------------------
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shading {
    /// Unclamped intensity factor.
    pub intensity: f64,
    pub color: Color
}


// Lighting Terms -------------------------------------------------------------

/// Lambertian term, surfaces facing away receive nothing.
pub fn diffuse(light_dir: Point2, normal: Point2) -> f64 {
    light_dir.dot(normal).max(0.0)
}

/// Inverse square root falloff, capped at full intensity close to the light.
pub fn attenuation(distance: f64, scale: f64) -> f64 {
    if distance > 0.0 {
        (scale / distance.sqrt()).min(1.0)

    } else {
        1.0
    }
}

pub fn intensity_factor(
    ambient: f64,
    diffuse: f64,
    visibility: f64,
    attenuation: f64,
    strength: f64

) -> f64 {
    ambient + diffuse * visibility * attenuation * strength
}


// Evaluation -----------------------------------------------------------------

/// Shades the occluder at `index` against the scene's light.
///
/// Returns `None` when the index is out of range or the occluder sits
/// exactly on the light, leaving no direction to shade along. The color is
/// always derived from the occluder's base color.
pub fn evaluate<R: Rng + ?Sized>(rng: &mut R, scene: &Scene, index: usize) -> Option<Shading> {

    let light = scene.light();
    let target = scene.occluders().get(index)?;
    let config = scene.config();

    let to_target = target.position() - light.position();
    let distance = to_target.length();
    let light_dir = to_target.normalize()?;

    let normal = surface_normal(target.position(), &target.shape());
    let diffuse = diffuse(light_dir, normal);

    let occlusion = Occlusion::new(scene.occluders(), scene.walls()).excluding(index);
    let visibility = sample_visibility(
        rng,
        light.position(),
        light_dir,
        config.jitter_spread,
        light.penumbra_samples(),
        &occlusion
    );

    let attenuation = attenuation(distance, config.attenuation_scale);
    let intensity = intensity_factor(
        config.ambient,
        diffuse,
        visibility,
        attenuation,
        light.strength()
    );

    Some(Shading {
        intensity: intensity,
        color: target.base_color().scale(intensity)
    })

}
