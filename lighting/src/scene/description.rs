// External Dependencies ------------------------------------------------------
use serde::Deserialize;


// Internal Dependencies ------------------------------------------------------
use crate::color::Color;
use crate::error::SceneError;
use crate::geometry::Point2;
use crate::shading::ShadingConfig;
use super::{
    Scene, Light, CircleOccluder, Wall,
    DEFAULT_LIGHT_RADIUS,
    DEFAULT_LIGHT_RAYS,
    DEFAULT_PENUMBRA_SAMPLES,
    DEFAULT_LIGHT_STRENGTH
};


// Scene Description ----------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDescription {
    light: LightDescription,
    #[serde(default)]
    shading: ShadingConfig,
    #[serde(default)]
    occluders: Vec<OccluderDescription>,
    #[serde(default)]
    walls: Vec<WallDescription>
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LightDescription {
    x: f64,
    y: f64,
    #[serde(default = "default_light_radius")]
    radius: f64,
    #[serde(default = "default_light_rays")]
    rays: u32,
    #[serde(default = "default_penumbra_samples")]
    penumbra: u32,
    #[serde(default = "default_light_strength")]
    strength: f64
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OccluderDescription {
    x: f64,
    y: f64,
    radius: f64,
    color: ColorDescription
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WallDescription {
    line: [f64; 4]
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorDescription {
    Name(String),
    Rgb([u8; 3])
}

impl ColorDescription {
    fn to_color(&self) -> Result<Color, SceneError> {
        match *self {
            ColorDescription::Name(ref name) => Ok(Color::from_name(name.parse()?)),
            ColorDescription::Rgb(rgb) => Ok(Color::from(rgb))
        }
    }
}

fn default_light_radius() -> f64 {
    DEFAULT_LIGHT_RADIUS
}

fn default_light_rays() -> u32 {
    DEFAULT_LIGHT_RAYS
}

fn default_penumbra_samples() -> u32 {
    DEFAULT_PENUMBRA_SAMPLES
}

fn default_light_strength() -> f64 {
    DEFAULT_LIGHT_STRENGTH
}


// Parsing --------------------------------------------------------------------
pub fn parse(string: &str) -> Result<Scene, SceneError> {

    let description: SceneDescription = toml::from_str(string)?;

    let l = &description.light;
    let light = Light::new(
        Point2::new(l.x, l.y),
        l.radius,
        l.rays,
        l.penumbra,
        l.strength
    )?;

    let mut occluders = Vec::with_capacity(description.occluders.len());
    for o in &description.occluders {
        occluders.push(CircleOccluder::new(
            Point2::new(o.x, o.y),
            o.radius,
            o.color.to_color()?
        )?);
    }

    let mut walls = Vec::with_capacity(description.walls.len());
    for w in &description.walls {
        walls.push(Wall::from_line(w.line)?);
    }

    Scene::new(light, occluders, walls).with_config(description.shading)

}
