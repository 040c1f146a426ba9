// STD Dependencies -----------------------------------------------------------
use std::fs;
use std::path::Path;


// External Dependencies ------------------------------------------------------
use log::{debug, trace};
use rand::Rng;


// Internal Dependencies ------------------------------------------------------
use crate::error::SceneError;
use crate::geometry::Point2;
use crate::shading::{self, ShadingConfig};


// Modules --------------------------------------------------------------------
mod description;

mod light;
pub use self::light::*;

mod occluder;
pub use self::occluder::CircleOccluder;

mod wall;
pub use self::wall::Wall;


// Scene Abstraction ----------------------------------------------------------
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    light: Light,
    occluders: Vec<CircleOccluder>,
    walls: Vec<Wall>,
    config: ShadingConfig
}

impl Scene {

    pub fn new(light: Light, occluders: Vec<CircleOccluder>, walls: Vec<Wall>) -> Scene {
        Scene {
            light: light,
            occluders: occluders,
            walls: walls,
            config: ShadingConfig::default()
        }
    }

    pub fn with_config(mut self, config: ShadingConfig) -> Result<Scene, SceneError> {
        self.config = config.validate()?;
        Ok(self)
    }

    pub fn from_toml(string: &str) -> Result<Scene, SceneError> {
        let scene = description::parse(string)?;
        debug!(
            "[Scene] Loaded {} occluders and {} walls.",
            scene.occluders.len(),
            scene.walls.len()
        );
        Ok(scene)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
        let data = fs::read_to_string(path.as_ref())?;
        debug!("[Scene] Reading {}", path.as_ref().display());
        Scene::from_toml(&data)
    }

    /// The sandbox's stock scene: a boxed room with four circles, one
    /// diagonal wall and the light in the middle.
    pub fn demo() -> Result<Scene, SceneError> {
        Scene::from_toml(include_str!("demo.toml"))
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn occluders(&self) -> &[CircleOccluder] {
        &self.occluders[..]
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls[..]
    }

    pub fn config(&self) -> &ShadingConfig {
        &self.config
    }

    pub fn add_occluder(&mut self, occluder: CircleOccluder) -> usize {
        self.occluders.push(occluder);
        self.occluders.len() - 1
    }

    pub fn remove_occluder(&mut self, index: usize) -> Option<CircleOccluder> {
        if index < self.occluders.len() {
            Some(self.occluders.remove(index))

        } else {
            None
        }
    }

    pub fn add_wall(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    pub fn move_light(&mut self, position: Point2) -> Result<(), SceneError> {
        self.light.set_position(position)
    }

    /// Returns `Ok(false)` if there is no occluder at `index`.
    pub fn move_occluder(&mut self, index: usize, position: Point2) -> Result<bool, SceneError> {
        match self.occluders.get_mut(index) {
            Some(occluder) => {
                occluder.set_position(position)?;
                Ok(true)
            },
            None => Ok(false)
        }
    }

    /// Index of the first occluder in scene order covering `point`.
    pub fn pick_occluder(&self, point: Point2) -> Option<usize> {
        self.occluders.iter().position(|o| o.contains(point))
    }

    /// Recomputes the shaded color of every occluder, drawing the shadow
    /// jitter from the thread local generator.
    pub fn relight(&mut self) {
        self.relight_with(&mut rand::thread_rng());
    }

    /// Like [`Scene::relight`], with an explicit source of randomness.
    pub fn relight_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {

        // Shade against a frozen snapshot, then write back
        let mut results = Vec::with_capacity(self.occluders.len());
        for i in 0..self.occluders.len() {
            results.push(shading::evaluate(&mut *rng, self, i));
        }

        for (i, (occluder, result)) in self.occluders.iter_mut().zip(results).enumerate() {
            match result {
                Some(shaded) => occluder.apply(shaded),
                None => {
                    trace!("[Scene] Occluder {} coincides with the light, restoring its base color.", i);
                    occluder.skip();
                }
            }
        }

    }

}


// Helpers --------------------------------------------------------------------
fn check_position(what: &'static str, position: Point2) -> Result<(), SceneError> {
    if position.is_finite() {
        Ok(())

    } else {
        Err(SceneError::InvalidPosition {
            what: what
        })
    }
}
