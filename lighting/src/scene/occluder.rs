// Internal Dependencies ------------------------------------------------------
use crate::color::Color;
use crate::error::SceneError;
use crate::geometry::{Point2, Shape};
use crate::shading::Shading;
use super::check_position;


// Circle Occluder ------------------------------------------------------------
#[derive(Debug, Clone, PartialEq)]
pub struct CircleOccluder {
    position: Point2,
    radius: f64,
    base_color: Color,
    current_color: Color,
    intensity: Option<f64>
}

impl CircleOccluder {

    pub fn new(position: Point2, radius: f64, color: Color) -> Result<CircleOccluder, SceneError> {

        check_position("occluder", position)?;

        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius {
                what: "occluder",
                radius: radius
            });
        }

        Ok(CircleOccluder {
            position: position,
            radius: radius,
            base_color: color,
            current_color: color,
            intensity: None
        })

    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    /// The color as shaded by the most recent relight.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Intensity factor of the most recent relight, `None` if the occluder
    /// has not been shaded yet or sat exactly on the light, in which case
    /// it shows its base color.
    pub fn intensity(&self) -> Option<f64> {
        self.intensity
    }

    pub fn shape(&self) -> Shape {
        Shape::Circle {
            center: self.position,
            radius: self.radius
        }
    }

    pub fn contains(&self, point: Point2) -> bool {
        self.position.distance(point) < self.radius
    }

    pub fn set_position(&mut self, position: Point2) -> Result<(), SceneError> {
        check_position("occluder", position)?;
        self.position = position;
        Ok(())
    }

    pub(crate) fn apply(&mut self, shading: Shading) {
        self.current_color = shading.color;
        self.intensity = Some(shading.intensity);
    }

    pub(crate) fn skip(&mut self) {
        self.current_color = self.base_color;
        self.intensity = None;
    }

}
