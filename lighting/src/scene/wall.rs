// Internal Dependencies ------------------------------------------------------
use crate::error::SceneError;
use crate::geometry::{Point2, Shape, point_on_segment, surface_normal};
use super::check_position;


// Wall Segment ---------------------------------------------------------------
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    start: Point2,
    end: Point2
}

impl Wall {

    pub fn new(start: Point2, end: Point2) -> Result<Wall, SceneError> {
        check_position("wall", start)?;
        check_position("wall", end)?;
        Ok(Wall {
            start: start,
            end: end
        })
    }

    pub fn from_line(line: [f64; 4]) -> Result<Wall, SceneError> {
        Wall::new(
            Point2::new(line[0], line[1]),
            Point2::new(line[2], line[3])
        )
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn shape(&self) -> Shape {
        Shape::Segment {
            start: self.start,
            end: self.end
        }
    }

    pub fn normal(&self) -> Point2 {
        surface_normal(self.start, &self.shape())
    }

    pub fn contains(&self, point: Point2) -> bool {
        point_on_segment(point, self.start, self.end)
    }

}
