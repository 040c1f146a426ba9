// STD Dependencies -----------------------------------------------------------
use std::ops::{Add, Sub, Mul};


// Statics --------------------------------------------------------------------
pub const PARALLEL_EPSILON: f64 = 1e-6;


// 2D Point -------------------------------------------------------------------
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64
}

impl Point2 {

    pub fn new(x: f64, y: f64) -> Point2 {
        Point2 {
            x: x,
            y: y
        }
    }

    /// Unit vector pointing at `r` radians.
    pub fn from_angle(r: f64) -> Point2 {
        Point2::new(r.cos(), r.sin())
    }

    pub fn dot(&self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: Point2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Point2) -> f64 {
        (other - *self).length()
    }

    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// `None` for the zero vector.
    pub fn normalize(&self) -> Option<Point2> {
        let l = self.length();
        if l > 0.0 {
            Some(Point2::new(self.x / l, self.y / l))

        } else {
            None
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

}

impl Add for Point2 {
    type Output = Point2;
    fn add(self, other: Point2) -> Point2 {
        Point2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, other: Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;
    fn mul(self, s: f64) -> Point2 {
        Point2::new(self.x * s, self.y * s)
    }
}


// Shapes ---------------------------------------------------------------------
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Circle {
        center: Point2,
        radius: f64
    },
    Segment {
        start: Point2,
        end: Point2
    }
}

impl Shape {

    pub fn ray_intersect(&self, origin: Point2, direction: Point2) -> Option<Point2> {
        match *self {
            Shape::Circle { center, radius } => ray_intersects_circle(origin, direction, center, radius),
            Shape::Segment { start, end } => ray_intersects_segment(origin, direction, start, end)
        }
    }

    pub fn normal_at(&self, point: Point2) -> Point2 {
        surface_normal(point, self)
    }

}


// 2D Ray Casting -------------------------------------------------------------

/// Casts a ray against a circle and returns the point where it enters the
/// circle, or the exit point when `origin` lies inside of it.
///
/// `direction` must already be normalized. Tangent rays do not hit.
pub fn ray_intersects_circle(
    origin: Point2,
    direction: Point2,
    center: Point2,
    radius: f64

) -> Option<Point2> {

    // project the circle center onto the ray
    let t = (center - origin).dot(direction);

    // compute the point on the ray line closest to the center and its distance
    let closest = origin + direction * t;
    let d = closest.distance(center);

    if d < radius {

        // compute distance from t to both circle intersection points
        let h = (radius * radius - d * d).sqrt();
        let (t1, t2) = (t - h, t + h);

        // nearest root if the circle lies ahead, exit root otherwise
        let t = if t1 > 0.0 && t2 > 0.0 {
            t1.min(t2)

        } else {
            t1.max(t2)
        };

        if t > 0.0 {
            Some(origin + direction * t)

        } else {
            None
        }

    } else {
        None
    }

}

/// Casts a ray against the segment `start -> end`.
///
/// Parallel and degenerate configurations never intersect, neither do hits
/// located exactly at the ray's origin.
pub fn ray_intersects_segment(
    origin: Point2,
    direction: Point2,
    start: Point2,
    end: Point2

) -> Option<Point2> {

    let line = end - start;

    let d = direction.cross(line);
    if d.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (start - origin).cross(line) / d;
    let u = -(origin - start).cross(direction) / d;

    if (0.0..=1.0).contains(&u) && t > 0.0 {
        Some(origin + direction * t)

    } else {
        None
    }

}

/// Unit surface normal of `shape` at `point`.
///
/// Circles point away from their center, segments are rotated 90° clockwise
/// in screen space. Degenerate cases fall back to `(0, 1)`.
pub fn surface_normal(point: Point2, shape: &Shape) -> Point2 {
    let normal = match *shape {
        Shape::Circle { center, .. } => (point - center).normalize(),
        Shape::Segment { start, end } => {
            let line = end - start;
            Point2::new(line.y, -line.x).normalize()
        }
    };
    normal.unwrap_or(Point2::new(0.0, 1.0))
}

pub fn point_on_segment(point: Point2, start: Point2, end: Point2) -> bool {

    let cross = (end - start).cross(point - start);
    if cross.abs() > 1e-12 {
        false

    } else {
        point.x >= start.x.min(end.x) && point.x <= start.x.max(end.x)
            && point.y >= start.y.min(end.y) && point.y <= start.y.max(end.y)
    }

}
