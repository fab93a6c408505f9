//! Planar kernel primitives used by the constructions.
//!
//! Coordinates are plain `f64`. Lines follow the usual `a*x + b*y + c = 0`
//! representation and carry an orientation: the direction of a line is `(b, -a)`
//! and a point lies on its positive (left) side when `a*x + b*y + c > 0`.

/// A point in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Point translated by `t` times the vector `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64, t: f64) -> Point2 {
        Point2::new(self.x + t * dx, self.y + t * dy)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(p: [f64; 2]) -> Self {
        Point2::new(p[0], p[1])
    }
}

impl From<(f64, f64)> for Point2 {
    fn from(p: (f64, f64)) -> Self {
        Point2::new(p.0, p.1)
    }
}

/// The point halfway between `p` and `q`.
pub fn midpoint(p: &Point2, q: &Point2) -> Point2 {
    Point2::new(0.5 * (p.x + q.x), 0.5 * (p.y + q.y))
}

pub fn squared_distance(p: &Point2, q: &Point2) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    dx * dx + dy * dy
}

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// Positive when `a, b, c` are in counterclockwise order, negative when clockwise
/// and zero when collinear.
pub fn orient(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// A direction, not necessarily normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction2 {
    pub dx: f64,
    pub dy: f64,
}

impl Direction2 {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// The direction rotated counterclockwise by a right angle.
    pub fn perpendicular(&self) -> Direction2 {
        Direction2::new(-self.dy, self.dx)
    }

    pub fn opposite(&self) -> Direction2 {
        Direction2::new(-self.dx, -self.dy)
    }

    /// Unit vector along the direction, or `None` for the null direction.
    pub fn unit(&self) -> Option<[f64; 2]> {
        let len = (self.dx * self.dx + self.dy * self.dy).sqrt();
        if len == 0.0 {
            return None;
        }
        Some([self.dx / len, self.dy / len])
    }

    /// True when both directions point the same way.
    pub fn same_as(&self, other: &Direction2) -> bool {
        let cross = self.dx * other.dy - self.dy * other.dx;
        let dot = self.dx * other.dx + self.dy * other.dy;
        cross == 0.0 && dot > 0.0
    }
}

/// An oriented line `a*x + b*y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line2 {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// The line through `p` and `q`, oriented from `p` towards `q`.
    pub fn through(p: &Point2, q: &Point2) -> Self {
        Line2 {
            a: p.y - q.y,
            b: q.x - p.x,
            c: p.x * q.y - p.y * q.x,
        }
    }

    pub fn direction(&self) -> Direction2 {
        Direction2::new(self.b, -self.a)
    }

    /// The line through `p` perpendicular to `self`.
    ///
    /// Its direction is the direction of `self` rotated counterclockwise by a
    /// right angle. Bisector lines and rays both rely on this orientation.
    pub fn perpendicular(&self, p: &Point2) -> Line2 {
        Line2 {
            a: -self.b,
            b: self.a,
            c: self.b * p.x - self.a * p.y,
        }
    }

    pub fn opposite(&self) -> Line2 {
        Line2::new(-self.a, -self.b, -self.c)
    }

    /// Both normal coefficients are zero.
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// `a*x + b*y + c`: positive on the left of the line.
    pub fn value_at(&self, p: &Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    pub fn squared_distance(&self, p: &Point2) -> f64 {
        let v = self.value_at(p);
        v * v / (self.a * self.a + self.b * self.b)
    }

    pub fn distance(&self, p: &Point2) -> f64 {
        self.squared_distance(p).sqrt()
    }

    /// Orthogonal projection of `p` onto the line.
    pub fn projection(&self, p: &Point2) -> Point2 {
        let n2 = self.a * self.a + self.b * self.b;
        let t = self.value_at(p) / n2;
        Point2::new(p.x - t * self.a, p.y - t * self.b)
    }

    /// The point of the line closest to the origin.
    pub fn point(&self) -> Point2 {
        self.projection(&Point2::new(0.0, 0.0))
    }

    /// Intersection point, or `None` when the lines are parallel.
    pub fn intersection(&self, other: &Line2) -> Option<Point2> {
        let det = self.a * other.b - other.a * self.b;
        if det == 0.0 {
            return None;
        }
        let x = (self.b * other.c - other.b * self.c) / det;
        let y = (other.a * self.c - self.a * other.c) / det;
        Some(Point2::new(x, y))
    }

    /// Same line rescaled so that `(a, b)` is a unit vector.
    pub fn normalized(&self) -> Option<Line2> {
        let len = (self.a * self.a + self.b * self.b).sqrt();
        if len == 0.0 {
            return None;
        }
        Some(Line2::new(self.a / len, self.b / len, self.c / len))
    }
}

/// A ray starting at `source`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray2 {
    pub source: Point2,
    pub direction: Direction2,
}

impl Ray2 {
    pub fn new(source: Point2, direction: Direction2) -> Self {
        Self { source, direction }
    }

    pub fn supporting_line(&self) -> Line2 {
        let second = self.source.offset(self.direction.dx, self.direction.dy, 1.0);
        Line2::through(&self.source, &second)
    }

    pub fn point_at(&self, t: f64) -> Point2 {
        self.source.offset(self.direction.dx, self.direction.dy, t)
    }
}

/// A closed straight segment from `source` to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub source: Point2,
    pub target: Point2,
}

impl Segment2 {
    pub fn new(source: Point2, target: Point2) -> Self {
        Self { source, target }
    }

    /// The line through the segment, oriented from `source` to `target`.
    pub fn supporting_line(&self) -> Line2 {
        Line2::through(&self.source, &self.target)
    }

    pub fn squared_length(&self) -> f64 {
        squared_distance(&self.source, &self.target)
    }

    pub fn is_degenerate(&self) -> bool {
        self.source == self.target
    }

    /// Parameter of the projection of `p` on the segment, `0` at the source and
    /// `1` at the target.
    pub fn parameter_of(&self, p: &Point2) -> f64 {
        let dx = self.target.x - self.source.x;
        let dy = self.target.y - self.source.y;
        ((p.x - self.source.x) * dx + (p.y - self.source.y) * dy) / (dx * dx + dy * dy)
    }

    pub fn squared_distance(&self, p: &Point2) -> f64 {
        let t = self.parameter_of(p).clamp(0.0, 1.0);
        let q = self
            .source
            .offset(self.target.x - self.source.x, self.target.y - self.source.y, t);
        squared_distance(p, &q)
    }
}

/// A circle given by its center and squared radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle2 {
    pub center: Point2,
    pub squared_radius: f64,
}

impl Circle2 {
    pub fn new(center: Point2, squared_radius: f64) -> Self {
        Self { center, squared_radius }
    }

    pub fn radius(&self) -> f64 {
        self.squared_radius.sqrt()
    }
}
