use crate::error::ConstructionError;
use crate::geometries::{Line2, Point2};

/// The locus of points equidistant from `focus` and the `directrix` line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parabola {
    pub focus: Point2,
    pub directrix: Line2,
    // Frame: origin is the foot of the focus on the directrix, `u` runs along the
    // directrix and `n` points towards the focus. `h` is the focal distance.
    origin: Point2,
    u: [f64; 2],
    n: [f64; 2],
    h: f64,
}

impl Parabola {
    pub fn new(focus: Point2, directrix: Line2) -> Result<Self, ConstructionError> {
        let unit = directrix.normalized().ok_or(ConstructionError::DegenerateDirectrix)?;
        let side = unit.value_at(&focus);
        if side == 0.0 {
            return Err(ConstructionError::DegenerateDirectrix);
        }
        let sign = side.signum();
        Ok(Parabola {
            focus,
            directrix,
            origin: unit.projection(&focus),
            u: [unit.b, -unit.a],
            n: [sign * unit.a, sign * unit.b],
            h: side.abs(),
        })
    }

    /// Point of the parabola whose foot on the directrix lies at signed offset `t`
    /// from the foot of the focus.
    pub fn point_at(&self, t: f64) -> Point2 {
        let s = (t * t + self.h * self.h) / (2.0 * self.h);
        Point2::new(
            self.origin.x + t * self.u[0] + s * self.n[0],
            self.origin.y + t * self.u[1] + s * self.n[1],
        )
    }

    /// Inverse of [`Parabola::point_at`] for points on the parabola.
    pub fn parameter_of(&self, p: &Point2) -> f64 {
        (p.x - self.origin.x) * self.u[0] + (p.y - self.origin.y) * self.u[1]
    }

    pub fn focal_distance(&self) -> f64 {
        self.h
    }
}

/// A bounded piece of a parabola between two of its points.
///
/// This is the curved part of a bisector between a point site (the focus) and a
/// segment site (whose supporting line is the directrix).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParabolaSegment {
    pub parabola: Parabola,
    pub p1: Point2,
    pub p2: Point2,
}

impl ParabolaSegment {
    pub fn new(focus: Point2, directrix: Line2, p1: Point2, p2: Point2) -> Result<Self, ConstructionError> {
        Ok(ParabolaSegment {
            parabola: Parabola::new(focus, directrix)?,
            p1,
            p2,
        })
    }

    pub fn focus(&self) -> Point2 {
        self.parabola.focus
    }

    pub fn directrix(&self) -> Line2 {
        self.parabola.directrix
    }

    pub fn source(&self) -> Point2 {
        self.p1
    }

    pub fn target(&self) -> Point2 {
        self.p2
    }

    /// Samples `count` points along the arc from `p1` to `p2`, evenly spaced in
    /// the directrix parameter. The end points are returned unchanged.
    pub fn generate_points(&self, count: usize) -> Vec<Point2> {
        let count = count.max(2);
        let t1 = self.parabola.parameter_of(&self.p1);
        let t2 = self.parabola.parameter_of(&self.p2);

        let mut points = Vec::with_capacity(count);
        points.push(self.p1);
        for i in 1..count - 1 {
            let t = t1 + (t2 - t1) * (i as f64 / (count - 1) as f64);
            points.push(self.parabola.point_at(t));
        }
        points.push(self.p2);
        points
    }
}
