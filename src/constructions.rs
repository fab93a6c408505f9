use crate::error::{ConstructionError, contract};
use crate::geometries::{Circle2, Line2, Point2, Ray2, Segment2, midpoint};
use crate::kernel::{FloatKernel, Kernel};
use crate::parabola::ParabolaSegment;
use crate::site::Site;

/// The geometric realization of a Voronoi edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BisectorShape {
    Line(Line2),
    Ray(Ray2),
    Segment(Segment2),
    Parabola(ParabolaSegment),
}

impl BisectorShape {
    /// Polyline approximation of the shape.
    ///
    /// Unbounded shapes are cut at `extent` from their anchor point. Parabolic
    /// arcs are sampled with `count` points.
    pub fn to_polyline(&self, extent: f64, count: usize) -> Vec<Point2> {
        match self {
            BisectorShape::Line(l) => {
                let Some(u) = l.direction().unit() else {
                    return Vec::new();
                };
                let o = l.point();
                vec![o.offset(u[0], u[1], -extent), o.offset(u[0], u[1], extent)]
            }
            BisectorShape::Ray(r) => match r.direction.unit() {
                Some(u) => vec![r.source, r.source.offset(u[0], u[1], extent)],
                None => vec![r.source],
            },
            BisectorShape::Segment(s) => vec![s.source, s.target],
            BisectorShape::Parabola(p) => p.generate_points(count),
        }
    }

    /// End points of a bounded shape, `None` for lines and rays.
    pub fn endpoints(&self) -> Option<(Point2, Point2)> {
        match self {
            BisectorShape::Segment(s) => Some((s.source, s.target)),
            BisectorShape::Parabola(p) => Some((p.source(), p.target())),
            BisectorShape::Line(_) | BisectorShape::Ray(_) => None,
        }
    }
}

/// Constructions of the segment Voronoi diagram: vertices, circles and bisectors.
///
/// All constructions are pure; a single instance can be shared between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Constructions<K: Kernel = FloatKernel> {
    kernel: K,
}

impl Constructions<FloatKernel> {
    pub fn new() -> Self {
        Self::with_kernel(FloatKernel::new())
    }
}

impl<K: Kernel> Constructions<K> {
    pub fn with_kernel(kernel: K) -> Self {
        Constructions { kernel }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The point equidistant from the three sites.
    pub fn vertex(&self, s1: &Site, s2: &Site, s3: &Site) -> Result<Point2, ConstructionError> {
        Ok(self.kernel.voronoi_vertex(s1, s2, s3)?.point())
    }

    /// The circle centered at the Voronoi vertex and tangent to the three sites.
    pub fn circle(&self, s1: &Site, s2: &Site, s3: &Site) -> Result<Circle2, ConstructionError> {
        Ok(self.kernel.voronoi_vertex(s1, s2, s3)?.circle())
    }

    /// The unbounded bisector of `p` and `q`.
    ///
    /// At least one of the sites must be a point. If the other is a segment, the
    /// point must be one of its endpoints and the result is the normal of the
    /// segment through that point.
    pub fn bisector_line(&self, p: &Site, q: &Site) -> Result<Line2, ConstructionError> {
        match (p, q) {
            (Site::Point(a), Site::Point(b)) => {
                log::trace!("bisector line: point/point");
                Ok(Line2::through(a, b).perpendicular(&midpoint(a, b)))
            }
            (Site::Segment(s), Site::Point(b)) => {
                log::trace!("bisector line: segment/point");
                Ok(s.supporting_line().perpendicular(b))
            }
            (Site::Point(a), Site::Segment(s)) => {
                log::trace!("bisector line: point/segment");
                Ok(s.supporting_line().perpendicular(a))
            }
            (Site::Segment(_), Site::Segment(_)) => {
                Err(ConstructionError::Precondition("bisector line of two segments"))
            }
        }
    }

    /// The bisector of `p` and `q` starting at the Voronoi vertex of `(p, q, r)`.
    pub fn bisector_ray(&self, p: &Site, q: &Site, r: &Site) -> Result<Ray2, ConstructionError> {
        let (p1, p2) = match (p, q) {
            (Site::Point(a), Site::Point(b)) => (*b, *a),
            (Site::Point(a), Site::Segment(s)) => {
                contract!(self.kernel.is_endpoint(a, s), "point is an endpoint of the segment");
                let other = if self.kernel.same_points(a, &s.source) { s.target } else { s.source };
                (other, *a)
            }
            (Site::Segment(s), Site::Point(b)) => {
                contract!(self.kernel.is_endpoint(b, s), "point is an endpoint of the segment");
                let other = if self.kernel.same_points(b, &s.source) { s.target } else { s.source };
                (*b, other)
            }
            (Site::Segment(_), Site::Segment(_)) => {
                return Err(ConstructionError::Precondition("bisector ray of two segments"));
            }
        };
        let v = self.vertex(p, q, r)?;
        log::trace!("bisector ray from {:?}", v);
        let l = Line2::through(&p1, &p2);
        Ok(Ray2::new(v, l.perpendicular(&v).direction()))
    }

    /// The bisector of `p` and `q` between the Voronoi vertices of `(p, q, r)`
    /// and `(q, p, s)`.
    ///
    /// Straight unless exactly one of `p`, `q` is a point that is not an endpoint
    /// of the other, in which case the edge is a parabolic arc with the point as
    /// focus and the segment's supporting line as directrix.
    pub fn bisector_segment(&self, p: &Site, q: &Site, r: &Site, s: &Site) -> Result<BisectorShape, ConstructionError> {
        let v1 = self.vertex(p, q, r)?;
        let v2 = self.vertex(q, p, s)?;

        let (focus, segment) = match (p, q) {
            (Site::Point(_), Site::Point(_)) | (Site::Segment(_), Site::Segment(_)) => {
                log::trace!("bisector segment: straight, same site types");
                return Ok(BisectorShape::Segment(Segment2::new(v1, v2)));
            }
            (Site::Point(a), Site::Segment(b)) => (a, b),
            (Site::Segment(a), Site::Point(b)) => (b, a),
        };

        if self.kernel.is_endpoint(focus, segment) {
            log::trace!("bisector segment: straight, point is a segment endpoint");
            return Ok(BisectorShape::Segment(Segment2::new(v1, v2)));
        }

        log::trace!("bisector segment: parabolic arc with focus {:?}", focus);
        let arc = self
            .kernel
            .parabola_segment(*focus, segment.supporting_line(), v1, v2)?;
        Ok(BisectorShape::Parabola(arc))
    }
}
