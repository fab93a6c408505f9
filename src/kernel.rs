use crate::error::ConstructionError;
use crate::geometries::{Line2, Point2, Segment2};
use crate::parabola::ParabolaSegment;
use crate::site::Site;
use crate::vertex::{DEFAULT_TOLERANCE, VoronoiVertex};

/// The geometric services the constructions are built on.
///
/// The constructions are generic over this trait so that a different number
/// representation, or a filtered/exact evaluation strategy, can be plugged in
/// without dynamic dispatch.
pub trait Kernel: Send + Sync {
    /// Exact equality of two points. Must not be tolerance based: it decides
    /// whether a point site is an endpoint of a segment site.
    fn same_points(&self, p: &Point2, q: &Point2) -> bool;

    /// Solves for the point equidistant from three sites.
    fn voronoi_vertex(&self, s1: &Site, s2: &Site, s3: &Site) -> Result<VoronoiVertex, ConstructionError>;

    /// Builds the parabolic arc of `focus` and `directrix` between `p1` and `p2`.
    fn parabola_segment(
        &self,
        focus: Point2,
        directrix: Line2,
        p1: Point2,
        p2: Point2,
    ) -> Result<ParabolaSegment, ConstructionError>;

    fn is_endpoint(&self, p: &Point2, s: &Segment2) -> bool {
        self.same_points(p, &s.source) || self.same_points(p, &s.target)
    }
}

/// Double precision kernel.
#[derive(Clone, Copy, Debug)]
pub struct FloatKernel {
    tolerance: f64,
}

impl FloatKernel {
    pub fn new() -> Self {
        Self::with_tolerance(DEFAULT_TOLERANCE)
    }

    /// Kernel with a custom relative tolerance for validating vertex candidates.
    pub fn with_tolerance(tolerance: f64) -> Self {
        FloatKernel { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for FloatKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for FloatKernel {
    fn same_points(&self, p: &Point2, q: &Point2) -> bool {
        p.x == q.x && p.y == q.y
    }

    fn voronoi_vertex(&self, s1: &Site, s2: &Site, s3: &Site) -> Result<VoronoiVertex, ConstructionError> {
        VoronoiVertex::with_tolerance(s1, s2, s3, self.tolerance)
    }

    fn parabola_segment(
        &self,
        focus: Point2,
        directrix: Line2,
        p1: Point2,
        p2: Point2,
    ) -> Result<ParabolaSegment, ConstructionError> {
        ParabolaSegment::new(focus, directrix, p1, p2)
    }
}
