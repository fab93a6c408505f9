use crate::error::ConstructionError;
use crate::geometries::{Line2, Point2, Segment2};

/// An input site of a segment Voronoi diagram: either a point or a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Site {
    Point(Point2),
    Segment(Segment2),
}

impl Site {
    pub fn point(x: f64, y: f64) -> Site {
        Site::Point(Point2::new(x, y))
    }

    /// A segment site. Segments with identical endpoints are rejected.
    pub fn segment(source: [f64; 2], target: [f64; 2]) -> Result<Site, ConstructionError> {
        let segment = Segment2::new(source.into(), target.into());
        if segment.is_degenerate() {
            return Err(ConstructionError::DegenerateSegment);
        }
        Ok(Site::Segment(segment))
    }

    pub fn is_point(&self) -> bool {
        matches!(self, Site::Point(_))
    }

    pub fn is_segment(&self) -> bool {
        matches!(self, Site::Segment(_))
    }

    /// Supporting line of a segment site, `None` for a point.
    pub fn supporting_line(&self) -> Option<Line2> {
        match self {
            Site::Point(_) => None,
            Site::Segment(s) => Some(s.supporting_line()),
        }
    }

    /// Squared Euclidean distance from `p` to the site.
    pub fn squared_distance(&self, p: &Point2) -> f64 {
        match self {
            Site::Point(q) => crate::geometries::squared_distance(p, q),
            Site::Segment(s) => s.squared_distance(p),
        }
    }
}

impl From<Point2> for Site {
    fn from(p: Point2) -> Self {
        Site::Point(p)
    }
}
