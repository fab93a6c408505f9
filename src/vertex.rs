use crate::error::ConstructionError;
use crate::geometries::{self, Circle2, Line2, Point2, Segment2, midpoint, orient};
use crate::site::Site;

/// Default relative tolerance used when validating vertex candidates.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// A Voronoi vertex of three sites: the center of the circle tangent to all three.
///
/// Segment sites are treated through their supporting lines, with the tangency
/// point required to fall on the closed segment. When a point site is an endpoint
/// of a segment site in the same triple, the circle touches both at that point.
///
/// Several circles may be tangent to the same three sites. The vertex of
/// `(s1, s2, s3)` is the one whose tangency points are met in counterclockwise
/// order `s1, s2, s3`, matching a counterclockwise dual triangle. Swapping two
/// sites therefore selects the vertex on the other side of their bisector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoronoiVertex {
    circle: Circle2,
}

impl VoronoiVertex {
    pub fn new(s1: &Site, s2: &Site, s3: &Site) -> Result<Self, ConstructionError> {
        Self::with_tolerance(s1, s2, s3, DEFAULT_TOLERANCE)
    }

    pub fn with_tolerance(s1: &Site, s2: &Site, s3: &Site, tolerance: f64) -> Result<Self, ConstructionError> {
        let sites = [s1, s2, s3];
        let scale = sites.iter().map(|s| site_extent(s)).fold(1.0, f64::max);

        let candidates = candidates(&sites, tolerance);
        log::trace!("voronoi vertex: {} candidate centers", candidates.len());

        let mut best: Option<(u8, f64, Point2)> = None;
        for c in candidates {
            let Some((rank, r2)) = classify(&sites, &c, tolerance, scale) else {
                continue;
            };
            let better = match best {
                None => true,
                Some((best_rank, best_r2, _)) => rank < best_rank || (rank == best_rank && r2 < best_r2),
            };
            if better {
                best = Some((rank, r2, c));
            }
        }

        match best {
            Some((_, r2, center)) => Ok(VoronoiVertex {
                circle: Circle2::new(center, r2),
            }),
            None => {
                log::debug!("no equidistant point for sites {:?}, {:?}, {:?}", s1, s2, s3);
                Err(ConstructionError::NoEquidistantPoint)
            }
        }
    }

    pub fn point(&self) -> Point2 {
        self.circle.center
    }

    pub fn circle(&self) -> Circle2 {
        self.circle
    }
}

impl From<Circle2> for VoronoiVertex {
    fn from(circle: Circle2) -> Self {
        VoronoiVertex { circle }
    }
}

fn site_extent(site: &Site) -> f64 {
    match site {
        Site::Point(p) => p.x.abs().max(p.y.abs()),
        Site::Segment(s) => s
            .source
            .x
            .abs()
            .max(s.source.y.abs())
            .max(s.target.x.abs())
            .max(s.target.y.abs()),
    }
}

fn is_endpoint(p: &Point2, s: &Segment2) -> bool {
    *p == s.source || *p == s.target
}

/// Checks a candidate center against the three sites.
///
/// Returns `None` when the distances disagree or a tangency point falls outside
/// its segment. Otherwise returns the orientation rank of the tangency points
/// (0 counterclockwise, 1 degenerate, 2 clockwise) and the squared radius.
fn classify(sites: &[&Site; 3], c: &Point2, tolerance: f64, scale: f64) -> Option<(u8, f64)> {
    if !c.x.is_finite() || !c.y.is_finite() {
        return None;
    }

    let mut feet = [Point2::new(0.0, 0.0); 3];
    let mut dists = [0.0; 3];
    for (i, site) in sites.iter().enumerate() {
        match site {
            Site::Point(p) => {
                feet[i] = *p;
                dists[i] = geometries::squared_distance(c, p).sqrt();
            }
            Site::Segment(s) => {
                let t = s.parameter_of(c);
                if t < -tolerance || t > 1.0 + tolerance {
                    return None;
                }
                let line = s.supporting_line();
                feet[i] = line.projection(c);
                dists[i] = line.distance(c);
            }
        }
    }

    let r = dists[0];
    let slack = tolerance * scale.max(r);
    if (dists[1] - r).abs() > slack || (dists[2] - r).abs() > slack {
        return None;
    }

    let o = orient(&feet[0], &feet[1], &feet[2]);
    let rank = if o.abs() <= tolerance * scale * scale {
        1
    } else if o > 0.0 {
        0
    } else {
        2
    };
    Some((rank, r * r))
}

/// All points equidistant from the three sites, before validation.
fn candidates(sites: &[&Site; 3], tolerance: f64) -> Vec<Point2> {
    let mut points = Vec::new();
    let mut segments = Vec::new();
    for site in sites {
        match site {
            Site::Point(p) => points.push(*p),
            Site::Segment(s) => segments.push(*s),
        }
    }

    match (points.as_slice(), segments.as_slice()) {
        ([p, q, r], []) => circumcenter(p, q, r).into_iter().collect(),
        ([p, q], [s]) => two_points_one_segment(p, q, s, tolerance),
        ([p], [s1, s2]) => one_point_two_segments(p, s1, s2, tolerance),
        ([], [s1, s2, s3]) => three_segments(s1, s2, s3, tolerance),
        _ => unreachable!("three sites split into points and segments"),
    }
}

fn circumcenter(p: &Point2, q: &Point2, r: &Point2) -> Option<Point2> {
    bisector(p, q).intersection(&bisector(q, r))
}

fn bisector(p: &Point2, q: &Point2) -> Line2 {
    Line2::through(p, q).perpendicular(&midpoint(p, q))
}

fn two_points_one_segment(p: &Point2, q: &Point2, s: &Segment2, tolerance: f64) -> Vec<Point2> {
    let l = s.supporting_line();
    match (is_endpoint(p, s), is_endpoint(q, s)) {
        // Perpendiculars at both ends of the segment are parallel.
        (true, true) => Vec::new(),
        (true, false) => l.perpendicular(p).intersection(&bisector(p, q)).into_iter().collect(),
        (false, true) => l.perpendicular(q).intersection(&bisector(p, q)).into_iter().collect(),
        (false, false) => match l.normalized() {
            Some(directrix) => line_parabola(&bisector(p, q), p, &directrix, tolerance),
            None => Vec::new(),
        },
    }
}

fn one_point_two_segments(p: &Point2, s1: &Segment2, s2: &Segment2, tolerance: f64) -> Vec<Point2> {
    let (Some(l1), Some(l2)) = (s1.supporting_line().normalized(), s2.supporting_line().normalized()) else {
        return Vec::new();
    };

    match (is_endpoint(p, s1), is_endpoint(p, s2)) {
        (true, true) => vec![*p],
        (true, false) => along_normal(p, &l1, &l2),
        (false, true) => along_normal(p, &l2, &l1),
        (false, false) => equidistant_lines(&l1, &l2, tolerance)
            .iter()
            .flat_map(|m| line_parabola(m, p, &l1, tolerance))
            .collect(),
    }
}

/// Centers on the normal of `own` through its endpoint `p` that are as far from
/// `other` as from `p`.
fn along_normal(p: &Point2, own: &Line2, other: &Line2) -> Vec<Point2> {
    let k = other.a * own.a + other.b * own.b;
    let e = other.value_at(p);
    [1.0, -1.0]
        .iter()
        .filter_map(|sigma| {
            let denom = k - sigma;
            if denom == 0.0 {
                return None;
            }
            let t = -e / denom;
            Some(p.offset(own.a, own.b, t))
        })
        .collect()
}

fn three_segments(s1: &Segment2, s2: &Segment2, s3: &Segment2, tolerance: f64) -> Vec<Point2> {
    let lines = [s1, s2, s3].map(|s| s.supporting_line().normalized());
    let [Some(l1), Some(l2), Some(l3)] = lines else {
        return Vec::new();
    };

    let m12 = equidistant_lines(&l1, &l2, tolerance);
    let m13 = equidistant_lines(&l1, &l3, tolerance);
    let mut out = Vec::with_capacity(4);
    for a in &m12 {
        for b in &m13 {
            if let Some(c) = a.intersection(b) {
                out.push(c);
            }
        }
    }
    out
}

/// The two angle bisectors of a pair of unit lines. For parallel lines only the
/// midline survives.
fn equidistant_lines(l1: &Line2, l2: &Line2, tolerance: f64) -> Vec<Line2> {
    [1.0, -1.0]
        .iter()
        .map(|sigma| Line2::new(l1.a - sigma * l2.a, l1.b - sigma * l2.b, l1.c - sigma * l2.c))
        .filter(|m| (m.a * m.a + m.b * m.b).sqrt() > tolerance)
        .collect()
}

/// Intersection of `line` with the parabola of `focus` and the unit line `directrix`.
fn line_parabola(line: &Line2, focus: &Point2, directrix: &Line2, tolerance: f64) -> Vec<Point2> {
    let Some(u) = line.direction().unit() else {
        return Vec::new();
    };
    let o = line.point();
    let w = [o.x - focus.x, o.y - focus.y];
    let e = directrix.value_at(&o);
    let k = directrix.a * u[0] + directrix.b * u[1];

    // |o + t*u - focus|^2 = (e + t*k)^2
    let qa = 1.0 - k * k;
    let qb = 2.0 * (w[0] * u[0] + w[1] * u[1] - e * k);
    let qc = w[0] * w[0] + w[1] * w[1] - e * e;

    if qa.abs() <= tolerance {
        if qb == 0.0 {
            return Vec::new();
        }
        return vec![o.offset(u[0], u[1], -qc / qb)];
    }

    let mut disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        if disc < -tolerance * (qb * qb + (4.0 * qa * qc).abs()) {
            return Vec::new();
        }
        disc = 0.0;
    }
    let root = disc.sqrt();
    let t1 = (-qb + root) / (2.0 * qa);
    let t2 = (-qb - root) / (2.0 * qa);
    vec![o.offset(u[0], u[1], t1), o.offset(u[0], u[1], t2)]
}
