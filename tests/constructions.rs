use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use segvoro::geometries::{midpoint, orient};
use segvoro::{BisectorShape, ConstructionError, Constructions, Line2, Point2, Segment2, Site};

fn seg(a: [f64; 2], b: [f64; 2]) -> Site {
    Site::segment(a, b).expect("Segment endpoints should differ")
}

fn random_point(rng: &mut StdRng) -> Point2 {
    Point2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0))
}

/// Random counterclockwise triangle that is not too thin.
fn random_ccw_triangle(rng: &mut StdRng) -> (Point2, Point2, Point2) {
    loop {
        let (a, b, c) = (random_point(rng), random_point(rng), random_point(rng));
        let o = orient(&a, &b, &c);
        if o.abs() < 100.0 {
            continue;
        }
        return if o > 0.0 { (a, b, c) } else { (a, c, b) };
    }
}

fn assert_on_line(l: &Line2, p: &Point2) {
    assert!(l.distance(p) < 1e-9, "Point {:?} should lie on {:?}", p, l);
}

#[test]
fn test_bisector_line_of_two_points_is_vertical() {
    let c = Constructions::new();
    let l = c.bisector_line(&Site::point(0.0, 0.0), &Site::point(2.0, 0.0)).unwrap();
    assert_on_line(&l, &Point2::new(1.0, -10.0));
    assert_on_line(&l, &Point2::new(1.0, 10.0));
    assert_eq!(l.direction().dx, 0.0);
}

#[test]
fn test_bisector_line_at_source_endpoint_is_vertical() {
    let c = Constructions::new();
    let p = Site::point(0.0, 0.0);
    let q = seg([0.0, 0.0], [4.0, 0.0]);
    let l = c.bisector_line(&p, &q).unwrap();
    assert_on_line(&l, &Point2::new(0.0, -3.0));
    assert_on_line(&l, &Point2::new(0.0, 3.0));
}

#[test]
fn test_bisector_line_properties_random() {
    let c = Constructions::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let (a, b) = (random_point(&mut rng), random_point(&mut rng));
        if a == b {
            continue;
        }
        let l = c.bisector_line(&Site::Point(a), &Site::Point(b)).unwrap();
        let d = l.direction();
        let dot = d.dx * (b.x - a.x) + d.dy * (b.y - a.y);
        assert!(dot.abs() < 1e-6, "Bisector should be perpendicular to ab");
        assert!(l.distance(&midpoint(&a, &b)) < 1e-9, "Bisector should pass through the midpoint");

        // Segment with `a` as an endpoint: the bisector is its normal through `a`.
        let s = Site::Segment(Segment2::new(b, a));
        for l in [c.bisector_line(&s, &Site::Point(a)).unwrap(), c.bisector_line(&Site::Point(a), &s).unwrap()] {
            let d = l.direction();
            let dot = d.dx * (b.x - a.x) + d.dy * (b.y - a.y);
            assert!(dot.abs() < 1e-6);
            assert!(l.distance(&a) < 1e-9);
        }
    }
}

#[test]
fn test_bisector_ray_starts_at_vertex_and_points_away() {
    let c = Constructions::new();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let (a, b, r) = random_ccw_triangle(&mut rng);
        let (p, q, r_site) = (Site::Point(a), Site::Point(b), Site::Point(r));
        let ray = c.bisector_ray(&p, &q, &r_site).unwrap();
        assert_eq!(ray.source, c.vertex(&p, &q, &r_site).unwrap());

        let m = midpoint(&a, &b);
        let dot = ray.direction.dx * (r.x - m.x) + ray.direction.dy * (r.y - m.y);
        assert!(dot < 0.0, "Ray should leave the third site behind");

        let line = c.bisector_line(&p, &q).unwrap();
        let cross = ray.direction.dx * line.direction().dy - ray.direction.dy * line.direction().dx;
        assert!(cross.abs() < 1e-6 * (1.0 + line.direction().dx.abs() + line.direction().dy.abs()));
    }
}

#[test]
fn test_bisector_ray_point_and_segment() {
    let c = Constructions::new();
    let p = Site::point(0.0, 0.0);
    let q = seg([0.0, 0.0], [4.0, 0.0]);
    let r = Site::point(-2.0, 2.0);

    let ray = c.bisector_ray(&p, &q, &r).unwrap();
    assert_eq!(ray.source, Point2::new(0.0, 2.0));
    // Reference line from (4,0) to (0,0), rotated counterclockwise.
    assert!(ray.direction.same_as(&segvoro::Direction2::new(0.0, -1.0)));
}

#[test]
fn test_vertex_equidistant_random_points() {
    let c = Constructions::new();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let (a, b, d) = random_ccw_triangle(&mut rng);
        let sites = [Site::Point(a), Site::Point(b), Site::Point(d)];
        let circle = c.circle(&sites[0], &sites[1], &sites[2]).unwrap();
        assert_eq!(circle.center, c.vertex(&sites[0], &sites[1], &sites[2]).unwrap());
        for s in &sites {
            let d2 = s.squared_distance(&circle.center);
            assert!((d2 - circle.squared_radius).abs() <= 1e-6 * circle.squared_radius.max(1.0));
        }
    }
}

#[test]
fn test_vertex_equidistant_random_point_point_segment() {
    let c = Constructions::new();
    let mut rng = StdRng::seed_from_u64(5);
    let q = seg([-100.0, 0.0], [100.0, 0.0]);
    let mut found = 0;
    for _ in 0..500 {
        let a = Point2::new(rng.gen_range(-50.0..50.0), rng.gen_range(1.0..50.0));
        let b = Point2::new(rng.gen_range(-50.0..50.0), rng.gen_range(1.0..50.0));
        let (p, r) = (Site::Point(a), Site::Point(b));
        let Ok(circle) = c.circle(&p, &q, &r) else {
            continue;
        };
        found += 1;
        for s in [&p, &q, &r] {
            let d2 = s.squared_distance(&circle.center);
            assert!((d2 - circle.squared_radius).abs() <= 1e-6 * circle.squared_radius.max(1.0));
        }
    }
    assert!(found > 100, "Most triples above a long segment should have a vertex, found {}", found);
}

#[test]
fn test_scenario_interior_point_gives_parabolic_arc() {
    let c = Constructions::new();
    let p = Site::point(1.0, 5.0);
    let q = seg([0.0, 0.0], [4.0, 0.0]);
    let r = Site::point(3.0, 5.0);
    let s = Site::point(-0.5, 5.0);

    let shape = c.bisector_segment(&p, &q, &r, &s).unwrap();
    let BisectorShape::Parabola(arc) = shape else {
        panic!("Expected a parabolic arc, got {:?}", shape);
    };
    assert_eq!(arc.focus(), Point2::new(1.0, 5.0));
    let d = arc.directrix();
    assert_eq!((d.a, d.c), (0.0, 0.0), "Directrix should be y = 0");
    assert_eq!(arc.source(), c.vertex(&p, &q, &r).unwrap());
    assert_eq!(arc.target(), c.vertex(&q, &p, &s).unwrap());
    assert!((arc.source().x - 2.0).abs() < 1e-9 && (arc.source().y - 2.6).abs() < 1e-9);
    assert!((arc.target().x - 0.25).abs() < 1e-9 && (arc.target().y - 2.55625).abs() < 1e-9);

    for pt in arc.generate_points(32) {
        let to_focus = (pt.x - 1.0).hypot(pt.y - 5.0);
        assert!((to_focus - pt.y.abs()).abs() < 1e-9);
    }
}

#[test]
fn test_scenario_endpoint_gives_straight_segment() {
    let c = Constructions::new();
    let p = Site::point(0.0, 0.0);
    let q = seg([0.0, 0.0], [4.0, 0.0]);
    let r = Site::point(-2.0, 2.0);
    let s = Site::point(-2.0, -2.0);

    let shape = c.bisector_segment(&p, &q, &r, &s).unwrap();
    assert_eq!(shape, BisectorShape::Segment(Segment2::new(Point2::new(0.0, 2.0), Point2::new(0.0, -2.0))));

    let swapped = c.bisector_segment(&q, &p, &s, &r).unwrap();
    assert_eq!(swapped, BisectorShape::Segment(Segment2::new(Point2::new(0.0, -2.0), Point2::new(0.0, 2.0))));
}

#[test]
fn test_point_segment_order_only_flips_orientation() {
    let c = Constructions::new();
    let p = Site::point(1.0, 5.0);
    let q = seg([0.0, 0.0], [4.0, 0.0]);
    let r = Site::point(3.0, 5.0);
    let s = Site::point(-0.5, 5.0);

    let (BisectorShape::Parabola(a), BisectorShape::Parabola(b)) =
        (c.bisector_segment(&p, &q, &r, &s).unwrap(), c.bisector_segment(&q, &p, &s, &r).unwrap())
    else {
        panic!("Both orders should give a parabolic arc");
    };
    assert_eq!(a.focus(), b.focus());
    assert_eq!(a.directrix(), b.directrix());
    assert_eq!((a.source(), a.target()), (b.target(), b.source()));
}

#[test]
fn test_bisector_segment_endpoints_random_points() {
    let c = Constructions::new();
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..200 {
        let (a, b, r) = random_ccw_triangle(&mut rng);
        // Mirror r across ab to get a site on the other side.
        let l = Line2::through(&a, &b);
        let foot = l.projection(&r);
        let s = Point2::new(2.0 * foot.x - r.x + 1.0, 2.0 * foot.y - r.y);
        if orient(&b, &a, &s) <= 10.0 {
            continue;
        }

        let sites = [Site::Point(a), Site::Point(b), Site::Point(r), Site::Point(s)];
        let shape = c.bisector_segment(&sites[0], &sites[1], &sites[2], &sites[3]).unwrap();
        let v1 = c.vertex(&sites[0], &sites[1], &sites[2]).unwrap();
        let v2 = c.vertex(&sites[1], &sites[0], &sites[3]).unwrap();
        assert_eq!(shape, BisectorShape::Segment(Segment2::new(v1, v2)));
    }
}

#[test]
fn test_bisector_segment_of_two_segments_is_straight() {
    let c = Constructions::new();
    // Corridor between two horizontal segments, closed by points on each side.
    let bottom = seg([-10.0, 0.0], [10.0, 0.0]);
    let top = seg([10.0, 4.0], [-10.0, 4.0]);
    let left = Site::point(-1.0, 1.0);
    let right = Site::point(1.0, 1.0);

    let shape = c.bisector_segment(&bottom, &top, &right, &left).unwrap();
    let BisectorShape::Segment(edge) = shape else {
        panic!("Expected a straight edge between parallel segments");
    };
    assert!((edge.source.y - 2.0).abs() < 1e-9);
    assert!((edge.target.y - 2.0).abs() < 1e-9);
    assert!(edge.source.x > edge.target.x);
}

#[test]
fn test_bisector_of_two_segments_rejected() {
    let c = Constructions::new();
    let a = seg([0.0, 0.0], [1.0, 0.0]);
    let b = seg([0.0, 2.0], [1.0, 2.0]);
    assert!(matches!(c.bisector_line(&a, &b), Err(ConstructionError::Precondition(_))));
}

#[test]
fn test_degenerate_triple_propagates_solver_failure() {
    let c = Constructions::new();
    let p = Site::point(0.0, 0.0);
    let q = Site::point(1.0, 0.0);
    let r = Site::point(2.0, 0.0);
    assert_eq!(c.vertex(&p, &q, &r), Err(ConstructionError::NoEquidistantPoint));
    assert_eq!(c.bisector_ray(&p, &q, &r), Err(ConstructionError::NoEquidistantPoint));
    assert_eq!(c.bisector_segment(&p, &q, &r, &r), Err(ConstructionError::NoEquidistantPoint));
}
