use plotters::prelude::*;
use segvoro::{BisectorShape, Constructions, EdgeQuery, Point2, Site};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A horizontal segment with points above and below it, plus the segment's
    // own endpoints as point sites.
    let sites = vec![
        Site::segment([20.0, 50.0], [80.0, 50.0])?, // 0
        Site::point(20.0, 50.0),                    // 1
        Site::point(80.0, 50.0),                    // 2
        Site::point(40.0, 80.0),                    // 3
        Site::point(65.0, 75.0),                    // 4
        Site::point(50.0, 20.0),                    // 5
    ];

    let queries = [
        // Arcs between interior points and the segment.
        EdgeQuery::Segment(3, 0, 1, 4),
        EdgeQuery::Segment(4, 0, 3, 2),
        EdgeQuery::Segment(5, 0, 2, 1),
        // Straight edges at the segment endpoints.
        EdgeQuery::Segment(1, 0, 5, 3),
        EdgeQuery::Segment(2, 0, 4, 5),
        EdgeQuery::Segment(3, 4, 0, 2),
    ];

    run_example("bisectors.svg", &sites, &queries)
}

fn run_example(filename: &str, sites: &[Site], queries: &[EdgeQuery]) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    let c = Constructions::new();
    let to_xy = |p: &Point2| (p.x, p.y);

    // Draw edges
    for (query, shape) in queries.iter().zip(c.edges(sites, queries)) {
        let shape = match shape {
            Ok(shape) => shape,
            Err(e) => {
                println!("Skipping {:?}: {}", query, e);
                continue;
            }
        };
        let color = match shape {
            BisectorShape::Parabola(_) => RED,
            _ => BLUE,
        };
        let path: Vec<(f64, f64)> = shape.to_polyline(150.0, 64).iter().map(to_xy).collect();
        chart.draw_series(std::iter::once(PathElement::new(path, color.stroke_width(2))))?;
    }

    // Draw sites
    for site in sites {
        match site {
            Site::Point(p) => {
                chart.draw_series(std::iter::once(Circle::new(to_xy(p), 4, BLACK.filled())))?;
            }
            Site::Segment(s) => {
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![to_xy(&s.source), to_xy(&s.target)],
                    BLACK.stroke_width(3),
                )))?;
            }
        }
    }

    root.present()?;
    println!("Output saved to {}", filename);
    Ok(())
}
