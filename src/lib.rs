//! # segvoro
//!
//! `segvoro` computes the geometry of segment Voronoi diagrams in Rust, and can be
//! compiled to WebAssembly (WASM). Sites are points or line segments; given which
//! sites are adjacent, it builds the concrete vertices and edges of the diagram.
//!
//! ## Features
//!
//! - **Vertices and circles**: the point equidistant from any three sites, for every
//!   mix of points and segments, including points that are segment endpoints.
//! - **Bisectors**: unbounded lines, rays and bounded edges. Edges between a point
//!   and a segment are parabolic arcs unless the point is an endpoint of the segment.
//! - **Pluggable kernel**: constructions are generic over a [`Kernel`] bundling the
//!   exact same-point predicate, the vertex solver and the arc builder.
//! - **Parallel batches**: many edges can be constructed at once with `rayon`.
//!
//! ## Example
//!
//! ```
//! use segvoro::{BisectorShape, Constructions, Site};
//!
//! let c = Constructions::new();
//! let p = Site::point(1.0, 5.0);
//! let q = Site::segment([0.0, 0.0], [4.0, 0.0]).unwrap();
//! let edge = c.bisector_segment(&p, &q, &Site::point(3.0, 5.0), &Site::point(-0.5, 5.0)).unwrap();
//! assert!(matches!(edge, BisectorShape::Parabola(_)));
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`Constructions`] struct.

mod batch;
mod constructions;
mod error;
pub mod geometries;
mod kernel;
mod parabola;
mod site;
mod vertex;
pub mod wasm;

pub use batch::EdgeQuery;
pub use constructions::BisectorShape;
pub use constructions::Constructions;
pub use error::ConstructionError;
pub use geometries::{Circle2, Direction2, Line2, Point2, Ray2, Segment2};
pub use kernel::FloatKernel;
pub use kernel::Kernel;
pub use parabola::Parabola;
pub use parabola::ParabolaSegment;
pub use site::Site;
pub use vertex::VoronoiVertex;
pub use vertex::DEFAULT_TOLERANCE;
