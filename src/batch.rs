use crate::constructions::{BisectorShape, Constructions};
use crate::error::ConstructionError;
use crate::kernel::Kernel;
use crate::site::Site;
use rayon::prelude::*;

/// An edge to construct, given by indices into a site list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeQuery {
    /// Unbounded bisector of two sites.
    Line(usize, usize),
    /// Bisector of the first two sites from the vertex shared with the third.
    Ray(usize, usize, usize),
    /// Bisector of the first two sites between the vertices shared with the third and fourth.
    Segment(usize, usize, usize, usize),
}

impl<K: Kernel> Constructions<K> {
    /// Constructs a single edge.
    pub fn edge(&self, sites: &[Site], query: &EdgeQuery) -> Result<BisectorShape, ConstructionError> {
        let site = |i: usize| sites.get(i).ok_or(ConstructionError::UnknownSite(i));
        match *query {
            EdgeQuery::Line(p, q) => Ok(BisectorShape::Line(self.bisector_line(site(p)?, site(q)?)?)),
            EdgeQuery::Ray(p, q, r) => Ok(BisectorShape::Ray(self.bisector_ray(site(p)?, site(q)?, site(r)?)?)),
            EdgeQuery::Segment(p, q, r, s) => self.bisector_segment(site(p)?, site(q)?, site(r)?, site(s)?),
        }
    }

    /// Constructs many edges in parallel. Results are in query order.
    pub fn edges(&self, sites: &[Site], queries: &[EdgeQuery]) -> Vec<Result<BisectorShape, ConstructionError>> {
        queries.par_iter().map(|q| self.edge(sites, q)).collect()
    }

    /// Applies `f` to every constructed edge in parallel, without keeping the shapes.
    pub fn map_edges<F, R>(&self, sites: &[Site], queries: &[EdgeQuery], f: F) -> Vec<R>
    where
        F: Fn(Result<BisectorShape, ConstructionError>) -> R + Sync + Send,
        R: Send,
    {
        queries.par_iter().map(|q| f(self.edge(sites, q))).collect()
    }
}
