use thiserror::Error;

/// Errors raised by the constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The caller broke a contract, e.g. asked for the bisector line of two segments.
    /// Checks that need a geometric predicate only run with debug assertions enabled.
    #[error("precondition violated: {0}")]
    Precondition(&'static str),

    #[error("site index {0} out of range")]
    UnknownSite(usize),

    #[error("the three sites have no common equidistant point")]
    NoEquidistantPoint,

    #[error("segment endpoints coincide")]
    DegenerateSegment,

    #[error("parabola directrix is degenerate or passes through the focus")]
    DegenerateDirectrix,
}

/// Checks a caller contract in debug builds and returns
/// [`ConstructionError::Precondition`] when it does not hold.
/// The condition is not evaluated in release builds.
macro_rules! contract {
    ($cond:expr, $what:literal) => {
        if cfg!(debug_assertions) && !($cond) {
            return Err($crate::error::ConstructionError::Precondition($what));
        }
    };
}

pub(crate) use contract;
