use thiserror::Error;

/// Errors reported while building or evaluating a spline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Explicit knot sequence does not have one entry more than there are segments.
    #[error("expected 0 or {} knots for {segments} segments, got {knots}", .segments + 1)]
    KnotCountMismatch { knots: usize, segments: usize },

    /// Knot value is not finite or does not exceed its predecessor.
    #[error("knot at index {index} is not finite or does not increase")]
    InvalidKnots { index: usize },

    /// Number of vertices does not match number of knots.
    #[error("{vertices} vertices can not be placed on {knots} knots")]
    VertexKnotMismatch { vertices: usize, knots: usize },

    /// Evaluation parameter lies outside of the curve domain.
    #[error("t = {t} is out of range [{start}, {end}]")]
    OutOfDomain { t: f64, start: f64, end: f64 },

    /// Curve has nothing to evaluate.
    #[error("spline is empty")]
    Empty,

    /// Vertex or knot index past the end.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
