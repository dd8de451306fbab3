//! Piecewise cubic parametric curves through 2D vertices.
//! Tangents at the vertices are given explicitly or derived by a [TangentFinder]:
//! Cardinal / Catmull-Rom (local) or natural (global, second derivative continuous).
//! Knots are uniform (`0, 1, 2, ...`) or an explicit strictly increasing sequence.
//!
//! # Example
//! ```
//! use cubic_curve::{Curve2d, HermiteSpline, Vec2};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let positions = vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(1.0, 1.0),
//!     Vec2::new(3.0, 1.0),
//! ];
//! let spline = HermiteSpline::catmull_rom(vec![0.0, 1.0, 3.0], positions).unwrap();
//!
//! let point = spline.at(1.0).unwrap();
//! assert_approx_eq!(1.0, point.x, 1e-12);
//! assert_approx_eq!(1.0, point.y, 1e-12);
//! assert!(spline.at(3.5).is_err());
//! ```

mod canonical;
mod curve;
mod error;
mod hermite;
mod knots;
mod polynomial;
mod tangent;
mod vertex;

pub use canonical::CanonicalSpline;
pub use curve::Curve2d;
pub use error::SplineError;
pub use hermite::HermiteSpline;
pub use knots::Knots;
pub use polynomial::{Cubic2d, CubicPolynomial};
pub use tangent::{CardinalTangents, NaturalTangents, TangentFinder, Tangents};
pub use vertex::{Vec2, Vertex};
