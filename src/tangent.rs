use std::fmt::Debug;

use log::debug;

use crate::{error::SplineError, knots::Knots, vertex::Vec2};

/// Entry and exit tangent of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tangents {
    pub entry: Vec2,
    pub exit: Vec2,
}

impl Tangents {
    pub fn zero() -> Self {
        Tangents { entry: Vec2::zeros(), exit: Vec2::zeros() }
    }

    fn single(tangent: Vec2) -> Self {
        Tangents { entry: tangent, exit: tangent }
    }
}

/// Strategy deriving vertex tangents from vertex positions and knot spacing.
///
/// Returned tangents are derivatives with respect to the curve parameter `t`,
/// one entry per position. Fewer than two positions produce zero tangents.
pub trait TangentFinder: Debug {
    fn find(&self, positions: &[Vec2], knots: &Knots) -> Result<Vec<Tangents>, SplineError>;
}

/// Cardinal spline tangents: `(1 - tension) / 2` times the chord between neighbours.
/// Catmull-Rom is the special case of tension 0.
///
/// For non-uniform knots entry and exit tangents of a vertex differ in length:
/// each is divided by the length of the segment it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardinalTangents {
    tension: f64,
}

impl CardinalTangents {
    pub fn new(tension: f64) -> Self {
        CardinalTangents { tension }
    }

    pub fn catmull_rom() -> Self {
        CardinalTangents::new(0.0)
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }
}

impl TangentFinder for CardinalTangents {
    fn find(&self, positions: &[Vec2], knots: &Knots) -> Result<Vec<Tangents>, SplineError> {
        let n = check_positions(positions, knots)?;
        if n < 2 {
            return Ok(vec![Tangents::zero(); n]);
        }

        // first and last vertex use their only neighbour
        let scale = (1.0 - self.tension) / 2.0;
        let mut tangents: Vec<Tangents> = (0..n)
            .map(|i| {
                let before = &positions[i.saturating_sub(1)];
                let after = &positions[(i + 1).min(n - 1)];
                Tangents::single((after - before) * scale)
            })
            .collect();

        if !knots.is_uniform() {
            for segment in 0..n - 1 {
                let length = knots.span(segment);
                tangents[segment].exit /= length;
                tangents[segment + 1].entry /= length;
            }
        }

        debug!("cardinal tangents (tension {}) for {} vertices", self.tension, n);
        Ok(tangents)
    }
}

/// Natural spline tangents: second derivative continuous at every interior vertex
/// and zero at both ends. Tangents are solved globally, one linear system per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NaturalTangents;

impl TangentFinder for NaturalTangents {
    fn find(&self, positions: &[Vec2], knots: &Knots) -> Result<Vec<Tangents>, SplineError> {
        let n = check_positions(positions, knots)?;
        if n < 2 {
            return Ok(vec![Tangents::zero(); n]);
        }

        let lengths: Vec<f64> = (0..n - 1).map(|segment| knots.span(segment)).collect();

        let mut tangents = vec![Tangents::zero(); n];
        for axis in 0..positions[0].len() {
            let coordinates: Vec<f64> = positions.iter().map(|p| p[axis]).collect();
            let solved = solve_natural(&coordinates, &lengths);
            for (tangent, value) in tangents.iter_mut().zip(solved) {
                tangent.entry[axis] = value;
                tangent.exit[axis] = value;
            }
        }

        debug!("natural tangents for {} vertices, uniform: {}", n, knots.is_uniform());
        Ok(tangents)
    }
}

fn check_positions(positions: &[Vec2], knots: &Knots) -> Result<usize, SplineError> {
    if positions.len() != knots.knot_count() {
        return Err(SplineError::VertexKnotMismatch { vertices: positions.len(), knots: knots.knot_count() });
    }
    Ok(positions.len())
}

/// Solves the natural spline system for tangents `m` of one axis, `p.len() >= 2`,
/// `t[i]` is the length of segment `i` (all 1 for uniform knots).
///
/// ```text
/// 2     1                         = 3 (p1 - p0) / t0
/// t1    2(t1 + t0)   t0           = 3 (p2 / s + (s - 1 / s) p1 - s p0),  s = t1 / t0
///       t2           2(t2 + t1) t1 = ...
///                         ...
///                         1     2 = 3 (p(n-1) - p(n-2)) / t(n-2)
/// ```
///
/// Uniform knots reduce this to rows `[2 1]`, `[1 4 1]`, `[1 2]`. Sub-diagonal is removed by
/// forward elimination, leaving pivots `r`, then tangents follow by back substitution.
fn solve_natural(p: &[f64], t: &[f64]) -> Vec<f64> {
    let n = p.len();
    // coefficient right of the diagonal in row i
    let upper = |i: usize| if i == 0 { 1.0 } else { t[i - 1] };

    let mut r = vec![0.0; n];
    let mut m = vec![0.0; n];

    r[0] = 2.0;
    m[0] = 3.0 * (p[1] - p[0]) / t[0];
    for i in 1..n - 1 {
        let scale = t[i] / r[i - 1];
        let s = t[i] / t[i - 1];
        r[i] = 2.0 * (t[i] + t[i - 1]) - scale * upper(i - 1);
        m[i] = 3.0 * (p[i + 1] / s + (s - 1.0 / s) * p[i] - s * p[i - 1]) - scale * m[i - 1];
    }
    let scale = 1.0 / r[n - 2];
    r[n - 1] = 2.0 - scale * upper(n - 2);
    m[n - 1] = 3.0 * (p[n - 1] - p[n - 2]) / t[n - 2] - scale * m[n - 2];

    m[n - 1] /= r[n - 1];
    for i in (0..n - 1).rev() {
        m[i] = (m[i] - upper(i) * m[i + 1]) / r[i];
    }
    m
}
