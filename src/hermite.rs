use log::debug;

use crate::{
    canonical::CanonicalSpline,
    curve::Curve2d,
    error::SplineError,
    knots::Knots,
    polynomial::Cubic2d,
    tangent::{CardinalTangents, NaturalTangents, TangentFinder},
    vertex::{Vec2, Vertex},
};

/// Cubic Hermite spline through vertices, one vertex per knot.
///
/// Tangents are either given explicitly with the vertices or derived by a
/// [TangentFinder]. Every mutation recomputes tangents and the canonical form,
/// so evaluation always reflects the current vertices and knots.
///
/// # Example
/// ```
/// use cubic_curve::{Curve2d, HermiteSpline, Vec2};
/// use assert_approx_eq::assert_approx_eq;
///
/// let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(3.0, 1.0)];
/// let spline = HermiteSpline::natural(vec![], positions).unwrap();
///
/// let middle = spline.at(1.0).unwrap();
/// assert_approx_eq!(1.0, middle.x, 1e-12);
/// assert_approx_eq!(2.0, middle.y, 1e-12);
/// assert!(spline.at(2.5).is_err());
/// ```
#[derive(Debug)]
pub struct HermiteSpline {
    vertices: Vec<Vertex>,
    knots: Knots,
    tangent_finder: Option<Box<dyn TangentFinder>>,
    canonical: CanonicalSpline,
}

impl HermiteSpline {
    /// Spline with explicit tangents. Empty `knots` means uniform parametrization,
    /// otherwise one knot per vertex is required.
    pub fn new(knots: Vec<f64>, vertices: Vec<Vertex>) -> Result<Self, SplineError> {
        let knots = Knots::for_vertices(knots, vertices.len())?;
        Self::build(knots, None, vertices)
    }

    /// Spline whose tangents are derived by `tangent_finder` from `positions`.
    pub fn with_tangent_finder<F>(knots: Vec<f64>, tangent_finder: F, positions: Vec<Vec2>) -> Result<Self, SplineError>
    where
        F: TangentFinder + 'static,
    {
        let knots = Knots::for_vertices(knots, positions.len())?;
        let vertices = positions.into_iter().map(Vertex::new).collect();
        Self::build(knots, Some(Box::new(tangent_finder)), vertices)
    }

    pub fn cardinal(knots: Vec<f64>, tension: f64, positions: Vec<Vec2>) -> Result<Self, SplineError> {
        Self::with_tangent_finder(knots, CardinalTangents::new(tension), positions)
    }

    pub fn catmull_rom(knots: Vec<f64>, positions: Vec<Vec2>) -> Result<Self, SplineError> {
        Self::with_tangent_finder(knots, CardinalTangents::catmull_rom(), positions)
    }

    pub fn natural(knots: Vec<f64>, positions: Vec<Vec2>) -> Result<Self, SplineError> {
        Self::with_tangent_finder(knots, NaturalTangents, positions)
    }

    fn build(
        knots: Knots,
        tangent_finder: Option<Box<dyn TangentFinder>>,
        mut vertices: Vec<Vertex>,
    ) -> Result<Self, SplineError> {
        let canonical = prepare(&mut vertices, &knots, tangent_finder.as_deref())?;
        Ok(HermiteSpline { vertices, knots, tangent_finder, canonical })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn tangent_finder(&self) -> Option<&dyn TangentFinder> {
        self.tangent_finder.as_deref()
    }

    /// Power basis form of the current vertices and tangents.
    pub fn canonical(&self) -> &CanonicalSpline {
        &self.canonical
    }

    pub fn into_canonical(self) -> CanonicalSpline {
        self.canonical
    }

    /// Recomputes tangents (if a tangent finder is set) and the canonical form.
    pub fn refresh(&mut self) -> Result<(), SplineError> {
        self.apply(|_, _| Ok(()))
    }

    /// Replaces vertex `index`. With a tangent finder set only its position matters.
    pub fn update_vertex(&mut self, index: usize, vertex: Vertex) -> Result<(), SplineError> {
        self.apply(|vertices, _| {
            let len = vertices.len();
            let slot = vertices.get_mut(index).ok_or(SplineError::IndexOutOfRange { index, len })?;
            *slot = vertex;
            Ok(())
        })
    }

    /// Appends vertex to a uniformly parametrized spline.
    pub fn push_vertex(&mut self, vertex: Vertex) -> Result<(), SplineError> {
        self.apply(|vertices, knots| {
            knots.push(None)?;
            vertices.push(vertex);
            Ok(())
        })
    }

    /// Appends vertex at knot value `t` to a non-uniformly parametrized spline.
    pub fn push_vertex_at(&mut self, t: f64, vertex: Vertex) -> Result<(), SplineError> {
        self.apply(|vertices, knots| {
            knots.push(Some(t))?;
            vertices.push(vertex);
            Ok(())
        })
    }

    /// Removes vertex `index` together with its knot.
    pub fn remove_vertex(&mut self, index: usize) -> Result<Vertex, SplineError> {
        let mut removed = None;
        self.apply(|vertices, knots| {
            knots.remove(index)?;
            removed = Some(vertices.remove(index));
            Ok(())
        })?;
        removed.ok_or(SplineError::IndexOutOfRange { index, len: self.vertices.len() })
    }

    /// Replaces knots, empty `knots` switches to uniform parametrization.
    pub fn set_knots(&mut self, knots: Vec<f64>) -> Result<(), SplineError> {
        let knots = Knots::for_vertices(knots, self.vertices.len())?;
        self.apply(|_, current| {
            *current = knots;
            Ok(())
        })
    }

    pub fn set_tangent_finder<F>(&mut self, tangent_finder: F) -> Result<(), SplineError>
    where
        F: TangentFinder + 'static,
    {
        let previous = self.tangent_finder.replace(Box::new(tangent_finder));
        if let Err(error) = self.refresh() {
            self.tangent_finder = previous;
            return Err(error);
        }
        Ok(())
    }

    /// Detaches tangent finder, current tangents become explicit.
    pub fn clear_tangent_finder(&mut self) {
        self.tangent_finder = None;
    }

    /// Evaluates all `ts` or fails if any of them is out of range.
    pub fn batch_at(&self, ts: &[f64]) -> Result<Vec<Vec2>, SplineError> {
        if let [vertex] = self.vertices.as_slice() {
            return ts
                .iter()
                .map(|t| self.single_vertex(*t).map(|_| *vertex.position()))
                .collect();
        }
        self.canonical.batch_at(ts)
    }

    /// Evaluates curve also outside of its domain by continuing the first or last segment.
    /// A single vertex is continued along its exit tangent.
    pub fn extrapolate(&self, t: f64) -> Result<Vec2, SplineError> {
        if let [vertex] = self.vertices.as_slice() {
            let offset = t - self.knots.t_start();
            return Ok(vertex.position() + vertex.exit_tangent() * offset);
        }
        self.canonical.extrapolate(t)
    }

    /// Applies `change` to copies of vertices and knots, commits only if tangents
    /// and canonical form can be rebuilt from the result.
    fn apply<F>(&mut self, change: F) -> Result<(), SplineError>
    where
        F: FnOnce(&mut Vec<Vertex>, &mut Knots) -> Result<(), SplineError>,
    {
        let mut vertices = self.vertices.clone();
        let mut knots = self.knots.clone();
        change(&mut vertices, &mut knots)?;

        let canonical = prepare(&mut vertices, &knots, self.tangent_finder.as_deref())?;
        self.vertices = vertices;
        self.knots = knots;
        self.canonical = canonical;
        Ok(())
    }
}

impl Curve2d for HermiteSpline {
    fn knots(&self) -> &Knots {
        &self.knots
    }

    fn at(&self, t: f64) -> Result<Vec2, SplineError> {
        match self.single_vertex(t)? {
            Some(vertex) => Ok(*vertex.position()),
            None => self.canonical.at(t),
        }
    }

    fn tangent_at(&self, t: f64) -> Result<Vec2, SplineError> {
        match self.single_vertex(t)? {
            Some(vertex) => Ok(*vertex.exit_tangent()),
            None => self.canonical.tangent_at(t),
        }
    }
}

impl HermiteSpline {
    // curve of one vertex has the one point domain [t0, t0]
    fn single_vertex(&self, t: f64) -> Result<Option<&Vertex>, SplineError> {
        match self.vertices.as_slice() {
            [vertex] if self.knots.is_in_range(t) => Ok(Some(vertex)),
            [_] => Err(self.knots.out_of_domain(t)),
            _ => Ok(None),
        }
    }
}

fn prepare(
    vertices: &mut [Vertex],
    knots: &Knots,
    tangent_finder: Option<&dyn TangentFinder>,
) -> Result<CanonicalSpline, SplineError> {
    if vertices.len() != knots.knot_count() {
        return Err(SplineError::VertexKnotMismatch { vertices: vertices.len(), knots: knots.knot_count() });
    }

    if let Some(tangent_finder) = tangent_finder {
        let positions: Vec<Vec2> = vertices.iter().map(|v| *v.position()).collect();
        let tangents = tangent_finder.find(&positions, knots)?;
        for (vertex, tangents) in vertices.iter_mut().zip(tangents) {
            vertex.set_tangents(tangents.entry, tangents.exit);
        }
        debug!("tangents recomputed for {} vertices", vertices.len());
    }

    Ok(CanonicalSpline::from_parts(to_cubics(vertices, knots), knots.clone()))
}

/// Hermite to power basis per segment. Tangents are derivatives with respect to `t`,
/// the segment length rescales them to the local parameter `u`.
fn to_cubics(vertices: &[Vertex], knots: &Knots) -> Vec<Cubic2d> {
    vertices
        .windows(2)
        .enumerate()
        .map(|(segment, pair)| {
            let length = knots.span(segment);
            Cubic2d::from_hermite(
                pair[0].position(),
                &(pair[0].exit_tangent() * length),
                pair[1].position(),
                &(pair[1].entry_tangent() * length),
            )
        })
        .collect()
}
