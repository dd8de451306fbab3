use log::debug;

use crate::{
    curve::Curve2d,
    error::SplineError,
    knots::Knots,
    polynomial::Cubic2d,
    vertex::Vec2,
};

/// Piecewise cubic curve in power basis. Segment `i` is evaluated with local
/// parameter `u` in `[0, 1]` over knot interval `[knot(i), knot(i + 1)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalSpline {
    cubics: Vec<Cubic2d>,
    knots: Knots,
}

impl CanonicalSpline {
    /// Creates spline from segment cubics. Empty `knots` means uniform parametrization,
    /// otherwise exactly one knot more than there are cubics is required.
    /// # Example
    /// ```
    /// use cubic_curve::{CanonicalSpline, Cubic2d, CubicPolynomial, Curve2d};
    ///
    /// let line = Cubic2d::new(
    ///     CubicPolynomial::new(0.0, 1.0, 0.0, 0.0),
    ///     CubicPolynomial::new(0.0, 2.0, 0.0, 0.0),
    /// );
    /// let spline = CanonicalSpline::new(vec![line], vec![]).unwrap();
    /// assert_eq!(1.0, spline.at(0.5).unwrap().y);
    ///
    /// assert!(CanonicalSpline::new(vec![line], vec![0.0, 1.0, 2.0]).is_err());
    /// ```
    pub fn new(cubics: Vec<Cubic2d>, knots: Vec<f64>) -> Result<Self, SplineError> {
        let knots = if knots.is_empty() {
            Knots::uniform(if cubics.is_empty() { 0 } else { cubics.len() + 1 })
        } else if knots.len() != cubics.len() + 1 {
            return Err(SplineError::KnotCountMismatch { knots: knots.len(), segments: cubics.len() });
        } else {
            Knots::non_uniform(knots)?
        };
        Ok(CanonicalSpline { cubics, knots })
    }

    /// Callers guarantee `knots` has one entry more than `cubics`.
    pub(crate) fn from_parts(cubics: Vec<Cubic2d>, knots: Knots) -> Self {
        debug!("canonical spline with {} segments", cubics.len());
        CanonicalSpline { cubics, knots }
    }

    pub fn cubics(&self) -> &[Cubic2d] {
        &self.cubics
    }

    pub fn segment_count(&self) -> usize {
        self.cubics.len()
    }

    /// Evaluates all `ts` or fails if any of them is out of range.
    /// Sorted input is located segment by segment without searching.
    pub fn batch_at(&self, ts: &[f64]) -> Result<Vec<Vec2>, SplineError> {
        if self.cubics.is_empty() {
            return Err(SplineError::Empty);
        }
        if let Some(t) = ts.iter().find(|t| !self.knots.is_in_range(**t)) {
            return Err(self.knots.out_of_domain(*t));
        }

        let mut results = Vec::with_capacity(ts.len());
        let mut segment = 0;
        for t in ts {
            let (index, u) = self.knots.locate_with_hint(segment, *t)?;
            segment = index;
            results.push(self.cubics[index].at(u));
        }
        Ok(results)
    }

    /// Evaluates curve also outside of its domain by continuing the first or last cubic.
    pub fn extrapolate(&self, t: f64) -> Result<Vec2, SplineError> {
        let (segment, u) = self.extrapolation_parameter(t)?;
        Ok(self.cubics[segment].at(u))
    }

    fn extrapolation_parameter(&self, t: f64) -> Result<(usize, f64), SplineError> {
        let segments = self.cubics.len();
        if segments == 0 {
            return Err(SplineError::Empty);
        }
        let last = segments - 1;
        if t < self.knots.t_start() {
            Ok((0, (t - self.knots.t_start()) / self.knots.span(0)))
        } else if t > self.knots.t_end() {
            Ok((last, 1.0 + (t - self.knots.t_end()) / self.knots.span(last)))
        } else {
            self.knots.locate(t)
        }
    }
}

impl Curve2d for CanonicalSpline {
    fn knots(&self) -> &Knots {
        &self.knots
    }

    fn at(&self, t: f64) -> Result<Vec2, SplineError> {
        let (segment, u) = self.knots.locate(t)?;
        Ok(self.cubics[segment].at(u))
    }

    fn tangent_at(&self, t: f64) -> Result<Vec2, SplineError> {
        let (segment, u) = self.knots.locate(t)?;
        Ok(self.cubics[segment].derivative_at(u) / self.knots.span(segment))
    }
}
