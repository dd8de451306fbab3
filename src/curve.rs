use crate::{error::SplineError, knots::Knots, vertex::Vec2};

/// Parametric curve evaluated over the domain spanned by its knots.
pub trait Curve2d {
    fn knots(&self) -> &Knots;

    /// Point at curve parameter `t`. Parameters outside of the domain are reported, not clamped.
    fn at(&self, t: f64) -> Result<Vec2, SplineError>;

    /// Derivative with respect to curve parameter `t`.
    fn tangent_at(&self, t: f64) -> Result<Vec2, SplineError>;

    /// `(t_start, t_end)` of the curve.
    fn domain(&self) -> (f64, f64) {
        (self.knots().t_start(), self.knots().t_end())
    }

    /// `steps + 1` points evenly spaced in parameter, first and last exactly at domain bounds.
    /// # Example
    /// ```
    /// use cubic_curve::{Curve2d, HermiteSpline, Vec2};
    ///
    /// let spline = HermiteSpline::catmull_rom(vec![], vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0)]).unwrap();
    /// let points = spline.sample(4).unwrap();
    ///
    /// assert_eq!(5, points.len());
    /// assert_eq!(Vec2::new(2.0, 2.0), points[4]);
    /// ```
    fn sample(&self, steps: usize) -> Result<Vec<Vec2>, SplineError> {
        let (start, end) = self.domain();
        if steps == 0 {
            return Ok(vec![self.at(start)?]);
        }
        let step = (end - start) / steps as f64;
        (0..=steps)
            .map(|i| if i == steps { end } else { start + step * i as f64 })
            .map(|t| self.at(t))
            .collect()
    }
}
