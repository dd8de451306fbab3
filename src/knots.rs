use log::trace;

use crate::error::SplineError;

/// Knots describe parameter values at which curve segments meet.
/// - uniform - knot `i` has value `i`, every segment has length 1,
/// - non-uniform - explicit strictly increasing sequence `t0 < t1 < ... < t(n-1)`.
///
/// Segment `i` spans `[knot(i), knot(i + 1)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Knots {
    spacing: Spacing,
}

#[derive(Debug, Clone, PartialEq)]
enum Spacing {
    Uniform { count: usize },
    NonUniform(Vec<f64>),
}

impl Knots {
    /// Uniform knots `0, 1, ..., count - 1`.
    pub fn uniform(count: usize) -> Self {
        Knots { spacing: Spacing::Uniform { count } }
    }

    /// Explicit knot values.
    /// # Example
    /// ```
    /// use cubic_curve::Knots;
    ///
    /// let knots = Knots::non_uniform(vec![0.0, 0.5, 2.0]).unwrap();
    /// assert_eq!(2, knots.segment_count());
    /// assert_eq!(Some(1.5), knots.segment_length(1));
    /// ```
    /// # Errors
    /// Error is returned when a value is not finite, does not exceed the one before it
    /// or lies so far from it that the segment length overflows.
    /// ```
    /// use cubic_curve::Knots;
    ///
    /// assert!(Knots::non_uniform(vec![0.0, 2.0, 1.0]).is_err());
    /// assert!(Knots::non_uniform(vec![0.0, 1.0, 1.0]).is_err());
    /// ```
    pub fn non_uniform(values: Vec<f64>) -> Result<Self, SplineError> {
        for (index, value) in values.iter().enumerate() {
            let previous = index.checked_sub(1).map(|before| values[before]);
            if !follows(previous, *value) {
                return Err(SplineError::InvalidKnots { index });
            }
        }
        Ok(Knots { spacing: Spacing::NonUniform(values) })
    }

    /// Builds knots for `count` vertices: empty `values` means uniform spacing.
    pub fn for_vertices(values: Vec<f64>, count: usize) -> Result<Self, SplineError> {
        if values.is_empty() {
            return Ok(Knots::uniform(count));
        }
        if values.len() != count {
            return Err(SplineError::VertexKnotMismatch { vertices: count, knots: values.len() });
        }
        Knots::non_uniform(values)
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self.spacing, Spacing::Uniform { .. })
    }

    pub fn knot_count(&self) -> usize {
        match &self.spacing {
            Spacing::Uniform { count } => *count,
            Spacing::NonUniform(values) => values.len(),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.knot_count().saturating_sub(1)
    }

    /// Explicit values, `None` for uniform knots.
    pub fn values(&self) -> Option<&[f64]> {
        match &self.spacing {
            Spacing::Uniform { .. } => None,
            Spacing::NonUniform(values) => Some(values),
        }
    }

    /// Parameter value of knot `index`, `None` past the last knot.
    pub fn knot(&self, index: usize) -> Option<f64> {
        match &self.spacing {
            Spacing::Uniform { count } => (index < *count).then_some(index as f64),
            Spacing::NonUniform(values) => values.get(index).copied(),
        }
    }

    /// Length of segment `segment`, always 1 for uniform knots. `None` past the last segment.
    pub fn segment_length(&self, segment: usize) -> Option<f64> {
        (segment < self.segment_count()).then(|| self.span(segment))
    }

    /// Length of a segment the caller knows to exist.
    pub(crate) fn span(&self, segment: usize) -> f64 {
        match &self.spacing {
            Spacing::Uniform { .. } => 1.0,
            Spacing::NonUniform(values) => values[segment + 1] - values[segment],
        }
    }

    pub fn t_start(&self) -> f64 {
        match &self.spacing {
            Spacing::Uniform { .. } => 0.0,
            Spacing::NonUniform(values) => values.first().copied().unwrap_or(0.0),
        }
    }

    pub fn t_end(&self) -> f64 {
        match &self.spacing {
            Spacing::Uniform { count } => count.saturating_sub(1) as f64,
            Spacing::NonUniform(values) => values.last().copied().unwrap_or(0.0),
        }
    }

    pub fn is_in_range(&self, t: f64) -> bool {
        self.knot_count() > 0 && self.t_start() <= t && t <= self.t_end()
    }

    /// Maps curve parameter `t` to segment index and local parameter `u` in `[0, 1]`.
    ///
    /// A `t` equal to an interior knot belongs to the earlier segment (`u = 1`),
    /// for uniform and non-uniform knots alike.
    /// # Example
    /// ```
    /// use cubic_curve::Knots;
    ///
    /// let knots = Knots::non_uniform(vec![0.0, 1.0, 3.0]).unwrap();
    /// assert_eq!((1, 0.25), knots.locate(1.5).unwrap());
    /// assert_eq!((0, 1.0), knots.locate(1.0).unwrap());
    /// ```
    pub fn locate(&self, t: f64) -> Result<(usize, f64), SplineError> {
        let segments = self.segment_count();
        if segments == 0 {
            return Err(SplineError::Empty);
        }
        if !self.is_in_range(t) {
            return Err(self.out_of_domain(t));
        }

        let located = match &self.spacing {
            Spacing::Uniform { .. } => {
                let index = t.trunc();
                if index > 0.0 && index == t {
                    // covers t == segments as well
                    (index as usize - 1, 1.0)
                } else {
                    (index as usize, t - index)
                }
            }
            Spacing::NonUniform(values) => {
                // first segment whose right knot is not below t
                let segment = values[1..].partition_point(|knot| *knot < t).min(segments - 1);
                (segment, self.local_parameter(values, segment, t))
            }
        };
        trace!("t = {} mapped to segment {} at u = {}", t, located.0, located.1);
        Ok(located)
    }

    /// Same as [Knots::locate] but tries segment `hint` and its successor first.
    pub fn locate_with_hint(&self, hint: usize, t: f64) -> Result<(usize, f64), SplineError> {
        if let Spacing::NonUniform(values) = &self.spacing {
            for segment in [hint, hint + 1] {
                if segment < self.segment_count() && self.owns(values, segment, t) {
                    return Ok((segment, self.local_parameter(values, segment, t)));
                }
            }
        }
        self.locate(t)
    }

    pub(crate) fn out_of_domain(&self, t: f64) -> SplineError {
        SplineError::OutOfDomain { t, start: self.t_start(), end: self.t_end() }
    }

    pub(crate) fn push(&mut self, t: Option<f64>) -> Result<(), SplineError> {
        let index = self.knot_count();
        match (&mut self.spacing, t) {
            (Spacing::Uniform { count }, None) => {
                *count += 1;
                Ok(())
            }
            (Spacing::NonUniform(values), Some(t)) if follows(values.last().copied(), t) => {
                values.push(t);
                Ok(())
            }
            _ => Err(SplineError::InvalidKnots { index }),
        }
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<(), SplineError> {
        let len = self.knot_count();
        if index >= len {
            return Err(SplineError::IndexOutOfRange { index, len });
        }
        match &mut self.spacing {
            Spacing::Uniform { count } => *count -= 1,
            Spacing::NonUniform(values) => {
                values.remove(index);
            }
        }
        Ok(())
    }

    fn owns(&self, values: &[f64], segment: usize, t: f64) -> bool {
        let starts_here = if segment == 0 { values[0] <= t } else { values[segment] < t };
        starts_here && t <= values[segment + 1]
    }

    fn local_parameter(&self, values: &[f64], segment: usize, t: f64) -> f64 {
        (t - values[segment]) / (values[segment + 1] - values[segment])
    }
}

// finite, above `previous` and at a representable distance from it
fn follows(previous: Option<f64>, value: f64) -> bool {
    value.is_finite()
        && previous.map_or(true, |previous| value > previous && (value - previous).is_finite())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_uniform() {
        let knots = Knots::uniform(4);

        assert!(knots.is_uniform());
        assert_eq!(4, knots.knot_count());
        assert_eq!(3, knots.segment_count());
        assert_eq!(Some(1.0), knots.segment_length(2));
        assert_eq!(None, knots.segment_length(3));
        assert_eq!(0.0, knots.t_start());
        assert_eq!(3.0, knots.t_end());
        assert_eq!(Some(2.0), knots.knot(2));
        assert_eq!(None, knots.knot(4));
        assert!(knots.values().is_none());
    }

    #[test]
    fn test_non_uniform() {
        let knots = Knots::non_uniform(vec![1.0, 1.5, 4.0]).unwrap();

        assert!(!knots.is_uniform());
        assert_eq!(3, knots.knot_count());
        assert_eq!(2, knots.segment_count());
        assert_eq!(Some(0.5), knots.segment_length(0));
        assert_eq!(Some(2.5), knots.segment_length(1));
        assert_eq!(None, knots.segment_length(2));
        assert_eq!(Some(1.5), knots.knot(1));
        assert_eq!(None, knots.knot(3));
        assert_eq!(1.0, knots.t_start());
        assert_eq!(4.0, knots.t_end());
        assert_eq!(Some(&[1.0, 1.5, 4.0][..]), knots.values());
    }

    #[test]
    fn test_segment_lengths_sum_to_domain() {
        let knots = Knots::non_uniform(vec![-2.0, -1.25, 0.0, 0.1, 7.3]).unwrap();
        let total: f64 = (0..knots.segment_count()).filter_map(|i| knots.segment_length(i)).sum();

        assert_approx_eq!(knots.t_end() - knots.t_start(), total, 1e-12);
    }

    #[test]
    fn test_empty_and_single() {
        let empty = Knots::uniform(0);
        assert_eq!(0, empty.segment_count());
        assert_eq!(0.0, empty.t_end());
        assert_eq!(Err(SplineError::Empty), empty.locate(0.0));

        let single = Knots::non_uniform(vec![2.0]).unwrap();
        assert_eq!(0, single.segment_count());
        assert_eq!(2.0, single.t_start());
        assert_eq!(2.0, single.t_end());
        assert!(single.is_in_range(2.0));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            Err(SplineError::InvalidKnots { index: 2 }),
            Knots::non_uniform(vec![0.0, 1.0, 0.5])
        );
        assert_eq!(
            Err(SplineError::InvalidKnots { index: 1 }),
            Knots::non_uniform(vec![0.0, f64::NAN, 2.0])
        );
        assert_eq!(
            Err(SplineError::InvalidKnots { index: 2 }),
            Knots::non_uniform(vec![0.0, 1.0, 1.0, 2.0])
        );
        assert_eq!(
            Err(SplineError::InvalidKnots { index: 1 }),
            Knots::non_uniform(vec![-f64::MAX, f64::MAX])
        );
    }

    #[test]
    fn test_for_vertices() {
        assert!(Knots::for_vertices(vec![], 3).unwrap().is_uniform());
        assert_eq!(3, Knots::for_vertices(vec![], 3).unwrap().knot_count());
        assert!(!Knots::for_vertices(vec![0.0, 2.0, 3.0], 3).unwrap().is_uniform());
        assert_eq!(
            Err(SplineError::VertexKnotMismatch { vertices: 2, knots: 3 }),
            Knots::for_vertices(vec![0.0, 2.0, 3.0], 2)
        );
    }

    #[test]
    fn test_locate_uniform() {
        let knots = Knots::uniform(4);

        assert_eq!((0, 0.0), knots.locate(0.0).unwrap());
        assert_eq!((0, 0.25), knots.locate(0.25).unwrap());
        assert_eq!((1, 0.5), knots.locate(1.5).unwrap());
        assert_eq!((1, 1.0), knots.locate(2.0).unwrap());
        assert_eq!((2, 1.0), knots.locate(3.0).unwrap());

        assert!(knots.locate(-0.001).is_err());
        assert!(knots.locate(3.001).is_err());
        assert!(knots.locate(f64::NAN).is_err());
    }

    #[test]
    fn test_locate_non_uniform() {
        let knots = Knots::non_uniform(vec![0.0, 1.0, 3.0, 7.0]).unwrap();

        assert_eq!((0, 0.0), knots.locate(0.0).unwrap());
        assert_eq!((0, 0.5), knots.locate(0.5).unwrap());
        assert_eq!((1, 0.5), knots.locate(2.0).unwrap());
        assert_eq!((2, 0.25), knots.locate(4.0).unwrap());
        assert_eq!((2, 1.0), knots.locate(7.0).unwrap());

        assert_eq!(
            Err(SplineError::OutOfDomain { t: -1.0, start: 0.0, end: 7.0 }),
            knots.locate(-1.0)
        );
        assert!(knots.locate(7.5).is_err());
    }

    #[test]
    fn test_interior_knot_belongs_to_earlier_segment() {
        let knots = Knots::non_uniform(vec![0.0, 1.0, 3.0, 7.0]).unwrap();

        for _ in 0..10 {
            assert_eq!((0, 1.0), knots.locate(1.0).unwrap());
            assert_eq!((1, 1.0), knots.locate(3.0).unwrap());
        }
    }

    #[test]
    fn test_end_belongs_to_last_segment() {
        let knots = Knots::non_uniform(vec![0.0, 1.0, 1.5]).unwrap();

        assert_eq!((1, 1.0), knots.locate(1.5).unwrap());
        assert_eq!((1, 1.0), knots.locate_with_hint(0, 1.5).unwrap());
    }

    #[test]
    fn test_locate_with_hint_matches_locate() {
        let knots = Knots::non_uniform(vec![0.0, 0.3, 1.0, 1.1, 2.5]).unwrap();
        let ts = [0.0, 0.1, 0.3, 0.31, 1.0, 1.05, 1.1, 2.0, 2.5, 0.2];

        let mut hint = 0;
        for t in ts {
            let located = knots.locate_with_hint(hint, t).unwrap();
            assert_eq!(knots.locate(t).unwrap(), located);
            hint = located.0;
        }
    }

    #[test]
    fn test_push_and_remove() {
        let mut uniform = Knots::uniform(2);
        uniform.push(None).unwrap();
        assert_eq!(3, uniform.knot_count());
        assert!(uniform.push(Some(4.0)).is_err());
        uniform.remove(0).unwrap();
        assert_eq!(2, uniform.knot_count());

        let mut non_uniform = Knots::non_uniform(vec![0.0, 1.0]).unwrap();
        non_uniform.push(Some(2.5)).unwrap();
        assert_eq!(2.5, non_uniform.t_end());
        assert_eq!(Err(SplineError::InvalidKnots { index: 3 }), non_uniform.push(Some(2.0)));
        assert_eq!(Err(SplineError::InvalidKnots { index: 3 }), non_uniform.push(Some(2.5)));
        assert!(non_uniform.push(None).is_err());
        non_uniform.remove(1).unwrap();
        assert_eq!(Some(&[0.0, 2.5][..]), non_uniform.values());
        assert_eq!(
            Err(SplineError::IndexOutOfRange { index: 5, len: 2 }),
            non_uniform.remove(5)
        );
    }
}
