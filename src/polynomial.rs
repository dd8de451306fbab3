use crate::vertex::Vec2;

/// Scalar cubic `a + b*u + c*u^2 + d*u^3` in power basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPolynomial {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl CubicPolynomial {

    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        CubicPolynomial { a, b, c, d }
    }

    /// Power-basis cubic of a Hermite segment: passes `p0` at `u = 0` and `p1` at `u = 1`
    /// with derivatives `m0` and `m1` (with respect to `u`) at these ends.
    pub fn from_hermite(p0: f64, m0: f64, p1: f64, m1: f64) -> Self {
        CubicPolynomial {
            a: p0,
            b: m0,
            c: 3.0 * (p1 - p0) - 2.0 * m0 - m1,
            d: 2.0 * (p0 - p1) + m0 + m1,
        }
    }

    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Horner evaluation, `u` is not clamped.
    pub fn at(&self, u: f64) -> f64 {
        self.a + u * (self.b + u * (self.c + self.d * u))
    }

    pub fn derivative_at(&self, u: f64) -> f64 {
        self.b + u * (2.0 * self.c + 3.0 * self.d * u)
    }

    pub fn second_derivative_at(&self, u: f64) -> f64 {
        2.0 * self.c + 6.0 * self.d * u
    }
}

/// Pair of cubics, one per axis, sharing the local parameter `u`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic2d {
    x: CubicPolynomial,
    y: CubicPolynomial,
}

impl Cubic2d {

    pub fn new(x: CubicPolynomial, y: CubicPolynomial) -> Self {
        Cubic2d { x, y }
    }

    pub fn from_hermite(p0: &Vec2, m0: &Vec2, p1: &Vec2, m1: &Vec2) -> Self {
        Cubic2d {
            x: CubicPolynomial::from_hermite(p0.x, m0.x, p1.x, m1.x),
            y: CubicPolynomial::from_hermite(p0.y, m0.y, p1.y, m1.y),
        }
    }

    pub fn x(&self) -> &CubicPolynomial {
        &self.x
    }

    pub fn y(&self) -> &CubicPolynomial {
        &self.y
    }

    pub fn at(&self, u: f64) -> Vec2 {
        Vec2::new(self.x.at(u), self.y.at(u))
    }

    pub fn derivative_at(&self, u: f64) -> Vec2 {
        Vec2::new(self.x.derivative_at(u), self.y.derivative_at(u))
    }

    pub fn second_derivative_at(&self, u: f64) -> Vec2 {
        Vec2::new(self.x.second_derivative_at(u), self.y.second_derivative_at(u))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn evaluate() {

        let eps = 1e-6;
        let polynomial = CubicPolynomial::new(1.0, 2.5, -0.25, 0.5);

        assert_approx_eq!(polynomial.at(2.1), 1.0 + 2.5 * 2.1 - 0.25 * 4.41 + 0.5 * 9.261, eps);
        assert_approx_eq!(polynomial.at(-3.14), 1.0 - 7.85 - 0.25 * 9.8596 - 0.5 * 30.959144, eps);
        assert_approx_eq!(polynomial.at(0.0), 1.0, eps);
    }

    #[test]
    fn derivatives() {
        let eps = 1e-9;
        let polynomial = CubicPolynomial::new(1.0, -2.0, 3.0, 4.0);

        assert_approx_eq!(polynomial.derivative_at(0.0), -2.0, eps);
        assert_approx_eq!(polynomial.derivative_at(0.5), -2.0 + 3.0 + 3.0, eps);
        assert_approx_eq!(polynomial.second_derivative_at(0.0), 6.0, eps);
        assert_approx_eq!(polynomial.second_derivative_at(1.0), 6.0 + 24.0, eps);
    }

    #[test]
    fn hermite_matches_end_conditions() {
        let eps = 1e-12;
        let polynomial = CubicPolynomial::from_hermite(2.0, -1.0, 5.0, 3.0);

        assert_approx_eq!(polynomial.at(0.0), 2.0, eps);
        assert_approx_eq!(polynomial.at(1.0), 5.0, eps);
        assert_approx_eq!(polynomial.derivative_at(0.0), -1.0, eps);
        assert_approx_eq!(polynomial.derivative_at(1.0), 3.0, eps);
    }

    #[test]
    fn hermite_coefficients() {
        // p0 = 0, p1 = 1, m0 = 0, m1 = 2 gives u^2
        let polynomial = CubicPolynomial::from_hermite(0.0, 0.0, 1.0, 2.0);
        assert_eq!([0.0, 0.0, 1.0, 0.0], polynomial.coefficients());
    }

    #[test]
    fn cubic_2d_evaluates_both_axes() {
        let eps = 1e-12;
        let cubic = Cubic2d::new(
            CubicPolynomial::new(0.0, 1.0, 0.0, 0.0),
            CubicPolynomial::new(0.0, 0.0, 1.0, 0.0),
        );

        let point = cubic.at(0.25);
        assert_approx_eq!(point.x, 0.25, eps);
        assert_approx_eq!(point.y, 0.0625, eps);

        let derivative = cubic.derivative_at(0.5);
        assert_approx_eq!(derivative.x, 1.0, eps);
        assert_approx_eq!(derivative.y, 1.0, eps);

        let second_derivative = cubic.second_derivative_at(0.5);
        assert_approx_eq!(second_derivative.x, 0.0, eps);
        assert_approx_eq!(second_derivative.y, 2.0, eps);
    }
}
