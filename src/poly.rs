use num_traits::Float;

/// A polynomial stored highest degree first, so `[a, b, c]` is `a·x² + b·x + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    pub fn new(coefficients: impl Into<Vec<T>>) -> Self {
        Self {
            coefficients: coefficients.into(),
        }
    }

    /// A degree-zero polynomial.
    pub fn constant(value: T) -> Self {
        Self::new(vec![value])
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn is_finite(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_finite())
    }

    /// Evaluate at `x` using Horner's rule. An empty polynomial evaluates to zero.
    ///
    /// ```
    /// use rotorcraft_dynamics::Polynomial;
    /// use approx::assert_relative_eq;
    ///
    /// let thrust = Polynomial::new([8.0, 2.0, 0.5]);
    /// assert_relative_eq!(thrust.eval(0.5), 8.0 * 0.25 + 2.0 * 0.5 + 0.5);
    /// ```
    pub fn eval(&self, x: T) -> T {
        self.coefficients
            .iter()
            .fold(T::zero(), |acc, &coefficient| acc * x + coefficient)
    }
}

impl<T: Float> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        Self::new(coefficients)
    }
}

impl<T: Float, const K: usize> From<[T; K]> for Polynomial<T> {
    fn from(coefficients: [T; K]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::Polynomial;
    use approx::assert_relative_eq;

    #[test]
    fn evaluates_highest_degree_first() {
        let p = Polynomial::new([2.0_f64, -3.0, 0.0, 1.0]);
        assert_relative_eq!(p.eval(2.0), 2. * 8. - 3. * 4. + 1.);
        assert_eq!(p.degree(), Some(3));
    }

    #[test]
    fn empty_polynomial_is_zero() {
        let p = Polynomial::<f64>::new(Vec::new());
        assert!(p.is_empty());
        assert_eq!(p.degree(), None);
        assert_eq!(p.eval(3.), 0.);
    }

    #[test]
    fn detects_non_finite_coefficients() {
        assert!(Polynomial::new([1.0_f64, 2.0]).is_finite());
        assert!(!Polynomial::new([1.0_f64, f64::NAN]).is_finite());
    }
}
