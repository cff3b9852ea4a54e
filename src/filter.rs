//! Scalar helpers shared by the actuator and environment models.

use num_traits::Float;

/// Blend factor of a first-order lag with time constant `tau` over `dt` seconds.
///
/// This is the exact discretization `1 - exp(-dt / tau)`, which stays in `[0, 1)` for any
/// positive step so the filtered value can never overshoot its target.
/// A non-positive (or NaN) `dt` yields 0 and a non-positive `tau` yields 1.
pub fn alpha<T: Float>(dt: T, tau: T) -> T {
    if !(dt > T::zero()) {
        return T::zero();
    }
    if tau <= T::zero() {
        return T::one();
    }

    T::one() - (-dt / tau).exp()
}

/// Move `current` toward `target` by the fraction `alpha`.
pub fn lag<T: Float>(current: T, target: T, alpha: T) -> T {
    current + (target - current) * alpha
}

/// Constrain `amt` to `[low, high]`. NaN maps to `low`.
pub fn constrain<T: Float>(amt: T, low: T, high: T) -> T {
    if amt.is_nan() {
        return low;
    }

    if amt < low {
        return low;
    }

    if amt > high {
        return high;
    }

    amt
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn alpha_reaches_63_percent_after_one_time_constant() {
        let tau = 0.05;
        let dt = 0.001;
        let steps = (tau / dt).round() as usize;

        let mut value = 0.0_f64;
        for _ in 0..steps {
            value = lag(value, 1.0, alpha(dt, tau));
        }

        assert_relative_eq!(value, 1. - (-1.0_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn alpha_is_zero_without_elapsed_time() {
        assert_eq!(alpha(0.0_f64, 0.1), 0.);
        assert_eq!(alpha(-0.5_f64, 0.1), 0.);
        assert_eq!(alpha(f64::NAN, 0.1), 0.);
    }

    #[test]
    fn alpha_is_instant_for_zero_tau_or_infinite_dt() {
        assert_eq!(alpha(0.01_f32, 0.), 1.);
        assert_eq!(alpha(f64::INFINITY, 0.1), 1.);
    }

    #[test]
    fn constrain_clamps_and_rejects_nan() {
        assert_eq!(constrain(1.5_f64, 0., 1.), 1.);
        assert_eq!(constrain(-1.5_f64, 0., 1.), 0.);
        assert_eq!(constrain(0.25_f64, 0., 1.), 0.25);
        assert_eq!(constrain(f32::NAN, 0., 1.), 0.);
    }
}
