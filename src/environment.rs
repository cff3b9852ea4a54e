//! Ground proximity, relative airflow and airframe drag.

use crate::{error::ConfigError, filter, Polynomial, VehicleKinematics, Wrench};
use nalgebra::Vector3;

/// Linear airframe damping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    /// Force per unit of wind-relative airspeed (N·s/m).
    pub linear_mu: f64,
    /// Torque per unit of body rate (N·m·s/rad).
    pub angular_mu: f64,
}

impl Drag {
    pub fn new(linear_mu: f64, angular_mu: f64) -> Self {
        Self {
            linear_mu,
            angular_mu,
        }
    }

    pub fn wrench(
        &self,
        relative_velocity: &Vector3<f64>,
        angular_velocity: &Vector3<f64>,
    ) -> Wrench {
        Wrench::new(
            -relative_velocity * self.linear_mu,
            -angular_velocity * self.angular_mu,
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("linear_mu", self.linear_mu), ("angular_mu", self.angular_mu)] {
            if !value.is_finite() || value < 0. {
                return Err(ConfigError::NegativeDrag { field, value });
            }
        }
        Ok(())
    }
}

/// Thrust augmentation close to a ground plane.
///
/// The correction factor is a polynomial in normalized height (height ÷ rotor diameter),
/// constrained to `[min_factor, 1]` and forced to 1 from `cutoff` upward. It acts as an
/// inflow ratio: the propulsive force is divided by it, so thrust grows as the vehicle
/// settles onto its own ground cushion.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundEffect {
    pub coefficients: Polynomial<f64>,
    /// Rotor diameter in meters.
    pub rotor_diameter: f64,
    /// Normalized height at and above which there is no ground effect.
    pub cutoff: f64,
    /// Smallest allowed correction factor, in `(0, 1]`.
    pub min_factor: f64,
}

impl GroundEffect {
    pub fn new(
        coefficients: impl Into<Polynomial<f64>>,
        rotor_diameter: f64,
        cutoff: f64,
        min_factor: f64,
    ) -> Self {
        Self {
            coefficients: coefficients.into(),
            rotor_diameter,
            cutoff,
            min_factor,
        }
    }

    /// No ground effect at any height.
    pub fn disabled() -> Self {
        Self::new([1.], 1., 0., 1.)
    }

    /// Correction factor in `(0, 1]` at `height` meters above ground.
    pub fn factor(&self, height: f64) -> f64 {
        let normalized = height.max(0.) / self.rotor_diameter;
        if !(normalized < self.cutoff) {
            return 1.;
        }

        filter::constrain(self.coefficients.eval(normalized), self.min_factor, 1.)
    }

    /// Scale a propulsive force for ground proximity.
    pub fn apply(&self, force: Vector3<f64>, height: f64) -> Vector3<f64> {
        force / self.factor(height)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.coefficients.is_empty() || !self.coefficients.is_finite() {
            return Err(ConfigError::InvalidGroundEffect {
                field: "coefficients",
                value: self.coefficients.coefficients().len() as f64,
            });
        }
        if !(self.rotor_diameter > 0.) || !self.rotor_diameter.is_finite() {
            return Err(ConfigError::InvalidGroundEffect {
                field: "rotor_diameter",
                value: self.rotor_diameter,
            });
        }
        if !(self.cutoff >= 0.) {
            return Err(ConfigError::InvalidGroundEffect {
                field: "cutoff",
                value: self.cutoff,
            });
        }
        if !(self.min_factor > 0. && self.min_factor <= 1.) {
            return Err(ConfigError::InvalidGroundEffect {
                field: "min_factor",
                value: self.min_factor,
            });
        }
        Ok(())
    }
}

/// Airframe and atmosphere parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentParameters {
    pub drag: Drag,
    pub ground_effect: GroundEffect,
    /// Wind velocity in the north-east-down world frame (m/s).
    pub wind: Vector3<f64>,
}

impl EnvironmentParameters {
    pub fn new(drag: Drag, ground_effect: GroundEffect) -> Self {
        Self {
            drag,
            ground_effect,
            wind: Vector3::zeros(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.drag.validate()?;
        self.ground_effect.validate()
    }

    /// Drag wrench for the current kinematics and wind.
    pub fn drag_wrench(&self, kinematics: &VehicleKinematics) -> Wrench {
        let airspeed = relative_airspeed(kinematics, &self.wind);
        self.drag.wrench(&airspeed, &kinematics.angular_velocity)
    }
}

/// Body-frame velocity of the vehicle relative to the surrounding air.
pub fn relative_airspeed(kinematics: &VehicleKinematics, wind: &Vector3<f64>) -> Vector3<f64> {
    kinematics.linear_velocity - kinematics.orientation.inverse_transform_vector(wind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use core::f64::consts::FRAC_PI_2;
    use nalgebra::UnitQuaternion;

    // Cheeseman-Bennett style fit over normalized height
    fn ground_effect() -> GroundEffect {
        GroundEffect::new([-0.25, 0.9, 0.4], 0.25, 2.0, 0.3)
    }

    #[test]
    fn ground_effect_factor_is_bounded() {
        let effect = ground_effect();
        let mut height = -1.0;
        while height < 5.0 {
            let factor = effect.factor(height);
            assert!(factor > 0. && factor <= 1., "factor {} at {}", factor, height);
            if height / effect.rotor_diameter >= effect.cutoff {
                assert_eq!(factor, 1.);
            }
            height += 0.01;
        }
        assert_eq!(effect.factor(f64::INFINITY), 1.);
    }

    #[test]
    fn ground_effect_increases_thrust_near_ground() {
        let effect = ground_effect();
        let force = Vector3::new(0., 0., -10.);

        let on_ground = effect.apply(force, 0.);
        assert_relative_eq!(on_ground.z, -10. / 0.4);
        assert!(effect.apply(force, 0.1).z < effect.apply(force, 0.3).z);
        assert_eq!(effect.apply(force, 10.), force);
    }

    #[test]
    fn ground_effect_floor_applies() {
        let effect = GroundEffect::new([0.0], 0.25, 1.0, 0.5);
        assert_eq!(effect.factor(0.1), 0.5);
    }

    #[test]
    fn disabled_ground_effect_is_identity() {
        let effect = GroundEffect::disabled();
        assert_eq!(effect.validate(), Ok(()));
        assert_eq!(effect.factor(0.), 1.);
        assert_eq!(effect.factor(-3.), 1.);
    }

    #[test]
    fn airspeed_rotates_wind_into_body_frame() {
        let mut kinematics = VehicleKinematics::at_rest(Vector3::new(0., 0., -5.));
        kinematics.orientation = UnitQuaternion::from_euler_angles(0., 0., FRAC_PI_2);
        kinematics.linear_velocity = Vector3::new(1., 0., 0.);

        // Wind blowing north, vehicle nose pointing east
        let airspeed = relative_airspeed(&kinematics, &Vector3::new(3., 0., 0.));

        assert_abs_diff_eq!(airspeed, Vector3::new(1., 3., 0.), epsilon = 1e-12);
    }

    #[test]
    fn drag_opposes_motion() {
        let drag = Drag::new(0.2, 0.05);
        let wrench = drag.wrench(&Vector3::new(2., 0., -1.), &Vector3::new(0., 0.5, 0.));

        assert_relative_eq!(wrench.force, Vector3::new(-0.4, 0., 0.2));
        assert_relative_eq!(wrench.torque, Vector3::new(0., -0.025, 0.));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let environment = EnvironmentParameters::new(Drag::new(-0.1, 0.), GroundEffect::disabled());
        assert_eq!(
            environment.validate(),
            Err(ConfigError::NegativeDrag {
                field: "linear_mu",
                value: -0.1
            })
        );

        let environment =
            EnvironmentParameters::new(Drag::new(0.1, 0.1), GroundEffect::new([1.], 0.2, 1., 0.));
        assert!(matches!(
            environment.validate(),
            Err(ConfigError::InvalidGroundEffect {
                field: "min_factor",
                ..
            })
        ));
    }
}
