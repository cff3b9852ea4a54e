use super::Multirotor;
use crate::{
    error::ConfigError, Drag, EnvironmentParameters, GroundEffect, MotorMatrix, MotorSpec,
};
use nalgebra::Vector3;

/// Collects a complete multirotor configuration.
///
/// Every physical coefficient must be supplied explicitly; [`Builder::build`] fails with
/// [`ConfigError::Missing`] instead of filling in defaults. Only the initial wind, which is
/// not a property of the vehicle, starts at zero.
pub struct Builder<const N: usize> {
    motors: Option<[MotorSpec; N]>,
    drag: Option<Drag>,
    ground_effect: Option<GroundEffect>,
    wind: Vector3<f64>,
}

impl<const N: usize> Default for Builder<N> {
    fn default() -> Self {
        Self {
            motors: None,
            drag: None,
            ground_effect: None,
            wind: Vector3::zeros(),
        }
    }
}

impl<const N: usize> Builder<N> {
    pub fn motors(mut self, motors: [MotorSpec; N]) -> Self {
        self.motors = Some(motors);
        self
    }

    pub fn drag(mut self, drag: Drag) -> Self {
        self.drag = Some(drag);
        self
    }

    pub fn ground_effect(mut self, ground_effect: GroundEffect) -> Self {
        self.ground_effect = Some(ground_effect);
        self
    }

    /// Initial wind in the north-east-down world frame.
    pub fn wind(mut self, wind: Vector3<f64>) -> Self {
        self.wind = wind;
        self
    }

    pub fn build(self) -> Result<Multirotor<N>, ConfigError> {
        let motors = self.motors.ok_or(ConfigError::Missing("motors"))?;
        let drag = self.drag.ok_or(ConfigError::Missing("drag"))?;
        let ground_effect = self
            .ground_effect
            .ok_or(ConfigError::Missing("ground_effect"))?;

        let mut environment = EnvironmentParameters::new(drag, ground_effect);
        environment.wind = self.wind;

        Multirotor::new(MotorMatrix::new(motors)?, environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{quad_x, RotorSpec};

    fn rotor() -> RotorSpec {
        RotorSpec::new(1.0, [8.0, 2.0, 0.0], [0.1, 0.02, 0.0], 0.05, 0.1)
    }

    #[test]
    fn refuses_partial_configuration() {
        let missing_motors = Builder::<4>::default()
            .drag(Drag::new(0.1, 0.01))
            .ground_effect(GroundEffect::disabled())
            .build();
        assert_eq!(missing_motors.err(), Some(ConfigError::Missing("motors")));

        let missing_drag = Builder::default()
            .motors(quad_x(rotor(), 0.2))
            .ground_effect(GroundEffect::disabled())
            .build();
        assert_eq!(missing_drag.err(), Some(ConfigError::Missing("drag")));

        let missing_ground_effect = Builder::default()
            .motors(quad_x(rotor(), 0.2))
            .drag(Drag::new(0.1, 0.01))
            .build();
        assert_eq!(
            missing_ground_effect.err(),
            Some(ConfigError::Missing("ground_effect"))
        );
    }

    #[test]
    fn propagates_geometry_errors() {
        let mut motors = quad_x(rotor(), 0.2);
        motors[1].normal = Vector3::new(0., 0., -0.5);

        let result = Builder::default()
            .motors(motors)
            .drag(Drag::new(0.1, 0.01))
            .ground_effect(GroundEffect::disabled())
            .build();

        assert_eq!(
            result.err(),
            Some(ConfigError::NonUnitAxis {
                motor: 1,
                norm: 0.5
            })
        );
    }

    #[test]
    fn carries_initial_wind() {
        let copter = Builder::default()
            .motors(quad_x(rotor(), 0.2))
            .drag(Drag::new(0.1, 0.01))
            .ground_effect(GroundEffect::disabled())
            .wind(Vector3::new(2., -1., 0.))
            .build()
            .unwrap();

        assert_eq!(*copter.wind(), Vector3::new(2., -1., 0.));
    }
}
