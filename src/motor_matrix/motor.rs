use crate::{error::ConfigError, RotorSpec};
use nalgebra::Vector3;

/// Allowed deviation of a thrust axis norm from 1.
const AXIS_NORM_TOLERANCE: f64 = 1e-6;

/// Rotation direction of a rotor, which sets the sign of its reaction torque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    /// +1 for clockwise, -1 for counter-clockwise.
    pub fn sign(self) -> f64 {
        match self {
            Spin::Clockwise => 1.,
            Spin::CounterClockwise => -1.,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Spin::Clockwise => Spin::CounterClockwise,
            Spin::CounterClockwise => Spin::Clockwise,
        }
    }
}

impl TryFrom<i8> for Spin {
    type Error = ConfigError;

    fn try_from(direction: i8) -> Result<Self, Self::Error> {
        match direction {
            1 => Ok(Spin::Clockwise),
            -1 => Ok(Spin::CounterClockwise),
            other => Err(ConfigError::InvalidSpin(other)),
        }
    }
}

/// A rotor and where it sits on the airframe.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorSpec {
    pub rotor: RotorSpec,
    /// Offset from the center of mass, in body-frame meters.
    pub position: Vector3<f64>,
    /// Unit body-frame direction of positive thrust.
    pub normal: Vector3<f64>,
    pub spin: Spin,
}

impl MotorSpec {
    pub fn new(rotor: RotorSpec, position: Vector3<f64>, normal: Vector3<f64>, spin: Spin) -> Self {
        Self {
            rotor,
            position,
            normal,
            spin,
        }
    }

    /// A motor at the end of a horizontal arm, thrusting along body -Z ("up" in a
    /// north-east-down body frame).
    ///
    /// `angle_degrees` is measured from the nose (+X) toward the right (+Y).
    pub fn from_arm(rotor: RotorSpec, arm_length: f64, angle_degrees: f64, spin: Spin) -> Self {
        let angle = angle_degrees.to_radians();
        Self::new(
            rotor,
            Vector3::new(arm_length * angle.cos(), arm_length * angle.sin(), 0.),
            -Vector3::z(),
            spin,
        )
    }

    pub(crate) fn validate(&self, motor: usize) -> Result<(), ConfigError> {
        self.rotor.validate(motor)?;

        if !self.position.iter().all(|x| x.is_finite()) {
            return Err(ConfigError::NonFinite {
                motor,
                field: "position",
            });
        }
        if !self.normal.iter().all(|x| x.is_finite()) {
            return Err(ConfigError::NonFinite {
                motor,
                field: "normal",
            });
        }

        let norm = self.normal.norm();
        if (norm - 1.).abs() > AXIS_NORM_TOLERANCE {
            return Err(ConfigError::NonUnitAxis { motor, norm });
        }

        Ok(())
    }
}

/// Quad-copter in "+" layout: front and back spin clockwise, left and right counter-clockwise.
pub fn quad_plus(rotor: RotorSpec, arm_length: f64) -> [MotorSpec; 4] {
    [
        MotorSpec::from_arm(rotor.clone(), arm_length, 90., Spin::CounterClockwise),
        MotorSpec::from_arm(rotor.clone(), arm_length, -90., Spin::CounterClockwise),
        MotorSpec::from_arm(rotor.clone(), arm_length, 0., Spin::Clockwise),
        MotorSpec::from_arm(rotor, arm_length, 180., Spin::Clockwise),
    ]
}

/// Quad-copter in "X" layout, motors ordered front-right, back-left, front-left, back-right.
pub fn quad_x(rotor: RotorSpec, arm_length: f64) -> [MotorSpec; 4] {
    [
        MotorSpec::from_arm(rotor.clone(), arm_length, 45., Spin::CounterClockwise),
        MotorSpec::from_arm(rotor.clone(), arm_length, -135., Spin::CounterClockwise),
        MotorSpec::from_arm(rotor.clone(), arm_length, -45., Spin::Clockwise),
        MotorSpec::from_arm(rotor, arm_length, 135., Spin::Clockwise),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rotor() -> RotorSpec {
        RotorSpec::new(1.0, [8.0, 2.0, 0.0], [0.1, 0.02, 0.0], 0.05, 0.1)
    }

    #[test]
    fn spin_from_integer() {
        assert_eq!(Spin::try_from(1), Ok(Spin::Clockwise));
        assert_eq!(Spin::try_from(-1), Ok(Spin::CounterClockwise));
        assert_eq!(Spin::try_from(0), Err(ConfigError::InvalidSpin(0)));
        assert_eq!(Spin::Clockwise.reversed().sign(), -1.);
    }

    #[test]
    fn arm_placement() {
        let motor = MotorSpec::from_arm(rotor(), 0.25, 90., Spin::Clockwise);
        assert_abs_diff_eq!(motor.position, Vector3::new(0., 0.25, 0.), epsilon = 1e-12);
        assert_eq!(motor.normal, Vector3::new(0., 0., -1.));
    }

    #[test]
    fn quad_x_spins_cancel() {
        let motors = quad_x(rotor(), 0.2);
        let total: f64 = motors.iter().map(|m| m.spin.sign()).sum();
        assert_eq!(total, 0.);
        for (i, motor) in motors.iter().enumerate() {
            assert_eq!(motor.validate(i), Ok(()));
        }
    }

    #[test]
    fn rejects_non_unit_axis() {
        let motor = MotorSpec::new(
            rotor(),
            Vector3::new(0.2, 0., 0.),
            Vector3::new(0., 0., 2.),
            Spin::Clockwise,
        );
        assert_eq!(
            motor.validate(3),
            Err(ConfigError::NonUnitAxis { motor: 3, norm: 2. })
        );
    }
}
