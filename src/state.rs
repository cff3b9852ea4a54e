use core::ops::{Add, AddAssign, Mul};
use nalgebra::{UnitQuaternion, Vector3, Vector6};

/// Kinematic state of the vehicle, supplied fresh on every step.
///
/// Position is expressed in a north-east-down world frame, velocities in the body frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleKinematics {
    pub position: Vector3<f64>,
    /// Rotation from the body frame to the world frame.
    pub orientation: UnitQuaternion<f64>,
    pub linear_velocity: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
    /// Height above the ground plane, when the caller knows better than `-position.z`.
    pub height_above_ground: Option<f64>,
}

impl VehicleKinematics {
    /// Level and motionless at `position`.
    pub fn at_rest(position: Vector3<f64>) -> Self {
        Self {
            position,
            orientation: UnitQuaternion::identity(),
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            height_above_ground: None,
        }
    }

    pub fn with_height_above_ground(mut self, height: f64) -> Self {
        self.height_above_ground = Some(height);
        self
    }

    /// Height above ground in meters.
    pub fn height(&self) -> f64 {
        self.height_above_ground.unwrap_or(-self.position.z)
    }
}

/// A body-frame force (N) and torque (N·m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wrench {
    pub force: Vector3<f64>,
    pub torque: Vector3<f64>,
}

impl Wrench {
    pub fn new(force: Vector3<f64>, torque: Vector3<f64>) -> Self {
        Self { force, torque }
    }

    pub fn zeros() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros())
    }

    /// Split `[Fx, Fy, Fz, Mx, My, Mz]`.
    pub fn from_vector(vector: &Vector6<f64>) -> Self {
        Self::new(
            Vector3::new(vector[0], vector[1], vector[2]),
            Vector3::new(vector[3], vector[4], vector[5]),
        )
    }

    /// Stack as `[Fx, Fy, Fz, Mx, My, Mz]`.
    pub fn to_vector(&self) -> Vector6<f64> {
        Vector6::new(
            self.force.x,
            self.force.y,
            self.force.z,
            self.torque.x,
            self.torque.y,
            self.torque.z,
        )
    }

    pub fn to_array(&self) -> [f64; 6] {
        [
            self.force.x,
            self.force.y,
            self.force.z,
            self.torque.x,
            self.torque.y,
            self.torque.z,
        ]
    }
}

impl Add for Wrench {
    type Output = Wrench;

    fn add(self, rhs: Wrench) -> Wrench {
        Wrench::new(self.force + rhs.force, self.torque + rhs.torque)
    }
}

impl AddAssign for Wrench {
    fn add_assign(&mut self, rhs: Wrench) {
        self.force += rhs.force;
        self.torque += rhs.torque;
    }
}

impl Mul<f64> for Wrench {
    type Output = Wrench;

    fn mul(self, rhs: f64) -> Wrench {
        Wrench::new(self.force * rhs, self.torque * rhs)
    }
}

impl From<Wrench> for Vector6<f64> {
    fn from(wrench: Wrench) -> Self {
        wrench.to_vector()
    }
}

impl From<Wrench> for [f64; 6] {
    fn from(wrench: Wrench) -> Self {
        wrench.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_defaults_to_negated_down_position() {
        let kinematics = VehicleKinematics::at_rest(Vector3::new(1., 2., -3.5));
        assert_eq!(kinematics.height(), 3.5);
        assert_eq!(kinematics.with_height_above_ground(0.2).height(), 0.2);
    }

    #[test]
    fn vector_layout_is_force_then_torque() {
        let wrench = Wrench::new(Vector3::new(1., 2., 3.), Vector3::new(4., 5., 6.));
        assert_eq!(wrench.to_array(), [1., 2., 3., 4., 5., 6.]);
        assert_eq!(Wrench::from_vector(&wrench.to_vector()), wrench);
    }
}
