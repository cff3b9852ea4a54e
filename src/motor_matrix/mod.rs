use crate::{error::ConfigError, ActuatorState, Wrench};
use nalgebra::{SMatrix, SVector};

mod motor;
pub use motor::{quad_plus, quad_x, MotorSpec, Spin};

/// Fixed rotor geometry and the linear map from per-motor output to body wrench.
///
/// Column `i` of the force allocation is `[nᵢ; pᵢ × nᵢ]` (thrust direction and its moment
/// arm), column `i` of the torque allocation is `[0; sᵢ·nᵢ]` (reaction torque about the
/// thrust axis). Both are built once from the geometry and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorMatrix<const N: usize> {
    motors: [MotorSpec; N],
    force_allocation: SMatrix<f64, 6, N>,
    torque_allocation: SMatrix<f64, 6, N>,
}

impl<const N: usize> MotorMatrix<N> {
    /// Validate `motors` and build the allocation matrices.
    pub fn new(motors: [MotorSpec; N]) -> Result<Self, ConfigError> {
        if N == 0 {
            return Err(ConfigError::NoMotors);
        }
        for (i, motor) in motors.iter().enumerate() {
            motor.validate(i)?;
        }

        let mut force_allocation = SMatrix::<f64, 6, N>::zeros();
        let mut torque_allocation = SMatrix::<f64, 6, N>::zeros();
        for (i, motor) in motors.iter().enumerate() {
            let arm = motor.position.cross(&motor.normal);
            let reaction = motor.normal * motor.spin.sign();
            for row in 0..3 {
                force_allocation[(row, i)] = motor.normal[row];
                force_allocation[(row + 3, i)] = arm[row];
                torque_allocation[(row + 3, i)] = reaction[row];
            }
        }

        Ok(Self {
            motors,
            force_allocation,
            torque_allocation,
        })
    }

    pub fn motors(&self) -> &[MotorSpec; N] {
        &self.motors
    }

    pub fn force_allocation(&self) -> &SMatrix<f64, 6, N> {
        &self.force_allocation
    }

    pub fn torque_allocation(&self) -> &SMatrix<f64, 6, N> {
        &self.torque_allocation
    }

    /// Net body wrench of the given per-motor thrusts and reaction torques.
    pub fn allocate(&self, forces: &SVector<f64, N>, torques: &SVector<f64, N>) -> Wrench {
        Wrench::from_vector(&(self.force_allocation * forces + self.torque_allocation * torques))
    }

    pub fn allocate_states(&self, states: &[ActuatorState; N]) -> Wrench {
        let forces = SVector::<f64, N>::from_fn(|i, _| states[i].force);
        let torques = SVector::<f64, N>::from_fn(|i, _| states[i].torque);
        self.allocate(&forces, &torques)
    }
}
