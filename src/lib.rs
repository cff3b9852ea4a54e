//! # rotorcraft-dynamics
//! Forces and moments of a multirotor airframe for software-in-the-loop flight simulation.
//!
//! # Components
//! [`rotor`] contains the static thrust/torque curves and the first-order actuator lag of a
//! single rotor.
//!
//! [`MotorMatrix`] holds the fixed rotor geometry and allocates per-motor output into a
//! body-frame [`Wrench`].
//!
//! [`environment`] contains ground effect, wind-relative airspeed and airframe drag.
//!
//! [`Multirotor`] assembles everything into one step function
//! (see [`Builder`] for configuring one).
//!
//! Airframe models implement [`ForcesAndMoments`] so the simulation loop can hold any of them
//! behind one interface.

use nalgebra::Vector3;

pub mod environment;
pub use environment::{relative_airspeed, Drag, EnvironmentParameters, GroundEffect};

pub mod error;
pub use error::{ConfigError, Error, InputError};

pub mod filter;

pub mod motor_matrix;
pub use motor_matrix::{quad_plus, quad_x, MotorMatrix, MotorSpec, Spin};

pub mod multirotor;
pub use multirotor::{Builder, Multirotor, Phase};

mod poly;
pub use poly::Polynomial;

pub mod rotor;
pub use rotor::{pwm_to_command, ActuatorState, RotorSpec};

mod state;
pub use state::{VehicleKinematics, Wrench};

/// An airframe that turns actuator commands into a body-frame wrench.
///
/// Implementations keep their own actuator memory and timestamp, so a single instance must
/// be driven by one caller advancing simulated time.
pub trait ForcesAndMoments {
    /// Evaluate the wrench at `time` seconds for the current kinematics and commands.
    fn update_forces_and_torques(
        &mut self,
        time: f64,
        kinematics: &VehicleKinematics,
        commands: &[f64],
    ) -> Result<Wrench, InputError>;

    /// Replace the world-frame wind used from the next evaluation on.
    fn set_wind(&mut self, wind: Vector3<f64>);
}
