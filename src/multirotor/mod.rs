use crate::{
    error::{ConfigError, InputError},
    rotor::pwm_to_command,
    ActuatorState, EnvironmentParameters, ForcesAndMoments, MotorMatrix, VehicleKinematics,
    Wrench,
};
use nalgebra::Vector3;

mod builder;
pub use builder::Builder;

/// Lifecycle of a configured model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built but never evaluated.
    Configured,
    /// At least one evaluation has run.
    Stepping,
}

/// Forces and moments of an `N`-rotor airframe.
///
/// Each call to [`Multirotor::update`] advances every rotor's actuator lag by the time
/// elapsed since the previous call, allocates the resulting thrusts and reaction torques
/// through the motor geometry, corrects for ground proximity and adds airframe drag.
///
/// ```
/// use rotorcraft_dynamics::{quad_x, Drag, GroundEffect, Multirotor, RotorSpec, VehicleKinematics};
/// use nalgebra::Vector3;
///
/// let rotor = RotorSpec::new(1.0, [8.0, 2.0, 0.0], [0.1, 0.02, 0.0], 0.05, 0.1);
/// let mut copter = Multirotor::builder()
///     .motors(quad_x(rotor, 0.2))
///     .drag(Drag::new(0.1, 0.01))
///     .ground_effect(GroundEffect::disabled())
///     .build()?;
///
/// let hovering = VehicleKinematics::at_rest(Vector3::new(0., 0., -10.));
/// copter.update(0.0, &hovering, &[0.5; 4])?;
/// let wrench = copter.update(0.01, &hovering, &[0.5; 4])?;
/// assert!(wrench.force.z < 0.);
/// # Ok::<(), rotorcraft_dynamics::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Multirotor<const N: usize> {
    motors: MotorMatrix<N>,
    environment: EnvironmentParameters,
    actuators: [ActuatorState; N],
    prev_time: Option<f64>,
}

impl<const N: usize> Multirotor<N> {
    pub fn builder() -> Builder<N> {
        Builder::default()
    }

    pub fn new(
        motors: MotorMatrix<N>,
        environment: EnvironmentParameters,
    ) -> Result<Self, ConfigError> {
        environment.validate()?;
        log::debug!(
            "configured {}-rotor model, drag {:?}, ground effect cutoff {}",
            N,
            environment.drag,
            environment.ground_effect.cutoff
        );

        Ok(Self {
            motors,
            environment,
            actuators: [ActuatorState::default(); N],
            prev_time: None,
        })
    }

    pub fn phase(&self) -> Phase {
        match self.prev_time {
            Some(_) => Phase::Stepping,
            None => Phase::Configured,
        }
    }

    /// Evaluate the body-frame wrench at `time` seconds.
    ///
    /// `commands` holds one normalized actuator command per motor. The first call sees no
    /// elapsed time, so actuators hold their initial output for that step.
    pub fn update(
        &mut self,
        time: f64,
        kinematics: &VehicleKinematics,
        commands: &[f64],
    ) -> Result<Wrench, InputError> {
        if commands.len() != N {
            return Err(InputError::CommandCount {
                expected: N,
                actual: commands.len(),
            });
        }

        let dt = self.advance_clock(time);
        for ((actuator, motor), &command) in self
            .actuators
            .iter_mut()
            .zip(self.motors.motors())
            .zip(commands)
        {
            actuator.update(&motor.rotor, command, dt);
        }

        let mut propulsion = self.motors.allocate_states(&self.actuators);
        propulsion.force = self
            .environment
            .ground_effect
            .apply(propulsion.force, kinematics.height());

        let wrench = propulsion + self.environment.drag_wrench(kinematics);
        log::trace!("t={} dt={} wrench={:?}", time, dt, wrench.to_array());

        Ok(wrench)
    }

    /// Evaluate with raw RC pulse widths (microseconds) instead of normalized commands.
    pub fn update_pwm(
        &mut self,
        time: f64,
        kinematics: &VehicleKinematics,
        pwm: &[u16],
    ) -> Result<Wrench, InputError> {
        if pwm.len() != N {
            return Err(InputError::CommandCount {
                expected: N,
                actual: pwm.len(),
            });
        }

        let mut commands = [0.; N];
        for (command, &pulse) in commands.iter_mut().zip(pwm) {
            *command = pwm_to_command(pulse);
        }
        self.update(time, kinematics, &commands)
    }

    fn advance_clock(&mut self, time: f64) -> f64 {
        let dt = match self.prev_time {
            Some(prev) => time - prev,
            None => 0.,
        };
        if dt < 0. {
            log::debug!("time went backwards by {}s, holding actuator state", -dt);
        }

        self.prev_time = Some(time);
        dt
    }

    /// Replace the world-frame wind. Applies from the next evaluation on.
    pub fn set_wind(&mut self, wind: Vector3<f64>) {
        self.environment.wind = wind;
    }

    pub fn wind(&self) -> &Vector3<f64> {
        &self.environment.wind
    }

    pub fn actuator_states(&self) -> &[ActuatorState; N] {
        &self.actuators
    }

    pub fn motors(&self) -> &MotorMatrix<N> {
        &self.motors
    }

    pub fn environment(&self) -> &EnvironmentParameters {
        &self.environment
    }

    /// Stop every rotor and forget the previous timestamp.
    pub fn reset(&mut self) {
        self.actuators = [ActuatorState::default(); N];
        self.prev_time = None;
    }
}

impl<const N: usize> ForcesAndMoments for Multirotor<N> {
    fn update_forces_and_torques(
        &mut self,
        time: f64,
        kinematics: &VehicleKinematics,
        commands: &[f64],
    ) -> Result<Wrench, InputError> {
        self.update(time, kinematics, commands)
    }

    fn set_wind(&mut self, wind: Vector3<f64>) {
        self.environment.wind = wind;
    }
}
