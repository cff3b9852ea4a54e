//! Static thrust/torque curves and first-order actuator lag for a single rotor.

use crate::{error::ConfigError, filter, Polynomial};

/// Lowest RC pulse width, in microseconds.
pub const PWM_MIN: u16 = 1000;

/// Highest RC pulse width, in microseconds.
pub const PWM_MAX: u16 = 2000;

/// Convert an RC pulse width (in microseconds) to a normalized command in `[0, 1]`.
pub fn pwm_to_command(pwm: u16) -> f64 {
    let pwm = pwm.clamp(PWM_MIN, PWM_MAX);
    f64::from(pwm - PWM_MIN) / f64::from(PWM_MAX - PWM_MIN)
}

/// Propeller and motor characteristics, fitted from bench data.
#[derive(Debug, Clone, PartialEq)]
pub struct RotorSpec {
    /// Upper bound of the actuator command.
    pub max_command: f64,
    /// Command to thrust force (N).
    pub thrust: Polynomial<f64>,
    /// Command to reaction torque (N·m).
    pub torque: Polynomial<f64>,
    /// Spin-up time constant (s).
    pub tau_up: f64,
    /// Spin-down time constant (s).
    pub tau_down: f64,
}

impl RotorSpec {
    pub fn new(
        max_command: f64,
        thrust: impl Into<Polynomial<f64>>,
        torque: impl Into<Polynomial<f64>>,
        tau_up: f64,
        tau_down: f64,
    ) -> Self {
        Self {
            max_command,
            thrust: thrust.into(),
            torque: torque.into(),
            tau_up,
            tau_down,
        }
    }

    /// Constrain a raw command to `[0, max_command]`.
    pub fn saturate(&self, command: f64) -> f64 {
        if command.is_nan() {
            log::warn!("NaN actuator command, treating as zero");
        }
        filter::constrain(command, 0., self.max_command)
    }

    /// Steady-state `(force, torque)` for a raw command.
    ///
    /// A zero command stops the motor, so it produces neither thrust nor torque even when
    /// the fitted curves have a non-zero constant term.
    pub fn desired(&self, command: f64) -> (f64, f64) {
        let command = self.saturate(command);
        if command <= 0. {
            return (0., 0.);
        }

        (self.thrust.eval(command), self.torque.eval(command))
    }

    /// Time constant for moving from `current` toward `desired`.
    pub fn time_constant(&self, current: f64, desired: f64) -> f64 {
        if desired > current {
            self.tau_up
        } else {
            self.tau_down
        }
    }

    pub(crate) fn validate(&self, motor: usize) -> Result<(), ConfigError> {
        if !self.max_command.is_finite() {
            return Err(ConfigError::NonFinite {
                motor,
                field: "max_command",
            });
        }
        if self.max_command <= 0. {
            return Err(ConfigError::NonPositiveMaxCommand {
                motor,
                value: self.max_command,
            });
        }

        for (curve, poly) in [("thrust", &self.thrust), ("torque", &self.torque)] {
            if poly.is_empty() {
                return Err(ConfigError::EmptyPolynomial { motor, curve });
            }
            if !poly.is_finite() {
                return Err(ConfigError::NonFinite {
                    motor,
                    field: curve,
                });
            }
        }

        for (field, value) in [("tau_up", self.tau_up), ("tau_down", self.tau_down)] {
            if value.is_nan() || value <= 0. {
                return Err(ConfigError::NonPositiveTimeConstant {
                    motor,
                    field,
                    value,
                });
            }
        }

        Ok(())
    }
}

/// The physically realized output of one rotor, carried between steps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActuatorState {
    /// Thrust (N).
    pub force: f64,
    /// Reaction torque (N·m).
    pub torque: f64,
}

impl ActuatorState {
    /// Advance toward the steady-state output of `command` over `dt` seconds.
    ///
    /// The time constant is chosen by comparing desired and current thrust and is shared by
    /// force and torque. A non-positive `dt` holds the current output.
    pub fn update(&mut self, rotor: &RotorSpec, command: f64, dt: f64) {
        let (force, torque) = rotor.desired(command);
        if !(dt > 0.) {
            return;
        }

        let alpha = filter::alpha(dt, rotor.time_constant(self.force, force));
        self.force = filter::lag(self.force, force, alpha);
        self.torque = filter::lag(self.torque, torque, alpha);
    }
}
