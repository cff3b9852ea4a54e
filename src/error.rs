use core::fmt;

/// An inconsistent or incomplete vehicle configuration.
///
/// Raised once, when a [`Multirotor`](crate::Multirotor) is built. Propulsion and
/// airframe coefficients only make sense as a complete set, so nothing is defaulted.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required builder field was never set.
    Missing(&'static str),
    /// The vehicle has no motors.
    NoMotors,
    /// A thrust or torque curve has no coefficients.
    EmptyPolynomial { motor: usize, curve: &'static str },
    /// A coefficient, position or axis component is NaN or infinite.
    NonFinite { motor: usize, field: &'static str },
    NonPositiveMaxCommand { motor: usize, value: f64 },
    NonPositiveTimeConstant {
        motor: usize,
        field: &'static str,
        value: f64,
    },
    /// The thrust axis is not a unit vector.
    NonUnitAxis { motor: usize, norm: f64 },
    /// A spin direction other than +1 (clockwise) or -1 (counter-clockwise).
    InvalidSpin(i8),
    NegativeDrag { field: &'static str, value: f64 },
    InvalidGroundEffect { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(field) => write!(f, "missing configuration field `{}`", field),
            ConfigError::NoMotors => write!(f, "vehicle must have at least one motor"),
            ConfigError::EmptyPolynomial { motor, curve } => {
                write!(f, "motor {}: {} polynomial has no coefficients", motor, curve)
            }
            ConfigError::NonFinite { motor, field } => {
                write!(f, "motor {}: `{}` is not finite", motor, field)
            }
            ConfigError::NonPositiveMaxCommand { motor, value } => {
                write!(f, "motor {}: max command must be positive, got {}", motor, value)
            }
            ConfigError::NonPositiveTimeConstant {
                motor,
                field,
                value,
            } => write!(
                f,
                "motor {}: time constant `{}` must be positive, got {}",
                motor, field, value
            ),
            ConfigError::NonUnitAxis { motor, norm } => {
                write!(f, "motor {}: thrust axis must be unit length, norm is {}", motor, norm)
            }
            ConfigError::InvalidSpin(value) => {
                write!(f, "spin direction must be 1 or -1, got {}", value)
            }
            ConfigError::NegativeDrag { field, value } => {
                write!(f, "drag coefficient `{}` must be non-negative, got {}", field, value)
            }
            ConfigError::InvalidGroundEffect { field, value } => {
                write!(f, "invalid ground effect `{}`: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A caller broke the per-step input contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The actuator command slice does not have one entry per motor.
    CommandCount { expected: usize, actual: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::CommandCount { expected, actual } => write!(
                f,
                "expected {} actuator commands, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Config(ConfigError),
    Input(InputError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "configuration error: {}", e),
            Error::Input(e) => write!(f, "input error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Input(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(config_error: ConfigError) -> Self {
        Error::Config(config_error)
    }
}

impl From<InputError> for Error {
    fn from(input_error: InputError) -> Self {
        Error::Input(input_error)
    }
}
