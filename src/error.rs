use std::error::Error;
use std::fmt;

pub type QuatResult<T> = Result<T, QuatError>;

#[derive(Debug, Clone, PartialEq)]
pub enum QuatError {
    IndexOutOfRange { index: usize },
    InvalidLength { len: usize },
    ZeroMagnitude,
    Config(ConfigError),
}
impl From<ConfigError> for QuatError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
impl fmt::Display for QuatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuatError::IndexOutOfRange { index } => {
                write!(f, "quaternion index out of range: {index} (expected 0..4)")
            }
            QuatError::InvalidLength { len } => {
                write!(f, "expected 4 quaternion components, got {len}")
            }
            QuatError::ZeroMagnitude => {
                write!(f, "cannot normalize a zero-magnitude quaternion")
            }
            QuatError::Config(err) => {
                write!(f, "{err}")
            }
        }
    }
}
impl Error for QuatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QuatError::Config(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors produced while parsing command line arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidNumber(String, String),
    MissingValue(String),
    ZeroVector(String),
}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber(flag, arg) => {
                write!(f, "
                    \rInvalid value for {flag}: {arg}",
                )
            }
            ConfigError::MissingValue(flag) => {
                write!(f, "
                    \rMissing value for {flag}",
                )
            }
            ConfigError::ZeroVector(flag) => {
                write!(f, "
                    \r{flag} must not be the zero vector",
                )
            }
        }
    }
}
impl Error for ConfigError {}

#[test]
fn config_error_is_source() {
    let err = QuatError::from(ConfigError::MissingValue(String::from("-axis")));
    assert!(err.source().is_some());
    assert!(err.to_string().contains("-axis"));
}
