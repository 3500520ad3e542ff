use std::error::Error;
use std::fmt;
use std::io;

/// Errors surfaced by the simulation library.
///
/// Steady-state ticking never fails; everything here is either a
/// construction-time rejection or a lifecycle failure of the physics thread.
#[derive(Debug)]
pub enum SimError {
    /// A configuration value is out of range.
    InvalidConfig { field: String, reason: String },
    /// The configuration file could not be read.
    ConfigIo(io::Error),
    /// The configuration file is not valid JSON for `SimConfig`.
    ConfigParse(serde_json::Error),
    /// A command-line argument could not be understood.
    InvalidArgument(String),
    /// A tick panicked while holding the state lock.
    LockPoisoned,
    /// The physics thread panicked and could not be joined cleanly.
    PhysicsThreadPanicked,
    /// The OS refused to spawn the physics thread.
    ThreadSpawn(io::Error),
}

impl SimError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SimError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration `{}`: {}", field, reason)
            }
            SimError::ConfigIo(e) => write!(f, "failed to read configuration: {}", e),
            SimError::ConfigParse(e) => write!(f, "failed to parse configuration: {}", e),
            SimError::InvalidArgument(arg) => write!(f, "invalid argument: {}", arg),
            SimError::LockPoisoned => write!(f, "simulation state lock poisoned"),
            SimError::PhysicsThreadPanicked => write!(f, "physics thread panicked"),
            SimError::ThreadSpawn(e) => write!(f, "failed to spawn physics thread: {}", e),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::ConfigIo(e) | SimError::ThreadSpawn(e) => Some(e),
            SimError::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::ConfigParse(e)
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
