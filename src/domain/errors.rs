use std::fmt;

// Errors raised by rotor state persistence.
#[derive(Debug)]
pub enum StoreError {
    // Stored value exists but is not a usable integer.
    Malformed { field: String },
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Malformed { field } => write!(f, "stored field {field:?} is malformed"),
            StoreError::Io(error) => write!(f, "state store io error: {error}"),
            StoreError::Serialization(error) => write!(f, "state store serialization error: {error}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Malformed { .. } => None,
            StoreError::Io(error) => Some(error),
            StoreError::Serialization(error) => Some(error),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Serialization(error)
    }
}
