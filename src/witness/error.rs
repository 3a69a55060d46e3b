use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessErrorKind {
    InvalidConfig,
    Transport,
    InvalidResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessError {
    pub kind: WitnessErrorKind,
    pub message: String,
}

impl WitnessError {
    pub fn new(kind: WitnessErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for WitnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for WitnessError {}

pub fn invalid_config(message: impl Into<String>) -> WitnessError {
    WitnessError::new(WitnessErrorKind::InvalidConfig, message)
}

pub fn transport_error(message: impl Into<String>) -> WitnessError {
    WitnessError::new(WitnessErrorKind::Transport, message)
}

pub fn invalid_response(message: impl Into<String>) -> WitnessError {
    WitnessError::new(WitnessErrorKind::InvalidResponse, message)
}
