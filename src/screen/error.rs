use super::ScreenId;
use std::fmt;

/// Errors that can occur while switching screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// No screen is registered under this id
    UnknownScreen(ScreenId),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScreenError::UnknownScreen(id) => {
                write!(f, "Unknown screen: {}", id)
            }
        }
    }
}

impl std::error::Error for ScreenError {}

impl From<ScreenError> for String {
    fn from(error: ScreenError) -> Self {
        error.to_string()
    }
}
