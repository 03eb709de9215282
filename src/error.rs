//! Error types for rolepanel

/// The main error type for panel operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelError(pub String);

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PanelError {}

/// Result type alias for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;

/// Convert any error to PanelError
pub fn err<E: std::error::Error>(e: E) -> PanelError {
    PanelError(e.to_string())
}
