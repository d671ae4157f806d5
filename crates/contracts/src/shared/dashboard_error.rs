use serde::{Deserialize, Serialize};

/// Result of a dashboard operation
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error raised while preparing or running a dashboard request.
///
/// Every error stays local to the panel that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_TRANSPORT: &str = "TRANSPORT_ERROR";
pub const CODE_NO_DATA: &str = "NO_DATA";
pub const CODE_UNSUPPORTED_PLATFORM: &str = "UNSUPPORTED_PLATFORM";

impl DashboardError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Selection does not satisfy the form rules
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(CODE_VALIDATION, message)
    }

    /// Network failure, non-2xx status or unreadable body
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(CODE_TRANSPORT, message)
    }

    /// Server answered with a falsy status
    pub fn no_data() -> Self {
        Self::new(CODE_NO_DATA, "No data found for the specified dates.")
    }

    /// Live mode requested for a platform without a live source
    pub fn unsupported_platform(name: &str) -> Self {
        Self::new(
            CODE_UNSUPPORTED_PLATFORM,
            format!("Live data is not available for platform '{}'", name),
        )
    }

    pub fn is_validation(&self) -> bool {
        self.code == CODE_VALIDATION
    }
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for DashboardError {}
