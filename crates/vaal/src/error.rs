use std::fmt;

/// Where a [`VaalError`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The shared library could not be opened or a symbol is missing
    Library,
    /// `vaal_context_create` returned no context for the requested engine
    EngineUnavailable,
    /// A name or path could not be passed to the engine as a C string
    InvalidArgument,
    /// Non-zero status returned by the engine
    Engine(i32),
}

/// Error type for VAAL operations
#[derive(Debug, Clone)]
pub struct VaalError {
    code: ErrorCode,
    message: String,
}

impl VaalError {
    pub(crate) fn library(msg: impl Into<String>) -> Self {
        VaalError {
            code: ErrorCode::Library,
            message: msg.into(),
        }
    }

    pub(crate) fn engine_unavailable(engine: &str) -> Self {
        VaalError {
            code: ErrorCode::EngineUnavailable,
            message: format!("no context available for engine \"{}\"", engine),
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        VaalError {
            code: ErrorCode::InvalidArgument,
            message: msg.into(),
        }
    }

    /// Wrap a non-zero engine status with its `vaal_strerror` text
    pub fn from_status(status: i32, message: String) -> Self {
        VaalError {
            code: ErrorCode::Engine(status),
            message,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Engine status code, or -1 for errors raised on this side of the binding
    pub fn status(&self) -> i32 {
        match self.code {
            ErrorCode::Engine(status) => status,
            _ => -1,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for VaalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for VaalError {}

/// Result type for VAAL operations
pub type Result<T> = std::result::Result<T, VaalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_implements_error_trait() {
        let err = VaalError::library("missing");
        fn assert_error<T: std::error::Error>(_: &T) {}
        assert_error(&err);
    }

    #[test]
    fn test_status_of_engine_error() {
        let err = VaalError::from_status(7, "file not found".to_string());
        assert_eq!(err.code(), ErrorCode::Engine(7));
        assert_eq!(err.status(), 7);
        assert_eq!(err.to_string(), "file not found");
    }

    #[test]
    fn test_status_of_local_errors() {
        assert_eq!(VaalError::library("x").status(), -1);
        assert_eq!(VaalError::invalid_argument("x").status(), -1);

        let err = VaalError::engine_unavailable("npu");
        assert_eq!(err.code(), ErrorCode::EngineUnavailable);
        assert!(err.message().contains("npu"));
    }
}
