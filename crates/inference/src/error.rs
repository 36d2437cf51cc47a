use std::{fmt, path::PathBuf};

/// Failure reported by the inference engine: its status code and the
/// engine's own description of it.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineError {
    pub code: i32,
    pub message: String,
}

impl EngineError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EngineError {}

impl From<vaal::VaalError> for EngineError {
    fn from(err: vaal::VaalError) -> Self {
        EngineError::new(err.status(), err.message())
    }
}

#[derive(Debug)]
pub enum InferError {
    EngineUnavailable { engine: String, source: EngineError },
    ModelLoad { path: PathBuf, source: EngineError },
    UnknownParameter { name: String, source: EngineError },
    ImageLoad { path: PathBuf, source: EngineError },
    Inference(EngineError),
    Decode(EngineError),
    Io(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::EngineUnavailable { engine, source } => {
                write!(f, "failed to create {engine} context: {source}")
            }
            InferError::ModelLoad { source, .. } => write!(f, "failed to load model: {source}"),
            InferError::UnknownParameter { name, source } => {
                write!(f, "failed to set parameter {name}: {source}")
            }
            InferError::ImageLoad { path, source } => {
                write!(f, "failed to load {}: {source}", path.display())
            }
            InferError::Inference(source) => write!(f, "failed to run model: {source}"),
            InferError::Decode(source) => write!(f, "keypoint detection failed: {source}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_engine_status_keeps_code_and_text() {
        let status = vaal::VaalError::from_status(5, "model not loaded".to_string());
        let err = EngineError::from(status);
        assert_eq!(err.code, 5);
        assert_eq!(err.message, "model not loaded");
        assert_eq!(
            InferError::Inference(err).to_string(),
            "failed to run model: model not loaded"
        );
    }

    #[test]
    fn test_binding_error_maps_to_minus_one() {
        let missing = Path::new("/nonexistent/libvaal-missing.so");
        let vaal_err = match vaal::Vaal::open(missing) {
            Ok(_) => panic!("opening a nonexistent library should fail"),
            Err(err) => err,
        };
        let message = vaal_err.message().to_string();

        let err = EngineError::from(vaal_err);
        assert_eq!(err.code, -1);
        assert_eq!(err.message, message);
        assert!(err.message.contains("libvaal-missing.so"));
    }
}
