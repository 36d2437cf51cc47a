use crate::{EngineError, Keypoint};
use std::{convert::Infallible, fmt, path::Path, str::FromStr};

/// Name of the compute engine a context is bound to ("cpu", "npu", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSelector(String);

impl EngineSelector {
    pub const DEFAULT: &'static str = "npu";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EngineSelector {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for EngineSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EngineSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for EngineSelector {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EngineSelector {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The inference library: creates contexts and provides the clock.
pub trait Engine {
    type Context: Context;

    fn version(&self) -> String;

    /// Create an empty context on the named engine.
    fn create_context(&self, engine: &EngineSelector) -> Result<Self::Context, EngineError>;

    /// Search engine variants compatible with `engine` for one that can load
    /// `model`. The returned context already holds the model.
    fn probe_model(&self, engine: &EngineSelector, model: &Path) -> Option<Self::Context>;

    /// Monotonic timestamp in nanoseconds.
    fn clock_now(&self) -> i64;
}

/// A model bound to a compute engine. Dropping it releases it.
pub trait Context {
    fn load_model_file(&mut self, path: &Path) -> Result<(), EngineError>;

    fn set_parameter_i32(&mut self, name: &str, values: &[i32]) -> Result<(), EngineError>;

    /// Decode an image into the model's input slot.
    fn load_image_file(&mut self, path: &Path) -> Result<(), EngineError>;

    fn run_model(&mut self) -> Result<(), EngineError>;

    /// Decode keypoints into `out` and return how many the engine found.
    /// `out.len()` is the capacity declared to the engine.
    fn keypoints(&mut self, out: &mut [Keypoint]) -> Result<usize, EngineError>;
}
