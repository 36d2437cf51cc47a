use crate::{Context, Engine, EngineError, EngineSelector, Keypoint};
use ::vaal::{Vaal, VaalError};
use std::{path::Path, sync::Arc};

/// [`Engine`] backed by the VAAL shared library.
#[derive(Clone)]
pub struct VaalEngine {
    vaal: Arc<Vaal>,
}

impl VaalEngine {
    pub fn new(vaal: Arc<Vaal>) -> Self {
        Self { vaal }
    }

    /// Open the VAAL library (see [`Vaal::load`] for the search order).
    pub fn load() -> Result<Self, VaalError> {
        Ok(Self::new(Vaal::load()?))
    }
}

impl Engine for VaalEngine {
    type Context = ::vaal::Context;

    fn version(&self) -> String {
        self.vaal.version()
    }

    fn create_context(&self, engine: &EngineSelector) -> Result<Self::Context, EngineError> {
        Ok(self.vaal.create_context(engine.as_str())?)
    }

    fn probe_model(&self, engine: &EngineSelector, model: &Path) -> Option<Self::Context> {
        self.vaal.probe_model(engine.as_str(), model)
    }

    fn clock_now(&self) -> i64 {
        self.vaal.clock_now()
    }
}

impl Context for ::vaal::Context {
    fn load_model_file(&mut self, path: &Path) -> Result<(), EngineError> {
        Ok(::vaal::Context::load_model_file(self, path)?)
    }

    fn set_parameter_i32(&mut self, name: &str, values: &[i32]) -> Result<(), EngineError> {
        Ok(self.parameter_seti(name, values)?)
    }

    fn load_image_file(&mut self, path: &Path) -> Result<(), EngineError> {
        Ok(::vaal::Context::load_image_file(self, path)?)
    }

    fn run_model(&mut self) -> Result<(), EngineError> {
        Ok(::vaal::Context::run_model(self)?)
    }

    fn keypoints(&mut self, out: &mut [Keypoint]) -> Result<usize, EngineError> {
        Ok(::vaal::Context::keypoints(self, out)?)
    }
}
