use crate::{EngineSelector, Normalization, RunConfig};
use std::path::{Path, PathBuf};

/// Everything needed to run one batch: engine, model, run settings and the
/// images to process, in order.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    engine: EngineSelector,
    model: PathBuf,
    run: RunConfig,
    images: Vec<PathBuf>,
}

impl PipelineConfig {
    /// A configuration for `model` on the default engine, with raw
    /// normalization and no images.
    pub fn new(model: impl Into<PathBuf>) -> Self {
        Self {
            engine: EngineSelector::default(),
            model: model.into(),
            run: RunConfig::default(),
            images: Vec::new(),
        }
    }

    /// Set the compute engine (e.g., "cpu", "npu").
    pub fn with_engine(mut self, engine: impl Into<EngineSelector>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.run = self.run.with_normalization(normalization);
        self
    }

    /// Set the images to process, in order.
    pub fn with_images<I, P>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    // Getters
    pub fn engine(&self) -> &EngineSelector {
        &self.engine
    }

    pub fn model(&self) -> &Path {
        &self.model
    }

    pub fn run(&self) -> &RunConfig {
        &self.run
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }
}
