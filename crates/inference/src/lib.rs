pub mod acquire;
pub mod backends;
pub mod config;
pub mod engine;
pub mod error;
pub mod keypoints;
pub mod normalization;
pub mod pipeline;
pub mod report;

pub use acquire::{Acquired, Route, acquire};
pub use backends::VaalEngine;
pub use config::PipelineConfig;
pub use engine::{Context, Engine, EngineSelector};
pub use error::{EngineError, InferError};
pub use keypoints::{Keypoint, KeypointBuffer, MAX_KEYPOINTS};
pub use normalization::{Normalization, NormalizationError};
pub use pipeline::{
    ImageResult, NORMALIZATION_PARAMETER, Pipeline, RunConfig, StageTiming, configure, run_batch,
};
