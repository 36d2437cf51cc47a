use crate::{
    Acquired, Context, Engine, InferError, Keypoint, KeypointBuffer, MAX_KEYPOINTS,
    Normalization, PipelineConfig, acquire, report,
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Name of the engine parameter carrying the normalization flag.
pub const NORMALIZATION_PARAMETER: &str = "normalization";

/// Per-run settings applied once, before the first image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub normalization: Normalization,
}

impl RunConfig {
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }
}

/// Apply the run configuration to a freshly acquired context.
pub fn configure<C: Context>(context: &mut C, config: &RunConfig) -> Result<(), InferError> {
    let code = config.normalization.code();
    context
        .set_parameter_i32(NORMALIZATION_PARAMETER, &[code])
        .map_err(|source| InferError::UnknownParameter {
            name: NORMALIZATION_PARAMETER.to_string(),
            source,
        })?;
    log::debug!("normalization {} ({:#06x})", config.normalization, code);
    Ok(())
}

/// Elapsed engine-clock nanoseconds of the three stages of one image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageTiming {
    pub load_ns: i64,
    pub infer_ns: i64,
    pub decode_ns: i64,
}

impl StageTiming {
    pub fn load_ms(&self) -> f64 {
        self.load_ns as f64 / 1e6
    }

    pub fn infer_ms(&self) -> f64 {
        self.infer_ns as f64 / 1e6
    }

    pub fn decode_ms(&self) -> f64 {
        self.decode_ns as f64 / 1e6
    }
}

/// Result of one image, borrowing the pipeline's keypoint buffer.
#[derive(Debug)]
pub struct ImageResult<'a> {
    pub timing: StageTiming,
    pub keypoints: &'a [Keypoint],
}

/// A configured context plus its keypoint buffer.
///
/// Only a configured pipeline can process images and it offers no way to
/// change the run configuration afterwards. Dropping it releases the context.
pub struct Pipeline<'e, E: Engine> {
    engine: &'e E,
    context: E::Context,
    keypoints: KeypointBuffer<MAX_KEYPOINTS>,
    config: RunConfig,
}

impl<'e, E: Engine> Pipeline<'e, E> {
    pub fn new(
        engine: &'e E,
        acquired: Acquired<E::Context>,
        config: RunConfig,
    ) -> Result<Self, InferError> {
        let mut context = acquired.into_context();
        configure(&mut context, &config)?;
        Ok(Self {
            engine,
            context,
            keypoints: KeypointBuffer::new(),
            config,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Load, infer and decode one image
    pub fn process(&mut self, image: &Path) -> Result<ImageResult<'_>, InferError> {
        let start = self.engine.clock_now();
        self.context
            .load_image_file(image)
            .map_err(|source| InferError::ImageLoad {
                path: PathBuf::from(image),
                source,
            })?;
        let load_ns = self.engine.clock_now() - start;

        let start = self.engine.clock_now();
        let ran = self.context.run_model();
        let infer_ns = self.engine.clock_now() - start;
        ran.map_err(InferError::Inference)?;

        let start = self.engine.clock_now();
        let context = &mut self.context;
        self.keypoints
            .fill(|slots| context.keypoints(slots))
            .map_err(InferError::Decode)?;
        let decode_ns = self.engine.clock_now() - start;

        Ok(ImageResult {
            timing: StageTiming {
                load_ns,
                infer_ns,
                decode_ns,
            },
            keypoints: self.keypoints.as_slice(),
        })
    }

    /// Process `images` in order, writing each report to `out` as soon as the
    /// image completes. The first failure aborts the rest of the batch.
    ///
    /// Returns the number of images reported.
    pub fn run<P, W>(&mut self, images: &[P], out: &mut W) -> Result<usize, InferError>
    where
        P: AsRef<Path>,
        W: Write,
    {
        for image in images {
            let image = image.as_ref();
            log::debug!("processing {}", image.display());
            let result = self.process(image)?;
            report::write_image(out, &result)?;
        }
        Ok(images.len())
    }
}

/// Acquire, configure and run a whole batch described by `config`.
pub fn run_batch<E, W>(
    engine: &E,
    config: &PipelineConfig,
    out: &mut W,
) -> Result<usize, InferError>
where
    E: Engine,
    W: Write,
{
    let acquired = acquire(engine, config.engine(), config.model())?;
    let mut pipeline = Pipeline::new(engine, acquired, *config.run())?;
    pipeline.run(config.images(), out)
}
