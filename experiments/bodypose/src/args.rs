use clap::Parser;
use inference::{Normalization, PipelineConfig};
use std::path::PathBuf;

/// Estimate body poses in images with a VAAL pose model.
#[derive(Parser, Debug)]
#[command(name = "bodypose", disable_version_flag = true)]
pub struct Args {
    /// Print the VAAL library version and exit
    #[arg(short, long)]
    pub version: bool,

    /// Compute engine running the model
    #[arg(short, long, default_value = "npu")]
    pub engine: String,

    /// Image normalization: raw, unsigned, signed, whitening or imagenet
    #[arg(short, long, default_value = "raw")]
    pub norm: Normalization,

    /// Pose model (.rtm)
    pub model: Option<PathBuf>,

    /// Images to process, in order
    pub images: Vec<PathBuf>,
}

impl Args {
    pub fn into_config(self) -> anyhow::Result<PipelineConfig> {
        let Some(model) = self.model else {
            anyhow::bail!("missing required model, try --help for usage");
        };
        Ok(PipelineConfig::new(model)
            .with_engine(self.engine)
            .with_normalization(self.norm)
            .with_images(self.images))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inference::EngineSelector;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bodypose", "pose.rtm", "a.jpg", "b.jpg"]).unwrap();
        assert!(!args.version);

        let config = args.into_config().unwrap();
        assert_eq!(config.engine(), &EngineSelector::new("npu"));
        assert_eq!(config.run().normalization, Normalization::Raw);
        assert_eq!(config.model(), PathBuf::from("pose.rtm").as_path());
        assert_eq!(config.images().len(), 2);
    }

    #[test]
    fn test_engine_and_norm() {
        let args = Args::try_parse_from([
            "bodypose", "-e", "cpu", "--norm", "imagenet", "pose.rtm", "a.jpg",
        ])
        .unwrap();

        let config = args.into_config().unwrap();
        assert_eq!(config.engine().as_str(), "cpu");
        assert_eq!(config.run().normalization, Normalization::Imagenet);
    }

    #[test]
    fn test_unknown_norm_is_rejected() {
        let err = Args::try_parse_from(["bodypose", "-n", "zscore", "pose.rtm"]).unwrap_err();
        assert!(
            err.to_string()
                .contains("unsupported image normalization method: zscore")
        );
    }

    #[test]
    fn test_norm_is_case_sensitive() {
        assert!(Args::try_parse_from(["bodypose", "-n", "ImageNet", "pose.rtm"]).is_err());
    }

    #[test]
    fn test_version_without_model() {
        let args = Args::try_parse_from(["bodypose", "-v"]).unwrap();
        assert!(args.version);
        assert!(args.model.is_none());
    }

    #[test]
    fn test_missing_model() {
        let args = Args::try_parse_from(["bodypose", "-e", "gpu"]).unwrap();
        let err = args.into_config().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required model, try --help for usage"
        );
    }

    #[test]
    fn test_model_without_images() {
        let args = Args::try_parse_from(["bodypose", "pose.rtm"]).unwrap();
        assert!(args.into_config().unwrap().images().is_empty());
    }

    #[test]
    fn test_unknown_option() {
        assert!(Args::try_parse_from(["bodypose", "--threads", "4", "pose.rtm"]).is_err());
    }
}
