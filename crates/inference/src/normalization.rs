use std::{fmt, str::FromStr};

/// Preprocessing applied by the engine to input pixels before inference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Normalization {
    /// No processing
    #[default]
    Raw,
    /// Scale to 0...1
    Unsigned,
    /// Scale to -1...1
    Signed,
    /// Per-image standardization
    Whitening,
    /// Standardization using the ImageNet mean and deviation
    Imagenet,
}

impl Normalization {
    pub const ALL: [Normalization; 5] = [
        Normalization::Raw,
        Normalization::Unsigned,
        Normalization::Signed,
        Normalization::Whitening,
        Normalization::Imagenet,
    ];

    /// Image processing flag the engine expects for this mode
    pub fn code(self) -> i32 {
        match self {
            Normalization::Raw => vaal::VAAL_IMAGE_PROC_RAW,
            Normalization::Unsigned => vaal::VAAL_IMAGE_PROC_UNSIGNED_NORM,
            Normalization::Signed => vaal::VAAL_IMAGE_PROC_SIGNED_NORM,
            Normalization::Whitening => vaal::VAAL_IMAGE_PROC_WHITENING,
            Normalization::Imagenet => vaal::VAAL_IMAGE_PROC_IMAGENET,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Normalization::Raw => "raw",
            Normalization::Unsigned => "unsigned",
            Normalization::Signed => "signed",
            Normalization::Whitening => "whitening",
            Normalization::Imagenet => "imagenet",
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationError(pub String);

impl fmt::Display for NormalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported image normalization method: {}", self.0)
    }
}

impl std::error::Error for NormalizationError {}

impl FromStr for Normalization {
    type Err = NormalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Normalization::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| NormalizationError(s.to_string()))
    }
}
