//! Runtime binding to the DeepView VAAL inference library.
//!
//! The shared library is opened with `libloading` when [`Vaal::load`] is
//! called, so nothing links against `libvaal` at build time. Every context
//! handed out keeps the library alive and releases itself on drop.

pub mod context;
pub mod error;
pub mod ffi;
pub mod keypoint;
pub mod library;

pub use context::Context;
pub use error::{ErrorCode, Result, VaalError};
pub use ffi::{
    VAAL_IMAGE_PROC_IMAGENET, VAAL_IMAGE_PROC_RAW, VAAL_IMAGE_PROC_SIGNED_NORM,
    VAAL_IMAGE_PROC_UNSIGNED_NORM, VAAL_IMAGE_PROC_WHITENING,
};
pub use keypoint::Keypoint;
pub use library::{DEFAULT_LIBRARY_NAMES, LIBRARY_ENV, Vaal};
