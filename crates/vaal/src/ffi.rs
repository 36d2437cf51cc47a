use crate::Keypoint;
use std::ffi::{c_char, c_int, c_void};

#[repr(C)]
pub struct VAALContext {
    _private: [u8; 0],
}

/// Status code returned by most VAAL calls. Zero is success.
pub type VAALError = c_int;

pub const VAAL_SUCCESS: VAALError = 0;

// Image processing flags accepted by the "normalization" parameter
pub const VAAL_IMAGE_PROC_RAW: i32 = 0x0000;
pub const VAAL_IMAGE_PROC_UNSIGNED_NORM: i32 = 0x0001;
pub const VAAL_IMAGE_PROC_WHITENING: i32 = 0x0002;
pub const VAAL_IMAGE_PROC_SIGNED_NORM: i32 = 0x0004;
pub const VAAL_IMAGE_PROC_IMAGENET: i32 = 0x0008;

pub type VersionFn = unsafe extern "C" fn(
    major: *mut c_int,
    minor: *mut c_int,
    patch: *mut c_int,
    extra: *mut *const c_char,
) -> *const c_char;
pub type StrErrorFn = unsafe extern "C" fn(err: VAALError) -> *const c_char;
pub type ClockNowFn = unsafe extern "C" fn() -> i64;
pub type ContextCreateFn = unsafe extern "C" fn(engine: *const c_char) -> *mut VAALContext;
pub type ContextReleaseFn = unsafe extern "C" fn(ctx: *mut VAALContext);
pub type LoadModelFileFn =
    unsafe extern "C" fn(ctx: *mut VAALContext, filename: *const c_char) -> VAALError;
pub type ModelProbeFn =
    unsafe extern "C" fn(engine: *const c_char, filename: *const c_char) -> *mut VAALContext;
pub type ParameterSetiFn = unsafe extern "C" fn(
    ctx: *mut VAALContext,
    name: *const c_char,
    value: *const i32,
    count: usize,
) -> VAALError;
pub type LoadImageFileFn = unsafe extern "C" fn(
    ctx: *mut VAALContext,
    tensor: *mut c_void,
    filename: *const c_char,
    roi: *const i32,
    proc_: u32,
) -> VAALError;
pub type RunModelFn = unsafe extern "C" fn(ctx: *mut VAALContext) -> VAALError;
pub type KeypointsFn = unsafe extern "C" fn(
    ctx: *mut VAALContext,
    keypoints: *mut Keypoint,
    max_keypoints: usize,
    num_keypoints: *mut usize,
) -> VAALError;

pub const SYM_VERSION: &[u8] = b"vaal_version\0";
pub const SYM_STRERROR: &[u8] = b"vaal_strerror\0";
pub const SYM_CLOCK_NOW: &[u8] = b"vaal_clock_now\0";
pub const SYM_CONTEXT_CREATE: &[u8] = b"vaal_context_create\0";
pub const SYM_CONTEXT_RELEASE: &[u8] = b"vaal_context_release\0";
pub const SYM_LOAD_MODEL_FILE: &[u8] = b"vaal_load_model_file\0";
pub const SYM_MODEL_PROBE: &[u8] = b"vaal_model_probe\0";
pub const SYM_PARAMETER_SETI: &[u8] = b"vaal_parameter_seti\0";
pub const SYM_LOAD_IMAGE_FILE: &[u8] = b"vaal_load_image_file\0";
pub const SYM_RUN_MODEL: &[u8] = b"vaal_run_model\0";
pub const SYM_KEYPOINTS: &[u8] = b"vaal_keypoints\0";
