use crate::{Context, Result, VaalError, ffi};
use libloading::Library;
use std::{
    ffi::{CStr, CString, OsStr, c_char},
    path::Path,
    ptr::{NonNull, null_mut},
    sync::Arc,
};

/// Environment variable naming the full path of the VAAL shared library.
pub const LIBRARY_ENV: &str = "VAAL_LIBRARY";

/// Names tried, in order, when `VAAL_LIBRARY` is not set.
pub const DEFAULT_LIBRARY_NAMES: &[&str] =
    &["libvaal.so", "libvaal.so.1", "libvaal.dylib", "vaal.dll"];

/// The opened VAAL library and its resolved entry points.
pub struct Vaal {
    version: ffi::VersionFn,
    strerror: ffi::StrErrorFn,
    clock_now: ffi::ClockNowFn,
    context_create: ffi::ContextCreateFn,
    model_probe: ffi::ModelProbeFn,
    pub(crate) context_release: ffi::ContextReleaseFn,
    pub(crate) load_model_file: ffi::LoadModelFileFn,
    pub(crate) parameter_seti: ffi::ParameterSetiFn,
    pub(crate) load_image_file: ffi::LoadImageFileFn,
    pub(crate) run_model: ffi::RunModelFn,
    pub(crate) keypoints: ffi::KeypointsFn,
    // entry points above are only valid while the library stays open
    _library: Library,
}

impl Vaal {
    /// Open the library from `VAAL_LIBRARY`, or else the first default name
    /// the platform loader can resolve.
    pub fn load() -> Result<Arc<Self>> {
        if let Some(path) = std::env::var_os(LIBRARY_ENV) {
            return Self::open(path);
        }

        let mut last_error = None;
        for name in DEFAULT_LIBRARY_NAMES {
            match Self::open(name) {
                Ok(vaal) => return Ok(vaal),
                Err(error) => {
                    log::debug!("{}", error);
                    last_error = Some(error);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| VaalError::library("no library names to try")))
    }

    /// Open the library at `path` and resolve every entry point.
    pub fn open(path: impl AsRef<OsStr>) -> Result<Arc<Self>> {
        let path = path.as_ref();
        let library = unsafe { Library::new(path) }.map_err(|e| {
            VaalError::library(format!("failed to open {}: {}", path.to_string_lossy(), e))
        })?;

        let vaal = unsafe {
            Vaal {
                version: symbol(&library, ffi::SYM_VERSION)?,
                strerror: symbol(&library, ffi::SYM_STRERROR)?,
                clock_now: symbol(&library, ffi::SYM_CLOCK_NOW)?,
                context_create: symbol(&library, ffi::SYM_CONTEXT_CREATE)?,
                model_probe: symbol(&library, ffi::SYM_MODEL_PROBE)?,
                context_release: symbol(&library, ffi::SYM_CONTEXT_RELEASE)?,
                load_model_file: symbol(&library, ffi::SYM_LOAD_MODEL_FILE)?,
                parameter_seti: symbol(&library, ffi::SYM_PARAMETER_SETI)?,
                load_image_file: symbol(&library, ffi::SYM_LOAD_IMAGE_FILE)?,
                run_model: symbol(&library, ffi::SYM_RUN_MODEL)?,
                keypoints: symbol(&library, ffi::SYM_KEYPOINTS)?,
                _library: library,
            }
        };

        log::debug!("opened VAAL library {}", path.to_string_lossy());
        Ok(Arc::new(vaal))
    }

    /// Library version string, e.g. "1.4.0".
    pub fn version(&self) -> String {
        let ptr = unsafe { (self.version)(null_mut(), null_mut(), null_mut(), null_mut()) };
        string_from(ptr).unwrap_or_else(|| "unknown".to_string())
    }

    /// Human-readable text for an engine status code.
    pub fn strerror(&self, status: ffi::VAALError) -> String {
        let ptr = unsafe { (self.strerror)(status) };
        string_from(ptr).unwrap_or_else(|| format!("unknown error {}", status))
    }

    /// Monotonic timestamp in nanoseconds.
    pub fn clock_now(&self) -> i64 {
        unsafe { (self.clock_now)() }
    }

    /// Create an empty context bound to the named compute engine.
    pub fn create_context(self: &Arc<Self>, engine: &str) -> Result<Context> {
        let c_engine = c_string(engine)?;
        let ptr = unsafe { (self.context_create)(c_engine.as_ptr()) };
        match NonNull::new(ptr) {
            Some(ptr) => Ok(Context::new(Arc::clone(self), ptr)),
            None => Err(VaalError::engine_unavailable(engine)),
        }
    }

    /// Let the library search for an engine configuration able to load
    /// `model`. Returns a context with the model already loaded.
    pub fn probe_model(self: &Arc<Self>, engine: &str, model: &Path) -> Option<Context> {
        let (c_engine, c_model) = match (c_string(engine), c_path(model)) {
            (Ok(engine), Ok(model)) => (engine, model),
            (Err(error), _) | (_, Err(error)) => {
                log::debug!("probe skipped: {}", error);
                return None;
            }
        };
        let ptr = unsafe { (self.model_probe)(c_engine.as_ptr(), c_model.as_ptr()) };
        NonNull::new(ptr).map(|ptr| Context::new(Arc::clone(self), ptr))
    }

    /// Convert an engine status into a `Result`.
    pub(crate) fn check(&self, status: ffi::VAALError) -> Result<()> {
        if status == ffi::VAAL_SUCCESS {
            Ok(())
        } else {
            Err(VaalError::from_status(status, self.strerror(status)))
        }
    }
}

/// Resolve one entry point as a plain function pointer.
///
/// # Safety
/// `T` must be the exact function pointer type of the named symbol.
unsafe fn symbol<T: Copy>(library: &Library, name: &[u8]) -> Result<T> {
    let symbol = unsafe { library.get::<T>(name) }.map_err(|e| {
        let name = String::from_utf8_lossy(name.strip_suffix(b"\0").unwrap_or(name));
        VaalError::library(format!("missing symbol {}: {}", name, e))
    })?;
    Ok(*symbol)
}

fn string_from(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }
}

pub(crate) fn c_string(value: &str) -> Result<CString> {
    CString::new(value).map_err(|_| {
        VaalError::invalid_argument(format!("null byte in \"{}\"", value.escape_debug()))
    })
}

pub(crate) fn c_path(path: &Path) -> Result<CString> {
    let value = path.to_str().ok_or_else(|| {
        VaalError::invalid_argument(format!("invalid UTF-8 in path {}", path.display()))
    })?;
    c_string(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn test_c_string_rejects_interior_nul() {
        let err = c_string("np\0u").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert!(c_string("npu").is_ok());
    }

    #[test]
    fn test_c_path_round_trips_utf8() {
        let c = c_path(Path::new("models/pose.rtm")).unwrap();
        assert_eq!(c.to_str().unwrap(), "models/pose.rtm");
    }

    #[cfg(unix)]
    #[test]
    fn test_c_path_rejects_non_utf8() {
        use std::os::unix::ffi::OsStrExt;
        let path = Path::new(OsStr::from_bytes(b"pose\xff.rtm"));
        let err = c_path(path).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_string_from_null() {
        assert_eq!(string_from(std::ptr::null()), None);
    }
}
