use crate::{
    Keypoint, Result, Vaal, ffi,
    library::{c_path, c_string},
};
use std::{
    path::Path,
    ptr::{NonNull, null, null_mut},
    sync::Arc,
};

/// A VAAL context: one model bound to one compute engine.
///
/// The context is released exactly once, when this value is dropped.
pub struct Context {
    vaal: Arc<Vaal>,
    ptr: NonNull<ffi::VAALContext>,
}

impl Context {
    pub(crate) fn new(vaal: Arc<Vaal>, ptr: NonNull<ffi::VAALContext>) -> Self {
        Self { vaal, ptr }
    }

    /// Load a model file into this context
    ///
    /// # Errors
    /// Returns the engine status if the model cannot be loaded on this engine
    pub fn load_model_file(&mut self, path: &Path) -> Result<()> {
        let c_model = c_path(path)?;
        let status = unsafe { (self.vaal.load_model_file)(self.ptr.as_ptr(), c_model.as_ptr()) };
        self.vaal.check(status)
    }

    /// Set an integer (array) parameter by name
    pub fn parameter_seti(&mut self, name: &str, values: &[i32]) -> Result<()> {
        let c_name = c_string(name)?;
        let status = unsafe {
            (self.vaal.parameter_seti)(
                self.ptr.as_ptr(),
                c_name.as_ptr(),
                values.as_ptr(),
                values.len(),
            )
        };
        self.vaal.check(status)
    }

    /// Decode an image file into the model's input tensor
    ///
    /// The whole image is used (no region of interest) and the configured
    /// normalization applies, so no extra processing flags are passed.
    pub fn load_image_file(&mut self, path: &Path) -> Result<()> {
        let c_image = c_path(path)?;
        let status = unsafe {
            (self.vaal.load_image_file)(self.ptr.as_ptr(), null_mut(), c_image.as_ptr(), null(), 0)
        };
        self.vaal.check(status)
    }

    /// Run the loaded model on the current input
    pub fn run_model(&mut self) -> Result<()> {
        let status = unsafe { (self.vaal.run_model)(self.ptr.as_ptr()) };
        self.vaal.check(status)
    }

    /// Decode keypoints into `out`, returning how many entries are valid
    ///
    /// The slice length is declared to the engine as the buffer capacity.
    pub fn keypoints(&mut self, out: &mut [Keypoint]) -> Result<usize> {
        let mut count: usize = 0;
        let status = unsafe {
            (self.vaal.keypoints)(
                self.ptr.as_ptr(),
                out.as_mut_ptr(),
                out.len(),
                &mut count as *mut _,
            )
        };
        self.vaal.check(status)?;
        Ok(count)
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe { (self.vaal.context_release)(self.ptr.as_ptr()) };
    }
}
