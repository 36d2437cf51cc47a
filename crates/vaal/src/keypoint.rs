/// A single decoded keypoint as written by `vaal_keypoints`.
///
/// The layout matches the engine's C record, so a `&mut [Keypoint]` can be
/// handed to the engine directly as the output buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    /// Confidence in [0.0, 1.0].
    pub score: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, score: f32) -> Self {
        Self { x, y, score }
    }

    /// Confidence as an integer percentage, truncated toward zero.
    pub fn percent(&self) -> i32 {
        (self.score * 100.0) as i32
    }
}
