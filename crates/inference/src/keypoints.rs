pub use vaal::Keypoint;

/// Capacity of the keypoint buffer handed to the engine.
pub const MAX_KEYPOINTS: usize = 50;

/// Caller-owned keypoint storage of fixed capacity `N`.
///
/// The engine writes into the whole array and reports a count; only the
/// first `len()` entries are valid afterwards.
#[derive(Debug, Clone)]
pub struct KeypointBuffer<const N: usize> {
    points: [Keypoint; N],
    len: usize,
}

impl<const N: usize> KeypointBuffer<N> {
    pub fn new() -> Self {
        Self {
            points: [Keypoint::default(); N],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Keypoint] {
        &self.points[..self.len]
    }

    /// Let `decode` fill the buffer and record how many entries are valid.
    ///
    /// A count above the capacity is clamped to `N`. On error the buffer is
    /// left empty.
    pub fn fill<F, E>(&mut self, decode: F) -> Result<usize, E>
    where
        F: FnOnce(&mut [Keypoint]) -> Result<usize, E>,
    {
        self.len = 0;
        let count = decode(&mut self.points[..])?;
        if count > N {
            log::warn!("engine reported {} keypoints for a buffer of {}", count, N);
        }
        self.len = count.min(N);
        Ok(self.len)
    }
}

impl<const N: usize> Default for KeypointBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
