//! Configuration for a simulation run.

use crate::common::{Error, Result};

/// Separator between fields of a reference string.
pub const FIELD_SEPARATOR: char = ',';

/// Smallest frame capacity a simulation accepts.
pub const MIN_FRAMES: usize = 1;

/// Frame capacity used when none is given.
pub const DEFAULT_FRAMES: usize = 3;

/// Upper bound offered by the reference front end.
///
/// The simulator itself does not enforce it; any capacity of at least
/// [`MIN_FRAMES`] is valid.
pub const MAX_FRAMES: usize = 10;

/// Validated simulation settings.
///
/// A `SimConfig` can only be built through [`SimConfig::new`], so holding
/// one proves the frame capacity is usable.
///
/// # Example
/// ```
/// use pagesim::SimConfig;
///
/// let config = SimConfig::new(4).unwrap();
/// assert_eq!(config.n_frames(), 4);
/// assert!(SimConfig::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    n_frames: usize,
}

impl SimConfig {
    /// Validate a frame capacity.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if `n_frames` is below [`MIN_FRAMES`]
    pub fn new(n_frames: usize) -> Result<Self> {
        if n_frames < MIN_FRAMES {
            return Err(Error::InvalidConfig { n_frames });
        }
        Ok(Self { n_frames })
    }

    /// Number of frames available to the policy.
    #[inline]
    pub fn n_frames(&self) -> usize {
        self.n_frames
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n_frames: DEFAULT_FRAMES,
        }
    }
}
