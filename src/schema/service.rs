use std::sync::{Arc, RwLock};

use crate::foundation::error::{MemeplateError, MemeplateResult};
use crate::schema::vocab::GifEncoder;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Process-wide baseline rendering configuration.
///
/// Loaded once at service start and read-only thereafter; a reload replaces
/// the whole record through [`DefaultsHandle::replace`], never mutates it in
/// place. Unlike templates, every field here is concrete: this record is the
/// bottom of the override chain, which is what makes
/// [`crate::resolve`] total.
pub struct ServiceDefaults {
    /// Antialias avatar masks and rotations.
    #[serde(default = "default_true")]
    pub antialias: bool,
    /// Resample avatars to their target size before compositing.
    #[serde(default = "default_true")]
    pub resampling: bool,
    /// Output GIF size cap as `[width, height]`; empty means no cap.
    #[serde(default)]
    pub gif_max_size: Vec<u32>,
    /// GIF encoder backend.
    #[serde(default)]
    pub gif_encoder: GifEncoder,
    /// GIF quantization quality; >= 1, lower is better quality.
    #[serde(default = "default_gif_quality")]
    pub gif_quality: u8,
    /// Encoder thread pool size; 0 auto-sizes to the host.
    #[serde(default)]
    pub gif_encoder_thread_pool_size: u32,
    /// Run without a display server.
    #[serde(default = "default_true")]
    pub headless: bool,
}

fn default_true() -> bool {
    true
}

fn default_gif_quality() -> u8 {
    5
}

impl Default for ServiceDefaults {
    fn default() -> Self {
        Self {
            antialias: true,
            resampling: true,
            gif_max_size: Vec::new(),
            gif_encoder: GifEncoder::default(),
            gif_quality: default_gif_quality(),
            gif_encoder_thread_pool_size: 0,
            headless: true,
        }
    }
}

impl ServiceDefaults {
    /// Output size cap, or `None` when uncapped.
    pub fn max_size(&self) -> Option<[u32; 2]> {
        match self.gif_max_size.as_slice() {
            [w, h] => Some([*w, *h]),
            _ => None,
        }
    }

    /// Validate defaults invariants.
    pub fn validate(&self) -> MemeplateResult<()> {
        if !(self.gif_max_size.is_empty() || self.gif_max_size.len() == 2) {
            return Err(MemeplateError::invariant(
                "gifMaxSize must be empty or a [width, height] pair",
            ));
        }
        if self.gif_max_size.iter().any(|side| *side == 0) {
            return Err(MemeplateError::invariant(
                "gifMaxSize sides must be > 0",
            ));
        }
        if self.gif_quality == 0 {
            return Err(MemeplateError::invariant("gifQuality must be >= 1"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One immutable defaults snapshot plus its reload generation.
///
/// The version is monotonic per [`DefaultsHandle`] and, together with a
/// template and slot, forms a stable memoization key for resolved render
/// parameters: resolution output can only change when the version does.
pub struct VersionedDefaults {
    /// Reload generation, starting at 0 for the initial snapshot.
    pub version: u64,
    /// The defaults record itself.
    pub defaults: ServiceDefaults,
}

/// Shared handle to the authoritative [`ServiceDefaults`] snapshot.
///
/// Reload is an atomic reference swap: readers that already called
/// [`DefaultsHandle::load`] keep their old snapshot, and no reader ever
/// observes a partially-updated record.
#[derive(Debug)]
pub struct DefaultsHandle {
    current: RwLock<Arc<VersionedDefaults>>,
}

impl DefaultsHandle {
    /// Create a handle holding `defaults` as version 0.
    pub fn new(defaults: ServiceDefaults) -> Self {
        Self {
            current: RwLock::new(Arc::new(VersionedDefaults {
                version: 0,
                defaults,
            })),
        }
    }

    /// Current snapshot; cheap to call and safe to hold across a reload.
    pub fn load(&self) -> Arc<VersionedDefaults> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Swap in a new defaults record wholesale; returns the new version.
    pub fn replace(&self, defaults: ServiceDefaults) -> u64 {
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let version = slot.version + 1;
        tracing::debug!(version, "service defaults replaced");
        *slot = Arc::new(VersionedDefaults { version, defaults });
        version
    }
}

impl Default for DefaultsHandle {
    fn default() -> Self {
        Self::new(ServiceDefaults::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/service.rs"]
mod tests;
