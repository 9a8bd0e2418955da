//! Collaborator seam for avatar image acquisition.
//!
//! The schema only carries the *selector* ([`AvatarSource`] plus `localName`);
//! fetching bytes over the network or from disk belongs to the service layer.
//! This seam replaces the historical pair of still/animated provider
//! interfaces with one capability-polymorphic shape: a provider always
//! returns an ordered frame sequence, of length 1 for still sources.

use crate::schema::template::AvatarSlot;

/// A source of avatar frames for one render invocation.
///
/// Implementations typically hold the per-invocation context (sender,
/// recipient, group) needed to map an [`crate::AvatarSource`] to actual
/// images. The frame type is the implementer's pixel representation; this
/// crate never inspects it.
pub trait AvatarFrameSource {
    /// One decoded frame in the implementer's representation.
    type Frame;
    /// Acquisition failure type.
    type Error;

    /// Frames for `slot`, in playback order; length 1 for a still source.
    ///
    /// For LOCAL sources, `slot.local_name` is guaranteed present and
    /// non-empty by [`AvatarSlot::validate`].
    fn frames(&self, slot: &AvatarSlot) -> Result<Vec<Self::Frame>, Self::Error>;
}

#[cfg(test)]
#[path = "../tests/unit/provider.rs"]
mod tests;
