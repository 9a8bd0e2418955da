use crate::schema::service::VersionedDefaults;
use crate::schema::template::{AvatarSlot, DEFAULT_DELAY_MS, Template};
use crate::schema::vocab::{GifEncoder, TemplateKind};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Fully-populated render parameters for one avatar slot.
///
/// Derived, never authored: this is the only record the external renderer may
/// rely on having no missing fields. `max_size: None` is a value ("no cap"),
/// not an unset marker.
pub struct ResolvedRenderParams {
    /// GIF encoder backend.
    pub encoder: GifEncoder,
    /// Frame delay in milliseconds.
    pub delay: u32,
    /// Output size cap, or `None` for no cap.
    pub max_size: Option<[u32; 2]>,
    /// Antialias avatar masks and rotations.
    pub antialias: bool,
    /// Resample avatars to target size before compositing.
    pub resampling: bool,
    /// GIF quantization quality; lower is better.
    pub quality: u8,
    /// Play the animation backward.
    pub reverse: bool,
}

/// Merge service defaults with template- and slot-level overrides.
///
/// Pure and total: for each field the slot-level value wins if present, else
/// the template-level value where one exists and applies, else the service
/// default. `None` is the only "no opinion" sentinel, so an explicit `false`
/// or `0` at a narrower scope overrides a truthy broader-scope value.
/// `type=IMG` templates get the documented delay and `reverse = false`
/// regardless of what they carry; those fields are no-ops for still output.
///
/// Output may be memoized per `(defaults.version, template, slot)` since a
/// snapshot's defaults change only by replacement.
pub fn resolve(
    defaults: &VersionedDefaults,
    template: &Template,
    slot: &AvatarSlot,
) -> ResolvedRenderParams {
    let base = &defaults.defaults;
    let animated = template.kind == TemplateKind::Gif;
    ResolvedRenderParams {
        encoder: base.gif_encoder,
        delay: if animated {
            template.delay()
        } else {
            DEFAULT_DELAY_MS
        },
        max_size: base.max_size(),
        antialias: slot.antialias.unwrap_or(base.antialias),
        resampling: slot.resampling.unwrap_or(base.resampling),
        quality: base.gif_quality,
        reverse: animated && template.reverse(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/params.rs"]
mod tests;
