use crate::foundation::error::{MemeplateError, MemeplateResult};
use crate::schema::vocab::{
    Anchor, AvatarSource, AvatarStyle, CropUnits, FitMode, OutputFormat, PosMode, TemplateKind,
    TextAlign, TextStyle, TextWrap,
};

/// Effective frame delay in milliseconds when a GIF template leaves `delay` unset.
pub const DEFAULT_DELAY_MS: u32 = 65;

/// Effective avatar placement box when `pos` is unset.
pub const DEFAULT_AVATAR_POS: [i32; 4] = [0, 0, 100, 100];

const DEFAULT_ANCHOR: [Anchor; 2] = [Anchor::Left, Anchor::Top];

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One named, renderable meme/image definition.
///
/// A template is a pure data model: authored as JSON, parsed into an immutable
/// snapshot, and handed to an external renderer together with per-slot
/// [`crate::ResolvedRenderParams`]. Every optional field stays `None` unless
/// the author wrote it; effective defaults are collapsed by the accessor
/// methods and by [`crate::resolve`], never materialized into storage, so
/// `parse` and `stringify` round-trip losslessly.
pub struct Template {
    /// Output kind: animated GIF or still image.
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    /// Avatar slots in composite draw order; must be non-empty to be usable.
    #[serde(rename = "avatar")]
    pub avatars: Vec<AvatarSlot>,
    /// Text slots in draw order; may be empty.
    #[serde(rename = "text")]
    pub texts: Vec<TextSlot>,
    /// Optional background canvas; absent means the first avatar defines it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    /// Frame delay in milliseconds; meaningful only when `type` is GIF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    /// Alternate lookup names for this template.
    #[serde(rename = "alias", default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// Output-format hint; only `"png"` has defined meaning today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    /// Eligibility for random template selection.
    #[serde(
        rename = "inRandomList",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub in_random_list: Option<bool>,
    /// Play the animation backward; meaningful only when `type` is GIF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    /// Exclude from listings while staying invokable by key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl Template {
    /// Effective frame delay ([`DEFAULT_DELAY_MS`] when unset).
    pub fn delay(&self) -> u32 {
        self.delay.unwrap_or(DEFAULT_DELAY_MS)
    }

    /// Effective reverse-playback flag (default `false`).
    pub fn reverse(&self) -> bool {
        self.reverse.unwrap_or(false)
    }

    /// Effective random-selection eligibility (default `true`).
    pub fn in_random_list(&self) -> bool {
        self.in_random_list.unwrap_or(true)
    }

    /// Effective hidden flag (default `false`).
    pub fn hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    /// Validate template invariants and every nested record.
    ///
    /// `type=IMG` templates carrying `delay`/`reverse` are valid: those fields
    /// are no-ops for still output, never an error.
    pub fn validate(&self) -> MemeplateResult<()> {
        if self.avatars.is_empty() {
            return Err(MemeplateError::invariant(
                "template must have at least one avatar slot",
            ));
        }
        for slot in &self.avatars {
            slot.validate()?;
        }
        for slot in &self.texts {
            slot.validate()?;
        }
        if let Some(bg) = &self.background {
            bg.validate()?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One placeable avatar within a template.
///
/// `antialias` and `resampling` left unset inherit the service-wide defaults
/// at resolution time; `None` is the only "no opinion" sentinel, an explicit
/// `false` is an override like any other value.
pub struct AvatarSlot {
    /// How the source image is resolved by the avatar provider.
    #[serde(rename = "type")]
    pub source: AvatarSource,
    /// Placement box(es); effective default [`DEFAULT_AVATAR_POS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<AvatarPos>,
    /// How `pos` maps onto the placed image; effective default ZOOM.
    #[serde(rename = "posType", default, skip_serializing_if = "Option::is_none")]
    pub pos_mode: Option<PosMode>,
    /// Alignment anchors inside the box; effective default `[LEFT, TOP]`.
    #[serde(rename = "position", default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Vec<Anchor>>,
    /// Crop box applied to the source before placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropSpec>,
    /// Units of `crop`; effective default NONE.
    #[serde(rename = "cropType", default, skip_serializing_if = "Option::is_none")]
    pub crop_units: Option<CropUnits>,
    /// Aspect-ratio policy; effective default FILL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<FitMode>,
    /// Visual transforms applied in listed order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Vec<AvatarStyle>>,
    /// Rotation in signed degrees; effective default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<i16>,
    /// Opacity in `[0.0, 1.0]`; effective default 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Apply a circular mask; effective default `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<bool>,
    /// Local image name; required non-empty iff `type` is LOCAL, ignored otherwise.
    #[serde(rename = "localName", default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    /// Auto-rotate per `angle` instead of a static rotation; default `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<bool>,
    /// Draw above text slots; effective default `true`.
    #[serde(
        rename = "avatarOnTop",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_on_top: Option<bool>,
    /// Antialiasing override; unset inherits the service defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antialias: Option<bool>,
    /// Resampling override; unset inherits the service defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resampling: Option<bool>,
}

impl AvatarSlot {
    /// Effective placement (a single [`DEFAULT_AVATAR_POS`] box when unset).
    pub fn pos(&self) -> AvatarPos {
        self.pos
            .clone()
            .unwrap_or(AvatarPos::Rect(DEFAULT_AVATAR_POS))
    }

    /// Effective placement mode (default ZOOM).
    pub fn pos_mode(&self) -> PosMode {
        self.pos_mode.unwrap_or_default()
    }

    /// Effective anchors (default `[LEFT, TOP]`).
    pub fn anchor(&self) -> &[Anchor] {
        self.anchor.as_deref().unwrap_or(&DEFAULT_ANCHOR)
    }

    /// Effective crop units (default NONE).
    pub fn crop_units(&self) -> CropUnits {
        self.crop_units.unwrap_or_default()
    }

    /// Effective fit policy (default FILL).
    pub fn fit(&self) -> FitMode {
        self.fit.unwrap_or_default()
    }

    /// Effective style chain (default empty).
    pub fn style(&self) -> &[AvatarStyle] {
        self.style.as_deref().unwrap_or(&[])
    }

    /// Effective rotation angle in degrees (default 0).
    pub fn angle(&self) -> i16 {
        self.angle.unwrap_or(0)
    }

    /// Effective opacity (default 1.0).
    pub fn opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }

    /// Effective circular-mask flag (default `false`).
    pub fn round(&self) -> bool {
        self.round.unwrap_or(false)
    }

    /// Effective auto-rotate flag (default `false`).
    pub fn rotate(&self) -> bool {
        self.rotate.unwrap_or(false)
    }

    /// Effective draw-order flag (default `true`).
    pub fn avatar_on_top(&self) -> bool {
        self.avatar_on_top.unwrap_or(true)
    }

    /// Validate slot invariants.
    pub fn validate(&self) -> MemeplateResult<()> {
        if self.source == AvatarSource::Local
            && self.local_name.as_deref().is_none_or(|n| n.trim().is_empty())
        {
            return Err(MemeplateError::invariant(
                "LOCAL avatar requires a non-empty localName",
            ));
        }
        if let Some(op) = self.opacity
            && (!op.is_finite() || !(0.0..=1.0).contains(&op))
        {
            return Err(MemeplateError::invariant(
                "avatar opacity must be within [0.0, 1.0]",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Avatar placement data, one of several authored shapes.
///
/// ZOOM/MARGIN placements use `[x, y, w, h]` boxes, either one box for every
/// frame or a per-frame list. DEFORM placements use four corner points plus an
/// anchor point per frame, again single or per-frame.
pub enum AvatarPos {
    /// One `[x, y, w, h]` box used for every frame.
    Rect([i32; 4]),
    /// Per-frame `[x, y, w, h]` boxes.
    Frames(Vec<[i32; 4]>),
    /// Per-frame deform meshes.
    DeformFrames(Vec<DeformFrame>),
    /// One deform mesh used for every frame.
    Deform(DeformFrame),
}

impl AvatarPos {
    /// Number of authored frames (1 for the single-shape variants).
    pub fn frame_count(&self) -> usize {
        match self {
            Self::Rect(_) | Self::Deform(_) => 1,
            Self::Frames(v) => v.len(),
            Self::DeformFrames(v) => v.len(),
        }
    }

    /// Box for frame `i`; past-the-end indexes clamp to the last frame.
    ///
    /// `None` for deform placements (and for an empty frame list).
    pub fn rect_frame(&self, i: usize) -> Option<[i32; 4]> {
        match self {
            Self::Rect(r) => Some(*r),
            Self::Frames(v) => v.get(i).or_else(|| v.last()).copied(),
            Self::Deform(_) | Self::DeformFrames(_) => None,
        }
    }

    /// Deform mesh for frame `i`; indexes wrap around the frame list.
    ///
    /// `None` for box placements (and for an empty frame list).
    pub fn deform_frame(&self, i: usize) -> Option<DeformFrame> {
        match self {
            Self::Deform(f) => Some(*f),
            Self::DeformFrames(v) => {
                if v.is_empty() {
                    None
                } else {
                    Some(v[i % v.len()])
                }
            }
            Self::Rect(_) | Self::Frames(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[[i32; 2]; 5]", into = "[[i32; 2]; 5]")]
/// One DEFORM frame: four corner points plus an anchor point.
///
/// Wire shape is `[[x0,y0],[x1,y1],[x2,y2],[x3,y3],[ax,ay]]`.
pub struct DeformFrame {
    /// Destination corner points in source-corner order.
    pub corners: [[i32; 2]; 4],
    /// Anchor (placement origin) point.
    pub anchor: [i32; 2],
}

impl From<[[i32; 2]; 5]> for DeformFrame {
    fn from(p: [[i32; 2]; 5]) -> Self {
        Self {
            corners: [p[0], p[1], p[2], p[3]],
            anchor: p[4],
        }
    }
}

impl From<DeformFrame> for [[i32; 2]; 5] {
    fn from(f: DeformFrame) -> Self {
        [
            f.corners[0],
            f.corners[1],
            f.corners[2],
            f.corners[3],
            f.anchor,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Crop box, authored either as `[x, y, w, h]` or as a `[w, h]` shorthand
/// anchored at the origin.
pub enum CropSpec {
    /// Full `[x, y, w, h]` crop box.
    Rect([i32; 4]),
    /// `[w, h]` shorthand, equivalent to `[0, 0, w, h]`.
    Size([i32; 2]),
}

impl CropSpec {
    /// Normalized `[x, y, w, h]` crop box.
    pub fn rect(&self) -> [i32; 4] {
        match *self {
            Self::Rect(r) => r,
            Self::Size([w, h]) => [0, 0, w, h],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// A solid-or-pattern color value.
pub enum Fill {
    /// One color, e.g. `"#191919"` or a named color.
    Solid(String),
    /// Ordered gradient stops.
    Pattern(Vec<String>),
}

impl Fill {
    fn validate(&self, field: &str) -> MemeplateResult<()> {
        match self {
            Self::Solid(c) => {
                if c.trim().is_empty() {
                    return Err(MemeplateError::invariant(format!(
                        "{field} color must be non-empty"
                    )));
                }
            }
            Self::Pattern(stops) => {
                if stops.is_empty() {
                    return Err(MemeplateError::invariant(format!(
                        "{field} pattern must have at least one stop"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One text run within a template.
///
/// `text` may contain substitution markers; their syntax belongs to the
/// external text-substitution engine, the schema carries them as plain content.
pub struct TextSlot {
    /// Text content, possibly holding substitution markers.
    pub text: String,
    /// Baseline position `[x, y]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<[i32; 2]>,
    /// Fill color; solid or pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Fill>,
    /// Font identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Point size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u16>,
    /// Horizontal alignment; effective default LEFT.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    /// Overflow policy; effective default NONE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<TextWrap>,
    /// Font style; effective default PLAIN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    /// Alignment anchors; effective default `[LEFT, TOP]`.
    #[serde(rename = "position", default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Vec<Anchor>>,
    /// Stroke (outline) color.
    #[serde(
        rename = "strokeColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stroke_color: Option<Fill>,
    /// Stroke width; effective default 0 (no stroke).
    #[serde(rename = "strokeSize", default, skip_serializing_if = "Option::is_none")]
    pub stroke_size: Option<u16>,
    /// Expand to consume unused layout space; effective default `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greedy: Option<bool>,
}

impl TextSlot {
    /// Effective alignment (default LEFT).
    pub fn align(&self) -> TextAlign {
        self.align.unwrap_or_default()
    }

    /// Effective overflow policy (default NONE).
    pub fn wrap(&self) -> TextWrap {
        self.wrap.unwrap_or_default()
    }

    /// Effective font style (default PLAIN).
    pub fn style(&self) -> TextStyle {
        self.style.unwrap_or_default()
    }

    /// Effective anchors (default `[LEFT, TOP]`).
    pub fn anchor(&self) -> &[Anchor] {
        self.anchor.as_deref().unwrap_or(&DEFAULT_ANCHOR)
    }

    /// Effective stroke width (default 0).
    pub fn stroke_size(&self) -> u16 {
        self.stroke_size.unwrap_or(0)
    }

    /// Effective greedy-sizing flag (default `false`).
    pub fn greedy(&self) -> bool {
        self.greedy.unwrap_or(false)
    }

    /// Validate slot invariants.
    pub fn validate(&self) -> MemeplateResult<()> {
        if let Some(size) = self.size
            && size == 0
        {
            return Err(MemeplateError::invariant(
                "text size must be > 0 when set",
            ));
        }
        if let Some(color) = &self.color {
            color.validate("text")?;
        }
        if let Some(stroke) = &self.stroke_color {
            stroke.validate("text stroke")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Background canvas of a template.
pub struct Background {
    /// Canvas `[width, height]` in pixels.
    pub size: [u32; 2],
    /// Fill color; absent means a transparent canvas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Fill>,
}

impl Background {
    /// Validate background invariants.
    pub fn validate(&self) -> MemeplateResult<()> {
        if self.size[0] == 0 || self.size[1] == 0 {
            return Err(MemeplateError::invariant(
                "background size must have width > 0 and height > 0",
            ));
        }
        if let Some(color) = &self.color {
            color.validate("background")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/template.rs"]
mod tests;
