//! Closed enumerated vocabularies shared by the template schema.
//!
//! Wire names are SCREAMING_SNAKE_CASE, matching the stored template format.
//! Unknown values in any closed vocabulary are rejected at parse time with
//! [`crate::MemeplateError::UnknownVariant`]; the one open vocabulary is
//! [`OutputFormat`], whose unrecognized values parse into an explicit
//! [`OutputFormat::Reserved`] case instead.

/// GIF encoder backend selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GifEncoder {
    /// Stream frames through a buffered quantizing encoder.
    BufferedStream,
    /// Encode through the animated-image library backend.
    #[default]
    AnimatedLib,
}

impl GifEncoder {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["BUFFERED_STREAM", "ANIMATED_LIB"];
}

/// Output kind of a template: animated GIF or still image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateKind {
    /// Animated output; `delay`/`reverse` are meaningful.
    Gif,
    /// Still output; `delay`/`reverse` are ignored as no-ops.
    Img,
}

impl TemplateKind {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["GIF", "IMG"];
}

/// How an avatar slot's source image is resolved by the avatar provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvatarSource {
    /// Avatar of the message sender.
    From,
    /// Avatar of the message recipient.
    To,
    /// Avatar of the group the message was sent in.
    Group,
    /// Avatar of the bot itself.
    Bot,
    /// A randomly selected avatar.
    Random,
    /// A locally stored image; requires `localName`.
    Local,
}

impl AvatarSource {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["FROM", "TO", "GROUP", "BOT", "RANDOM", "LOCAL"];
}

/// How an avatar's `pos` box maps onto the placed image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosMode {
    /// Scale the image to fit the box.
    #[default]
    Zoom,
    /// Warp the image onto four corner points.
    Deform,
    /// Inset the image by the box as margins.
    Margin,
}

impl PosMode {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["ZOOM", "DEFORM", "MARGIN"];
}

/// Units of the avatar `crop` box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CropUnits {
    /// No cropping.
    #[default]
    None,
    /// Crop box in source pixels.
    Pixel,
    /// Crop box in percent of the source dimensions.
    Percent,
}

impl CropUnits {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["NONE", "PIXEL", "PERCENT"];
}

/// Policy for reconciling a source aspect ratio with its target box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitMode {
    /// Letterbox inside the box, preserving aspect ratio.
    Contain,
    /// Fill the box, preserving aspect ratio and cropping overflow.
    Cover,
    /// Stretch to the box exactly.
    #[default]
    Fill,
}

impl FitMode {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["CONTAIN", "COVER", "FILL"];
}

/// A visual transform applied to an avatar, in listed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvatarStyle {
    /// Mirror horizontally.
    Mirror,
    /// Flip vertically.
    Flip,
    /// Convert to grayscale.
    Gray,
    /// Threshold to black and white.
    Binarization,
}

impl AvatarStyle {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["MIRROR", "FLIP", "GRAY", "BINARIZATION"];
}

/// Horizontal alignment of a text run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Align to the right edge.
    Right,
    /// Center between the edges.
    Center,
}

impl TextAlign {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["LEFT", "RIGHT", "CENTER"];
}

/// Overflow policy for text that exceeds its box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextWrap {
    /// Let text overflow.
    #[default]
    None,
    /// Break onto additional lines.
    Break,
    /// Shrink the font until the text fits.
    Zoom,
}

impl TextWrap {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["NONE", "BREAK", "ZOOM"];
}

/// Font style of a text run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextStyle {
    /// Regular weight and posture.
    #[default]
    Plain,
    /// Bold weight.
    Bold,
    /// Italic posture.
    Italic,
}

impl TextStyle {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["PLAIN", "BOLD", "ITALIC"];
}

/// A named alignment reference point used to place a slot in its box.
///
/// Slots carry an ordered set of anchors (wire field `position`), e.g.
/// `[LEFT, TOP]` for the default top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Anchor {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Center of the box.
    Center,
}

impl Anchor {
    /// Wire names of every variant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["LEFT", "RIGHT", "TOP", "BOTTOM", "CENTER"];
}

/// Output-format hint on a template.
///
/// Only `"png"` currently has defined meaning. Every other string is carried
/// through parsing as [`OutputFormat::Reserved`] so the unimplemented path is
/// statically visible instead of hiding inside a loosely-typed string. This is
/// an open vocabulary by design and exempt from the unknown-variant policy.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OutputFormat {
    /// PNG still output.
    Png,
    /// A format hint with no defined behavior yet; preserved verbatim.
    Reserved(String),
}

impl From<String> for OutputFormat {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case("png") {
            Self::Png
        } else {
            Self::Reserved(s)
        }
    }
}

impl From<OutputFormat> for String {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Png => "png".to_owned(),
            OutputFormat::Reserved(s) => s,
        }
    }
}

/// The current closed vocabulary sets, keyed by type name.
///
/// Exposed so an external schema-version compatibility checker can diff the
/// variant sets: adding a variant is backward compatible for readers that
/// follow the documented reject policy; removing or renaming one is a
/// breaking schema change.
pub fn vocabulary() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        ("GifEncoder", GifEncoder::NAMES),
        ("TemplateKind", TemplateKind::NAMES),
        ("AvatarSource", AvatarSource::NAMES),
        ("PosMode", PosMode::NAMES),
        ("CropUnits", CropUnits::NAMES),
        ("FitMode", FitMode::NAMES),
        ("AvatarStyle", AvatarStyle::NAMES),
        ("TextAlign", TextAlign::NAMES),
        ("TextWrap", TextWrap::NAMES),
        ("TextStyle", TextStyle::NAMES),
        ("Anchor", Anchor::NAMES),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/schema/vocab.rs"]
mod tests;
