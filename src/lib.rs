//! Memeplate is the declarative schema core of a meme/image template engine.
//!
//! A template is a named, keyed record describing how to compose a still or
//! animated image from avatar slots, text slots and an optional background.
//! This crate owns the data contracts and the one behavioral algorithm around
//! them; pixels are somebody else's problem.
//!
//! # Pipeline position
//!
//! 1. **Load**: [`ServiceDefaults`] are parsed once at service start and held
//!    behind a [`DefaultsHandle`] (atomic snapshot swap on reload)
//! 2. **Parse**: [`Template::parse`] turns authored JSON into an immutable,
//!    validated snapshot; [`Template::stringify`] is its lossless inverse
//! 3. **Resolve**: [`resolve`] merges slot-level and template-level overrides
//!    with the service defaults into [`ResolvedRenderParams`], the only record
//!    the external renderer may rely on having no missing fields
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Unset is not default**: every overridable field is an `Option`; a field
//!   the author omitted stays omitted through a round trip, and only the
//!   resolver collapses the default/override tiers.
//! - **Fail at the boundary**: the whole error taxonomy surfaces at
//!   parse/validate time, which keeps resolution pure and total.
//! - **No IO**: fetching avatars, fonts and template files belongs to external
//!   collaborators; everything here is a synchronous function over immutable
//!   values, safe to call concurrently without locking.
#![forbid(unsafe_code)]

mod foundation;
mod provider;
mod resolve;
mod schema;

pub use foundation::error::{MemeplateError, MemeplateResult};
pub use provider::AvatarFrameSource;
pub use resolve::params::{ResolvedRenderParams, resolve};
pub use schema::service::{DefaultsHandle, ServiceDefaults, VersionedDefaults};
pub use schema::template::{
    AvatarPos, AvatarSlot, Background, CropSpec, DEFAULT_AVATAR_POS, DEFAULT_DELAY_MS, DeformFrame,
    Fill, Template, TextSlot,
};
pub use schema::vocab::{
    Anchor, AvatarSource, AvatarStyle, CropUnits, FitMode, GifEncoder, OutputFormat, PosMode,
    TemplateKind, TextAlign, TextStyle, TextWrap, vocabulary,
};
