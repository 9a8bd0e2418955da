//! Parse/stringify entry points for the textual schema format.
//!
//! The wire format is UTF-8 JSON. Unknown extra fields are ignored for
//! forward compatibility; unknown values in closed vocabularies are rejected
//! (the policy applies uniformly to every enum field). All errors in the
//! taxonomy surface here, at parse/validate time, so that resolution stays
//! total. Pretty vs. compact layout is presentation only; round-trip fidelity
//! is structural, not textual.

use serde_json::error::Category;
use tracing::debug;

use crate::foundation::error::{MemeplateError, MemeplateResult};
use crate::schema::service::ServiceDefaults;
use crate::schema::template::Template;

/// Classify a serde_json failure into the schema error taxonomy.
///
/// Syntax-level failures are malformed input. Data-level failures carry
/// serde's stable message shapes for absent required fields and
/// out-of-vocabulary enum values; anything else (wrong types, untagged
/// mismatches) is malformed input as well.
fn classify_json_error(err: serde_json::Error) -> MemeplateError {
    match err.classify() {
        Category::Syntax | Category::Eof | Category::Io => {
            MemeplateError::malformed(err.to_string())
        }
        Category::Data => {
            let msg = err.to_string();
            if msg.starts_with("missing field") {
                MemeplateError::missing_field(msg)
            } else if msg.starts_with("unknown variant") {
                MemeplateError::unknown_variant(msg)
            } else {
                MemeplateError::malformed(msg)
            }
        }
    }
}

fn to_json(value: &impl serde::Serialize, pretty: bool) -> MemeplateResult<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.map_err(|err| MemeplateError::Other(err.into()))
}

impl Template {
    /// Parse and validate a template from its authored JSON text.
    ///
    /// Fields the author omitted stay unset; effective defaults are collapsed
    /// later, by accessors and by [`crate::resolve`], never here.
    pub fn parse(text: &str) -> MemeplateResult<Self> {
        let template: Self = serde_json::from_str(text).map_err(classify_json_error)?;
        template.validate()?;
        debug!(
            kind = ?template.kind,
            avatars = template.avatars.len(),
            texts = template.texts.len(),
            "parsed template"
        );
        Ok(template)
    }

    /// Compact JSON; exact inverse of [`Template::parse`] up to layout.
    pub fn stringify(&self) -> MemeplateResult<String> {
        to_json(self, false)
    }

    /// Pretty JSON for authoring tools; same content as [`Template::stringify`].
    pub fn stringify_pretty(&self) -> MemeplateResult<String> {
        to_json(self, true)
    }
}

impl ServiceDefaults {
    /// Parse and validate service defaults from JSON text.
    ///
    /// Every absent field takes its documented default, so `"{}"` parses to
    /// the baseline configuration.
    pub fn parse(text: &str) -> MemeplateResult<Self> {
        let defaults: Self = serde_json::from_str(text).map_err(classify_json_error)?;
        defaults.validate()?;
        debug!(encoder = ?defaults.gif_encoder, "parsed service defaults");
        Ok(defaults)
    }

    /// Compact JSON with every field encoded, defaults included.
    pub fn stringify(&self) -> MemeplateResult<String> {
        to_json(self, false)
    }

    /// Pretty JSON with every field encoded; the conventional on-disk form.
    pub fn stringify_pretty(&self) -> MemeplateResult<String> {
        to_json(self, true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/codec.rs"]
mod tests;
