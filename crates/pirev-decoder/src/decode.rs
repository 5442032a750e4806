//! Decoder facade: raw code in, every interpreted field out

use serde::Serialize;

use crate::code::{RevisionCode, Style};
use crate::error::Result;

/// Permission flags carried only by new-style codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Permissions {
    /// Overvoltage allowed
    pub overvoltage_allowed: bool,
    /// OTP programming allowed
    pub otp_programming_allowed: bool,
    /// OTP reading allowed
    pub otp_reading_allowed: bool,
    /// Warranty intact
    pub warranty_intact: bool,
}

impl Permissions {
    fn of(code: RevisionCode) -> Self {
        Self {
            overvoltage_allowed: code.overvoltage_allowed(),
            otp_programming_allowed: code.otp_programming_allowed(),
            otp_reading_allowed: code.otp_reading_allowed(),
            warranty_intact: code.warranty_intact(),
        }
    }
}

/// Everything known about one revision code
///
/// Serializes with the key order of the structured output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedResult {
    #[serde(rename = "revision_code")]
    raw: RevisionCode,
    #[serde(skip)]
    normalized: RevisionCode,
    style: Style,
    #[serde(flatten)]
    permissions: Option<Permissions>,
    #[serde(rename = "type")]
    type_name: &'static str,
    revision: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    processor: Option<&'static str>,
    memory: String,
    manufacturer: &'static str,
}

impl DecodedResult {
    /// Code as given, before legacy rewriting
    #[must_use]
    pub const fn raw(&self) -> RevisionCode {
        self.raw
    }

    /// Code in current-format layout
    #[must_use]
    pub const fn normalized(&self) -> RevisionCode {
        self.normalized
    }

    /// Format family
    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// True for current-format codes
    #[must_use]
    pub fn is_new_style(&self) -> bool {
        self.style == Style::New
    }

    /// Permission flags, new-style only
    #[must_use]
    pub const fn permissions(&self) -> Option<Permissions> {
        self.permissions
    }

    /// Board type / model
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Hardware revision
    #[must_use]
    pub const fn revision(&self) -> &'static str {
        self.revision
    }

    /// Processor, new-style only
    #[must_use]
    pub const fn processor(&self) -> Option<&'static str> {
        self.processor
    }

    /// Memory size, empty if unknown
    #[must_use]
    pub fn memory(&self) -> &str {
        &self.memory
    }

    /// Manufacturer
    #[must_use]
    pub const fn manufacturer(&self) -> &'static str {
        self.manufacturer
    }
}

/// Decode a raw revision code.
///
/// Old-style codes are rewritten through the legacy table first. Permission
/// flags and processor are only reported for new-style codes; on legacy
/// boards those bits carry no meaning.
///
/// # Errors
///
/// Returns `DecodeError::UnknownLegacyCode` for an old-style code with no
/// known board.
pub fn decode(raw: u32) -> Result<DecodedResult> {
    let raw = RevisionCode::new(raw);
    let code = raw.normalize()?;
    let style = code.style();
    let new_style = style == Style::New;

    let result = DecodedResult {
        raw,
        normalized: code,
        style,
        permissions: new_style.then(|| Permissions::of(code)),
        type_name: code.type_name(),
        revision: code.hardware_revision(),
        processor: new_style.then(|| code.processor()),
        memory: code.memory(),
        manufacturer: code.manufacturer(),
    };

    tracing::debug!(
        "Decoded {}: {} {} rev {} ({})",
        raw,
        result.style,
        result.type_name,
        result.revision,
        result.manufacturer
    );

    Ok(result)
}

/// Decode every code in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first error encountered; later codes are not decoded.
pub fn decode_all<I>(codes: I) -> Result<Vec<DecodedResult>>
where
    I: IntoIterator<Item = u32>,
{
    codes.into_iter().map(decode).collect()
}
