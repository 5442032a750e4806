//! Field interpretation for a single revision code
//!
//! [`RevisionCode`] wraps the raw 32-bit word and exposes one accessor per
//! hardware attribute. Accessors read the current-format layout; call
//! [`RevisionCode::normalize`] first so old-style codes are rewritten into
//! that layout.

use std::fmt;

use pirev_board::layout;
use pirev_board::legacy::{self, LegacySlot};
use pirev_board::tables::{self, UNKNOWN};

use serde::{Serialize, Serializer};

use crate::error::{DecodeError, Result};
use crate::memory::format_memory;

/// Format family of a revision code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Pre-2014 index into the legacy board list
    Old,
    /// Bit-packed fields
    New,
}

impl Style {
    /// Capitalised name used by the text renderer
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Old => "Old",
            Self::New => "New",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw 32-bit revision code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevisionCode(u32);

impl RevisionCode {
    /// Wrap a raw code
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw 32-bit value
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Rewrite an old-style code into the current-format layout.
    ///
    /// New-style codes are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::UnknownLegacyCode` if the code is old-style and
    /// past the end of the legacy table or on one of its invalid slots.
    pub fn normalize(self) -> Result<Self> {
        if self.is_new_style() {
            return Ok(self);
        }
        match legacy::lookup(self.0) {
            LegacySlot::Maps(mapped) => {
                tracing::debug!("Legacy code {:#06x} maps to {:#010x}", self.0, mapped);
                Ok(Self(mapped))
            }
            LegacySlot::Invalid => Err(DecodeError::UnknownLegacyCode { code: self.0 }),
        }
    }

    // ── Flags ───────────────────────────────────────────────────────────────
    // A clear bit grants the permission.

    /// Current-format code (bit 23 set)
    #[must_use]
    pub const fn is_new_style(self) -> bool {
        layout::NEW_STYLE.is_set(self.0)
    }

    /// Format family
    #[must_use]
    pub const fn style(self) -> Style {
        if self.is_new_style() {
            Style::New
        } else {
            Style::Old
        }
    }

    /// Overvoltage allowed
    #[must_use]
    pub const fn overvoltage_allowed(self) -> bool {
        !layout::OVERVOLTAGE.is_set(self.0)
    }

    /// OTP programming allowed
    #[must_use]
    pub const fn otp_programming_allowed(self) -> bool {
        !layout::OTP_PROGRAM.is_set(self.0)
    }

    /// OTP reading allowed
    #[must_use]
    pub const fn otp_reading_allowed(self) -> bool {
        !layout::OTP_READ.is_set(self.0)
    }

    /// Warranty intact (never voided by overclocking)
    #[must_use]
    pub const fn warranty_intact(self) -> bool {
        !layout::WARRANTY.is_set(self.0)
    }

    /// "Allowed" / "Disallowed"
    #[must_use]
    pub const fn overvoltage_str(self) -> &'static str {
        allowed_str(self.overvoltage_allowed())
    }

    /// "Allowed" / "Disallowed"
    #[must_use]
    pub const fn otp_programming_str(self) -> &'static str {
        allowed_str(self.otp_programming_allowed())
    }

    /// "Allowed" / "Disallowed"
    #[must_use]
    pub const fn otp_reading_str(self) -> &'static str {
        allowed_str(self.otp_reading_allowed())
    }

    /// "Intact" / "Voided"
    #[must_use]
    pub const fn warranty_str(self) -> &'static str {
        if self.warranty_intact() {
            "Intact"
        } else {
            "Voided"
        }
    }

    // ── Categorical fields ──────────────────────────────────────────────────

    /// Board type index (bits 4-11)
    #[must_use]
    pub const fn type_index(self) -> u32 {
        layout::TYPE.extract(self.0)
    }

    /// Board type / model name
    #[must_use]
    pub fn type_name(self) -> &'static str {
        let index = self.type_index();
        resolve_logged("type", tables::TYPE.resolve(index), index)
    }

    /// Processor index (bits 12-15)
    #[must_use]
    pub const fn processor_index(self) -> u32 {
        layout::PROCESSOR.extract(self.0)
    }

    /// Processor (SoC) name
    #[must_use]
    pub fn processor(self) -> &'static str {
        let index = self.processor_index();
        resolve_logged("processor", tables::PROCESSOR.resolve(index), index)
    }

    /// Manufacturer index (bits 16-19)
    #[must_use]
    pub const fn manufacturer_index(self) -> u32 {
        layout::MANUFACTURER.extract(self.0)
    }

    /// Manufacturer name
    #[must_use]
    pub fn manufacturer(self) -> &'static str {
        let index = self.manufacturer_index();
        resolve_logged("manufacturer", tables::MANUFACTURER.resolve(index), index)
    }

    /// Hardware revision index (bits 0-3)
    #[must_use]
    pub const fn revision_index(self) -> u32 {
        layout::REVISION.extract(self.0)
    }

    /// Hardware revision, e.g. "1.2"
    #[must_use]
    pub fn hardware_revision(self) -> &'static str {
        let index = self.revision_index();
        resolve_logged("revision", tables::REVISION.resolve(index), index)
    }

    /// Memory size index (bits 20-22)
    #[must_use]
    pub const fn memory_index(self) -> u32 {
        layout::MEMORY.extract(self.0)
    }

    /// Installed memory in MB, 0 if the index is unused
    #[must_use]
    pub fn memory_mbytes(self) -> u32 {
        tables::memory_mbytes(self.memory_index())
    }

    /// Installed memory as "512MB" / "8GB", empty if unknown
    #[must_use]
    pub fn memory(self) -> String {
        format_memory(self.memory_mbytes())
    }
}

impl From<u32> for RevisionCode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RevisionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

impl Serialize for RevisionCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const fn allowed_str(allowed: bool) -> &'static str {
    if allowed {
        "Allowed"
    } else {
        "Disallowed"
    }
}

fn resolve_logged(field: &str, name: &'static str, index: u32) -> &'static str {
    if name == UNKNOWN {
        tracing::warn!("Unassigned {field} index {index:#x}");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_style_passes_through_normalize() {
        let code = RevisionCode::new(0x00A0_2082);
        assert_eq!(code.normalize().unwrap(), code);
    }

    #[test]
    fn test_legacy_normalize() {
        let code = RevisionCode::new(0x0002).normalize().unwrap();
        assert_eq!(code.style(), Style::Old);
        assert_eq!(code.type_name(), "B");
        assert_eq!(code.manufacturer(), "Egoman");
    }

    #[test]
    fn test_legacy_normalize_rejects_invalid_slot() {
        let err = RevisionCode::new(0x000B).normalize().unwrap_err();
        assert!(matches!(err, DecodeError::UnknownLegacyCode { code: 0x0B }));
    }

    #[test]
    fn test_flag_polarity() {
        let clear = RevisionCode::new(0x00A0_2082);
        assert!(clear.overvoltage_allowed());
        assert!(clear.otp_programming_allowed());
        assert!(clear.otp_reading_allowed());
        assert!(clear.warranty_intact());
        assert_eq!(clear.overvoltage_str(), "Allowed");
        assert_eq!(clear.warranty_str(), "Intact");

        let set = RevisionCode::new(0xE2A0_2082);
        assert!(!set.overvoltage_allowed());
        assert!(!set.otp_programming_allowed());
        assert!(!set.otp_reading_allowed());
        assert!(!set.warranty_intact());
        assert_eq!(set.otp_programming_str(), "Disallowed");
        assert_eq!(set.otp_reading_str(), "Disallowed");
        assert_eq!(set.warranty_str(), "Voided");
    }

    #[test]
    fn test_pi4_fields() {
        // 4B rev 1.4, 8 GB, BCM2711, Sony UK
        let code = RevisionCode::new(0x00D0_3114);
        assert_eq!(code.type_name(), "4B");
        assert_eq!(code.hardware_revision(), "1.4");
        assert_eq!(code.processor(), "BCM2711");
        assert_eq!(code.manufacturer(), "Sony UK");
        assert_eq!(code.memory_mbytes(), 8192);
        assert_eq!(code.memory(), "8GB");
    }

    #[test]
    fn test_unassigned_indices() {
        // type 0xFF, processor 0xE, manufacturer 0x9, revision 0x7
        let code = RevisionCode::new(0x0089_EFF7);
        assert_eq!(code.type_name(), UNKNOWN);
        assert_eq!(code.processor(), UNKNOWN);
        assert_eq!(code.manufacturer(), UNKNOWN);
        assert_eq!(code.hardware_revision(), UNKNOWN);
    }

    #[test]
    fn test_unused_memory_index() {
        let code = RevisionCode::new(0x00E0_0000);
        assert_eq!(code.memory_index(), 6);
        assert_eq!(code.memory_mbytes(), 0);
        assert_eq!(code.memory(), "");
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(RevisionCode::new(0x00a0_2082).to_string(), "0xA02082");
        assert_eq!(RevisionCode::new(2).to_string(), "0x2");
    }
}
