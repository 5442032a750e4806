//! Bit layout of a current-format revision code.
//!
//! Source: Raspberry Pi hardware documentation, "New-style revision codes".
//!
//! ```text
//!  31   30   29   28-26  25   24   23   22-20  19-16  15-12  11-4   3-0
//! ┌────┬────┬────┬──────┬────┬────┬────┬──────┬──────┬──────┬──────┬──────┐
//! │ N  │ O  │ Q  │ ---  │ W  │ -  │ F  │ MMM  │ CCCC │ PPPP │ TTTT │ RRRR │
//! └────┴────┴────┴──────┴────┴────┴────┴──────┴──────┴──────┴──────┴──────┘
//!  N  overvoltage           (0 = allowed, 1 = disallowed)
//!  O  OTP programming       (0 = allowed, 1 = disallowed)
//!  Q  OTP reading           (0 = allowed, 1 = disallowed)
//!  W  warranty              (0 = intact,  1 = voided)
//!  F  new-style flag        (1 = current format)
//!  M  memory size index     C  manufacturer index
//!  P  processor index       T  board type index      R  revision index
//! ```
//!
//! The flag bits are inverted with respect to their names: a **clear** bit
//! means the permission is granted.

/// A contiguous range of bits inside a 32-bit revision code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    /// Position of the least significant bit.
    pub offset: u32,
    /// Number of bits.
    pub width: u32,
}

impl BitField {
    /// Describe a field of `width` bits starting at bit `offset`.
    #[must_use]
    pub const fn new(offset: u32, width: u32) -> Self {
        Self { offset, width }
    }

    /// Unshifted mask covering `width` low bits.
    #[must_use]
    pub const fn mask(self) -> u32 {
        if self.width >= u32::BITS {
            u32::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// Right-shift `code` by the offset and mask it to the field width.
    ///
    /// Total for every input: offsets past bit 31 yield 0.
    #[must_use]
    pub const fn extract(self, code: u32) -> u32 {
        if self.offset >= u32::BITS {
            return 0;
        }
        (code >> self.offset) & self.mask()
    }

    /// True if the field is non-zero in `code`.
    #[must_use]
    pub const fn is_set(self, code: u32) -> bool {
        self.extract(code) != 0
    }

    /// Move `value` into this field's bit range, dropping bits that do not fit.
    #[must_use]
    pub const fn place(self, value: u32) -> u32 {
        if self.offset >= u32::BITS {
            return 0;
        }
        (value & self.mask()) << self.offset
    }
}

// ── Flags ────────────────────────────────────────────────────────────────────

/// Overvoltage permission. Clear = allowed.
pub const OVERVOLTAGE: BitField = BitField::new(31, 1);
/// OTP programming permission. Clear = allowed.
pub const OTP_PROGRAM: BitField = BitField::new(30, 1);
/// OTP reading permission. Clear = allowed.
pub const OTP_READ: BitField = BitField::new(29, 1);
/// Warranty bit. Clear = intact.
pub const WARRANTY: BitField = BitField::new(25, 1);
/// Set on every current-format code.
pub const NEW_STYLE: BitField = BitField::new(23, 1);

// ── Categorical indices ──────────────────────────────────────────────────────

/// Memory size index (see [`crate::tables::MEMORY_MBYTES`]).
pub const MEMORY: BitField = BitField::new(20, 3);
/// Manufacturer index.
pub const MANUFACTURER: BitField = BitField::new(16, 4);
/// Processor (SoC) index.
pub const PROCESSOR: BitField = BitField::new(12, 4);
/// Board type / model index.
pub const TYPE: BitField = BitField::new(4, 8);
/// Hardware revision index.
pub const REVISION: BitField = BitField::new(0, 4);

/// Every field, most significant first.
pub const ALL_FIELDS: &[BitField] = &[
    OVERVOLTAGE,
    OTP_PROGRAM,
    OTP_READ,
    WARRANTY,
    NEW_STYLE,
    MEMORY,
    MANUFACTURER,
    PROCESSOR,
    TYPE,
    REVISION,
];
