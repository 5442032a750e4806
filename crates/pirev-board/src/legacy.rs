//! Legacy (pre-2014) revision codes.
//!
//! Old-style codes carry no fields: the whole code is an index into a closed
//! list of boards. Each slot is rewritten here as the equivalent current-format
//! field layout so the rest of the decoder only deals with one format. The
//! rewritten codes keep the new-style flag clear.
//!
//! Source: Raspberry Pi hardware documentation, "Old-style revision codes".

use crate::layout::{MANUFACTURER, MEMORY, REVISION, TYPE};
use crate::tables::{QISDA_INDEX, REV_2_0_INDEX};

use self::maker::{EGOMAN, EMBEST, QISDA, SONY_UK};
use self::mem::{MB_256, MB_512};
use self::model::{A, A_PLUS, B, B_PLUS, CM1};
use self::rev::{R1_0, R1_1, R1_2, R2_0};

/// Board models that appear in legacy codes (type field values).
pub mod model {
    /// Model A.
    pub const A: u32 = 0x0;
    /// Model B.
    pub const B: u32 = 0x1;
    /// Model A+.
    pub const A_PLUS: u32 = 0x2;
    /// Model B+.
    pub const B_PLUS: u32 = 0x3;
    /// Compute Module 1.
    pub const CM1: u32 = 0x6;
}

/// Manufacturers that appear in legacy codes (manufacturer field values).
pub mod maker {
    /// Sony UK.
    pub const SONY_UK: u32 = 0;
    /// Egoman.
    pub const EGOMAN: u32 = 1;
    /// Embest.
    pub const EMBEST: u32 = 2;
    /// Qisda, parked on the reserved manufacturer index.
    pub const QISDA: u32 = crate::tables::QISDA_INDEX;
}

/// Memory sizes that appear in legacy codes (memory field values).
pub mod mem {
    /// 256 MB.
    pub const MB_256: u32 = 0;
    /// 512 MB.
    pub const MB_512: u32 = 1;
}

/// Hardware revisions that appear in legacy codes (revision field values).
pub mod rev {
    /// 1.0
    pub const R1_0: u32 = 0;
    /// 1.1
    pub const R1_1: u32 = 1;
    /// 1.2
    pub const R1_2: u32 = 2;
    /// 2.0, parked on the reserved revision index.
    pub const R2_0: u32 = crate::tables::REV_2_0_INDEX;
}

/// One slot of the legacy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacySlot {
    /// No board was ever shipped with this code.
    Invalid,
    /// Equivalent current-format layout.
    Maps(u32),
}

impl LegacySlot {
    /// Current-format code for a valid slot.
    #[must_use]
    pub const fn code(self) -> Option<u32> {
        match self {
            Self::Invalid => None,
            Self::Maps(code) => Some(code),
        }
    }
}

/// Compose a current-format code from legacy board attributes.
#[must_use]
pub const fn compose(model: u32, revision: u32, memory: u32, manufacturer: u32) -> u32 {
    TYPE.place(model)
        | REVISION.place(revision)
        | MEMORY.place(memory)
        | MANUFACTURER.place(manufacturer)
}

const fn board(model: u32, revision: u32, memory: u32, manufacturer: u32) -> LegacySlot {
    LegacySlot::Maps(compose(model, revision, memory, manufacturer))
}

/// Every legacy code, indexed by its value.
pub const LEGACY_TABLE: [LegacySlot; 0x16] = [
    /* 0x00 */ LegacySlot::Invalid,
    /* 0x01 */ LegacySlot::Invalid,
    /* 0x02 */ board(B, R1_0, MB_256, EGOMAN),
    /* 0x03 */ board(B, R1_0, MB_256, EGOMAN),
    /* 0x04 */ board(B, R2_0, MB_256, SONY_UK),
    /* 0x05 */ board(B, R2_0, MB_256, QISDA),
    /* 0x06 */ board(B, R2_0, MB_256, EGOMAN),
    /* 0x07 */ board(A, R2_0, MB_256, EGOMAN),
    /* 0x08 */ board(A, R2_0, MB_256, SONY_UK),
    /* 0x09 */ board(A, R2_0, MB_256, QISDA),
    /* 0x0a */ LegacySlot::Invalid,
    /* 0x0b */ LegacySlot::Invalid,
    /* 0x0c */ LegacySlot::Invalid,
    /* 0x0d */ board(B, R2_0, MB_512, EGOMAN),
    /* 0x0e */ board(B, R2_0, MB_512, SONY_UK),
    /* 0x0f */ board(B, R2_0, MB_512, EGOMAN),
    /* 0x10 */ board(B_PLUS, R1_2, MB_512, SONY_UK),
    /* 0x11 */ board(CM1, R1_0, MB_512, SONY_UK),
    /* 0x12 */ board(A_PLUS, R1_1, MB_256, SONY_UK),
    /* 0x13 */ board(B_PLUS, R1_2, MB_512, EMBEST),
    /* 0x14 */ board(CM1, R1_0, MB_512, EMBEST),
    // Shipped with either 256 MB or 512 MB under the same code; report the lower.
    /* 0x15 */ board(A_PLUS, R1_1, MB_256, EMBEST),
];

/// Table slot for a legacy code; codes past the end of the table are invalid.
#[must_use]
pub fn lookup(code: u32) -> LegacySlot {
    usize::try_from(code)
        .ok()
        .and_then(|i| LEGACY_TABLE.get(i))
        .copied()
        .unwrap_or(LegacySlot::Invalid)
}

/// Number of valid slots in [`LEGACY_TABLE`].
#[must_use]
pub fn valid_count() -> usize {
    LEGACY_TABLE
        .iter()
        .filter(|slot| matches!(slot, LegacySlot::Maps(_)))
        .count()
}

const _: () = assert!(QISDA_INDEX <= MANUFACTURER.mask());
const _: () = assert!(REV_2_0_INDEX <= REVISION.mask());
