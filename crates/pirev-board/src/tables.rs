//! Display tables for the categorical fields of a revision code.
//!
//! Each table is an ordered list of names indexed by the value extracted from
//! the corresponding [`crate::layout`] field. The index spaces are sparsely
//! populated on purpose (the type field alone has 256 slots), so lookups never
//! fail: an index past the end resolves to [`UNKNOWN`], or to a table's
//! declared [`ReservedIndex`] label.

/// Marker returned for indices with no assigned meaning.
pub const UNKNOWN: &str = "???";

/// One index past the end of a table that still has a fixed meaning.
///
/// Legacy boards use values (Qisda as manufacturer, 2.0 as revision) that
/// were never assigned in the current format. The legacy mapper encodes them
/// at the highest index of their field, which is kept out of the ordered
/// table so a future assignment cannot shift it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedIndex {
    /// Field value that selects the label.
    pub index: u32,
    /// Label to render for that value.
    pub label: &'static str,
}

/// Ordered names plus the fallback policy for out-of-range indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTable {
    entries: &'static [&'static str],
    reserved: Option<ReservedIndex>,
}

impl LookupTable {
    /// Table with only the generic [`UNKNOWN`] fallback.
    #[must_use]
    pub const fn new(entries: &'static [&'static str]) -> Self {
        Self {
            entries,
            reserved: None,
        }
    }

    /// Table that renders `index` as `label` when it falls outside `entries`.
    #[must_use]
    pub const fn with_reserved(
        entries: &'static [&'static str],
        index: u32,
        label: &'static str,
    ) -> Self {
        Self {
            entries,
            reserved: Some(ReservedIndex { index, label }),
        }
    }

    /// Ordered entries.
    #[must_use]
    pub const fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    /// Declared reserved index, if any.
    #[must_use]
    pub const fn reserved(&self) -> Option<ReservedIndex> {
        self.reserved
    }

    /// Number of ordered entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no ordered entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name for `index`, or `None` if the table has nothing for it.
    #[must_use]
    pub fn get(&self, index: u32) -> Option<&'static str> {
        if let Some(name) = usize::try_from(index)
            .ok()
            .and_then(|i| self.entries.get(i).copied())
        {
            return Some(name);
        }
        self.reserved
            .filter(|reserved| reserved.index == index)
            .map(|reserved| reserved.label)
    }

    /// Name for `index`: the entry, else the reserved label, else [`UNKNOWN`].
    #[must_use]
    pub fn resolve(&self, index: u32) -> &'static str {
        self.get(index).unwrap_or(UNKNOWN)
    }
}

/// Board type / model names, indexed by [`crate::layout::TYPE`].
pub const TYPE: LookupTable = LookupTable::new(&[
    "A",                 // 0x00
    "B",                 // 0x01
    "A+",                // 0x02
    "B+",                // 0x03
    "2B",                // 0x04
    "Alpha",             // 0x05
    "CM1",               // 0x06
    "0x07",              // 0x07 unassigned
    "3B",                // 0x08
    "Zero",              // 0x09
    "CM3",               // 0x0A
    "0x0B",              // 0x0B unassigned
    "Zero W",            // 0x0C
    "3B+",               // 0x0D
    "3A+",               // 0x0E
    "Internal use only", // 0x0F
    "CM3+",              // 0x10
    "4B",                // 0x11
    "Zero 2 W",          // 0x12
    "400",               // 0x13
    "CM4",               // 0x14
    "CM4S",              // 0x15
]);

/// Processor names, indexed by [`crate::layout::PROCESSOR`].
pub const PROCESSOR: LookupTable = LookupTable::new(&[
    "BCM2835", // 0
    "BCM2836", // 1
    "BCM2837", // 2
    "BCM2711", // 3
]);

/// Manufacturer index used for Qisda, which only appears on legacy boards.
pub const QISDA_INDEX: u32 = 0xF;

/// Manufacturer names, indexed by [`crate::layout::MANUFACTURER`].
pub const MANUFACTURER: LookupTable = LookupTable::with_reserved(
    &[
        "Sony UK",    // 0
        "Egoman",     // 1
        "Embest",     // 2
        "Sony Japan", // 3
        "Embest",     // 4
        "Stadium",    // 5
    ],
    QISDA_INDEX,
    "Qisda",
);

/// Revision index used for 2.0, which only appears on legacy boards.
pub const REV_2_0_INDEX: u32 = 0xF;

/// Hardware revision names, indexed by [`crate::layout::REVISION`].
pub const REVISION: LookupTable = LookupTable::with_reserved(
    &["1.0", "1.1", "1.2", "1.3", "1.4", "1.5"],
    REV_2_0_INDEX,
    "2.0",
);

/// Memory size in megabytes, indexed by [`crate::layout::MEMORY`].
///
/// Kept in MB so 8 GB (0x2000) fits in a `u32`. Indices 6 and 7 are unused.
pub const MEMORY_MBYTES: &[u32] = &[
    256,      // 0
    512,      // 1
    1024,     // 2
    2 * 1024, // 3
    4 * 1024, // 4
    8 * 1024, // 5
];

/// Megabytes for a memory index, or 0 if the index is unused.
#[must_use]
pub fn memory_mbytes(index: u32) -> u32 {
    usize::try_from(index)
        .ok()
        .and_then(|i| MEMORY_MBYTES.get(i))
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_sizes() {
        assert_eq!(TYPE.len(), 22);
        assert_eq!(PROCESSOR.len(), 4);
        assert_eq!(MANUFACTURER.len(), 6);
        assert_eq!(REVISION.len(), 6);
        assert_eq!(MEMORY_MBYTES.len(), 6);
    }

    #[test]
    fn in_range_indices_resolve_to_entries() {
        assert_eq!(TYPE.resolve(0x08), "3B");
        assert_eq!(TYPE.resolve(0x15), "CM4S");
        assert_eq!(PROCESSOR.resolve(3), "BCM2711");
        assert_eq!(MANUFACTURER.resolve(5), "Stadium");
        assert_eq!(REVISION.resolve(0), "1.0");
    }

    #[test]
    fn reserved_index_uses_declared_label() {
        assert_eq!(MANUFACTURER.resolve(15), "Qisda");
        assert_eq!(REVISION.resolve(15), "2.0");
    }

    #[test]
    fn other_out_of_range_indices_are_unknown() {
        for index in 6..15 {
            assert_eq!(MANUFACTURER.resolve(index), UNKNOWN);
            assert_eq!(REVISION.resolve(index), UNKNOWN);
        }
        assert_eq!(MANUFACTURER.resolve(16), UNKNOWN);
        assert_eq!(TYPE.resolve(0x16), UNKNOWN);
        assert_eq!(TYPE.resolve(0xFF), UNKNOWN);
        assert_eq!(PROCESSOR.resolve(4), UNKNOWN);
        assert_eq!(PROCESSOR.resolve(15), UNKNOWN);
        assert_eq!(TYPE.resolve(u32::MAX), UNKNOWN);
    }

    #[test]
    fn table_without_reservation_ignores_reserved_lookup() {
        assert_eq!(PROCESSOR.reserved(), None);
        assert_eq!(PROCESSOR.get(15), None);
    }

    #[test]
    fn memory_bounds_are_strict() {
        assert_eq!(memory_mbytes(1), 512);
        assert_eq!(memory_mbytes(5), 8192);
        // Exactly one past the end must already be unknown.
        assert_eq!(memory_mbytes(6), 0);
        assert_eq!(memory_mbytes(7), 0);
    }
}
