//! Every legacy revision code against the published board list

use pirev_decoder::{decode, DecodeError, Style};

/// (code, model, revision, memory, manufacturer)
const KNOWN_BOARDS: &[(u32, &str, &str, &str, &str)] = &[
    (0x02, "B", "1.0", "256MB", "Egoman"),
    (0x03, "B", "1.0", "256MB", "Egoman"),
    (0x04, "B", "2.0", "256MB", "Sony UK"),
    (0x05, "B", "2.0", "256MB", "Qisda"),
    (0x06, "B", "2.0", "256MB", "Egoman"),
    (0x07, "A", "2.0", "256MB", "Egoman"),
    (0x08, "A", "2.0", "256MB", "Sony UK"),
    (0x09, "A", "2.0", "256MB", "Qisda"),
    (0x0D, "B", "2.0", "512MB", "Egoman"),
    (0x0E, "B", "2.0", "512MB", "Sony UK"),
    (0x0F, "B", "2.0", "512MB", "Egoman"),
    (0x10, "B+", "1.2", "512MB", "Sony UK"),
    (0x11, "CM1", "1.0", "512MB", "Sony UK"),
    (0x12, "A+", "1.1", "256MB", "Sony UK"),
    (0x13, "B+", "1.2", "512MB", "Embest"),
    (0x14, "CM1", "1.0", "512MB", "Embest"),
    (0x15, "A+", "1.1", "256MB", "Embest"),
];

#[test]
fn test_every_known_legacy_board() {
    for &(code, model, revision, memory, manufacturer) in KNOWN_BOARDS {
        let result = decode(code).unwrap_or_else(|e| panic!("{code:#x}: {e}"));
        assert_eq!(result.style(), Style::Old, "{code:#x}");
        assert_eq!(result.type_name(), model, "{code:#x}");
        assert_eq!(result.revision(), revision, "{code:#x}");
        assert_eq!(result.memory(), memory, "{code:#x}");
        assert_eq!(result.manufacturer(), manufacturer, "{code:#x}");
        assert!(result.permissions().is_none(), "{code:#x}");
        assert!(result.processor().is_none(), "{code:#x}");
    }
}

#[test]
fn test_known_boards_cover_every_valid_slot() {
    assert_eq!(
        KNOWN_BOARDS.len(),
        pirev_decoder::board::legacy::valid_count()
    );
}

#[test]
fn test_invalid_legacy_slots() {
    for code in [0x00, 0x01, 0x0A, 0x0B, 0x0C] {
        match decode(code) {
            Err(DecodeError::UnknownLegacyCode { code: got }) => assert_eq!(got, code),
            other => panic!("{code:#x}: expected UnknownLegacyCode, got {other:?}"),
        }
    }
}

#[test]
fn test_legacy_codes_past_table() {
    for code in [0x16, 0x100, 0x7F_FFFF] {
        assert!(
            matches!(decode(code), Err(DecodeError::UnknownLegacyCode { .. })),
            "{code:#x}"
        );
    }
}

#[test]
fn test_overvolted_legacy_code_is_still_legacy() {
    // Overvolted legacy boards report e.g. 0x1000002. Bit 23 is clear so the
    // whole word is taken as the table index.
    assert!(matches!(
        decode(0x0100_0002),
        Err(DecodeError::UnknownLegacyCode { code: 0x0100_0002 })
    ));
}
