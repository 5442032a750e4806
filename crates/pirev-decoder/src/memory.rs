//! Memory size formatting

/// Largest GB figure that fits the four-digit display slot.
pub const MAX_DISPLAY_GBYTES: u32 = 9999;

/// Render a megabyte count as "512MB" or "8GB".
///
/// Sizes of 1024 MB and up are shown in whole gigabytes, truncating any
/// fraction (3.5 GB reads "3GB"). No padding, no leading zeros. Zero is the
/// unknown size and renders as an empty string, as does a gigabyte figure
/// wider than four digits.
#[must_use]
pub fn format_memory(mbytes: u32) -> String {
    match mbytes {
        0 => String::new(),
        1..=1023 => format!("{mbytes}MB"),
        _ => {
            let gbytes = mbytes / 1024;
            if gbytes <= MAX_DISPLAY_GBYTES {
                format!("{gbytes}GB")
            } else {
                String::new()
            }
        }
    }
}
