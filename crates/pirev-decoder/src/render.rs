//! Text and JSON renderers for decoded results
//!
//! ```text
//! Revision code 0xA02082 interpreted:
//!     Style           : New
//!     Overvoltage     : Allowed
//!     OTP Programming : Allowed
//!     OTP Reading     : Allowed
//!     Warranty        : Intact
//!     Type/Model      : 3B
//!     Revision        : 1.2
//!     Processor/SOC   : BCM2837
//!     Memory          : 1GB
//!     Manufacturer    : Sony UK
//! ```

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::decode::DecodedResult;

/// Width of the label column in text output.
const LABEL_WIDTH: usize = 16;

/// Output shape selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned human-readable lines
    #[default]
    Text,
    /// One JSON object per code
    Json,
}

impl OutputFormat {
    /// Render `result` in this format, newline-terminated.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if JSON serialization fails.
    pub fn render(self, result: &DecodedResult) -> serde_json::Result<String> {
        match self {
            Self::Text => Ok(render_text(result)),
            Self::Json => render_json(result),
        }
    }
}

/// Render the text report. Legacy codes omit the permission and processor lines.
#[must_use]
pub fn render_text(result: &DecodedResult) -> String {
    let mut out = format!("Revision code {} interpreted:\n", result.raw());
    let mut field = |label: &str, value: &str| {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "    {label:<width$}: {value}", width = LABEL_WIDTH);
    };

    field("Style", result.style().label());
    if result.permissions().is_some() {
        let code = result.normalized();
        field("Overvoltage", code.overvoltage_str());
        field("OTP Programming", code.otp_programming_str());
        field("OTP Reading", code.otp_reading_str());
        field("Warranty", code.warranty_str());
    }
    field("Type/Model", result.type_name());
    field("Revision", result.revision());
    if let Some(processor) = result.processor() {
        field("Processor/SOC", processor);
    }
    field("Memory", result.memory());
    field("Manufacturer", result.manufacturer());

    out
}

/// Render a JSON object with four-space indentation.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render_json(result: &DecodedResult) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    result.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json only emits UTF-8.
    Ok(String::from_utf8(buf).unwrap_or_default())
}
