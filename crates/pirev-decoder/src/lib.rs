//! Decoder for Raspberry Pi board revision codes.
//!
//! Turns the 32-bit revision word reported in `/proc/cpuinfo` into board
//! model, hardware revision, processor, memory size, manufacturer and the
//! OTP / overvoltage / warranty flags.
//!
//! # Pipeline
//!
//! ```text
//! "a02082" ──parse_code──▶ 0x00a02082 ──normalize──▶ RevisionCode
//!                                       (legacy table)      │
//!                                                           ▼
//!                         render_text / render_json ◀── DecodedResult
//! ```
//!
//! # Quick start
//!
//! ```
//! use pirev_decoder::{decode, parse_code, render_text};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = decode(parse_code("0xa02082")?)?;
//! assert_eq!(result.type_name(), "3B");
//! assert_eq!(result.memory(), "1GB");
//! print!("{}", render_text(&result));
//! # Ok(())
//! # }
//! ```
//!
//! Old-style codes (bit 23 clear) are looked up in the legacy table and
//! report no permission flags or processor:
//!
//! ```
//! let result = pirev_decoder::decode(0x0002).unwrap();
//! assert_eq!(result.manufacturer(), "Egoman");
//! assert!(result.processor().is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod code;
pub mod cpuinfo;
mod decode;
mod error;
mod memory;
mod parse;
pub mod render;

/// Board model tables (re-exported from pirev-board).
pub mod board {
    pub use pirev_board::layout::{self, BitField};
    pub use pirev_board::legacy::{self, LegacySlot};
    pub use pirev_board::tables::{self, LookupTable, ReservedIndex, UNKNOWN};
}

pub use code::{RevisionCode, Style};
pub use decode::{decode, decode_all, DecodedResult, Permissions};
pub use error::{DecodeError, Result};
pub use memory::{format_memory, MAX_DISPLAY_GBYTES};
pub use parse::parse_code;
pub use render::{render_json, render_text, OutputFormat};
