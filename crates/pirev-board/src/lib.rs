//! Bit-level model of the Raspberry Pi revision code.
//!
//! This crate has **no dependencies** and **no host access**: it is a pure
//! model of the 32-bit revision word found in `/proc/cpuinfo` and in the
//! board's OTP: field positions, the display tables behind each field, and
//! the closed list of legacy codes.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`layout`] | Bit offsets and widths of every field |
//! | [`tables`] | Display names per field, with out-of-range fallbacks |
//! | [`legacy`] | Pre-2014 codes rewritten in current-format layout |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod layout;
pub mod legacy;
pub mod tables;
