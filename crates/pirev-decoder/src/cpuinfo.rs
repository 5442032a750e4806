//! Revision code of the running board, from `/proc/cpuinfo`
//!
//! On a Raspberry Pi the kernel reports the board's revision word as a line
//! such as `Revision\t: c03111`.

use std::path::Path;

use crate::error::{DecodeError, Result};

/// Default location of the cpuinfo file.
pub const DEFAULT_PATH: &str = "/proc/cpuinfo";

/// Find the value of the first `Revision : <value>` line.
///
/// The key must start the line; whitespace around the colon is optional.
/// Only the first whitespace-delimited token of the value is returned.
#[must_use]
pub fn parse_revision(cpuinfo: &str) -> Option<&str> {
    cpuinfo.lines().find_map(|line| {
        let rest = line.strip_prefix("Revision")?.trim_start();
        rest.strip_prefix(':')?.split_whitespace().next()
    })
}

/// Read the board's revision code string from a cpuinfo file.
///
/// # Errors
///
/// Returns `DecodeError::CpuInfoUnavailable` if the file cannot be read and
/// `DecodeError::RevisionNotFound` if it has no `Revision` line.
pub fn read_revision(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    tracing::debug!("Reading revision code from {}", path.display());

    let contents = std::fs::read_to_string(path)
        .map_err(|e| DecodeError::cpuinfo_unavailable(path, e))?;

    let revision = parse_revision(&contents)
        .ok_or_else(|| DecodeError::revision_not_found(path))?;

    tracing::debug!("Found revision {revision}");
    Ok(revision.to_owned())
}
