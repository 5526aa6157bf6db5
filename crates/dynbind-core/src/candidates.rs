//! Candidate (name, version) ordering for the load attempt sequence.
//!
//! Callers list base names in preference order (platform-specific name
//! first) and versions in descending-then-unversioned order. Expansion is
//! row-major: every version of the first name is attempted before the
//! second name, so the first success is deterministic and reproducible.

use crate::error::Result;
use crate::soname::{self, Platform};

/// No version suffix. Mirrors the C reference's `NoVersion` array entry.
pub const NO_VERSION: i32 = -1;

/// Terminates a C-style version array. Mirrors the reference's `EndVersion`.
pub const END_VERSION: i32 = -2;

/// One (base name, version) pair attempted during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Library base name without prefix, extension, or version.
    pub base: String,
    /// Version suffix; `None` means unversioned.
    pub version: Option<u32>,
}

impl Candidate {
    /// New candidate for `base` with an optional version.
    #[must_use]
    pub fn new(base: impl Into<String>, version: Option<u32>) -> Self {
        Self {
            base: base.into(),
            version,
        }
    }

    /// Platform file name for this candidate.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::BindError::NameTooLong`] from composition.
    pub fn file_name(&self, platform: Platform) -> Result<String> {
        soname::build_file_name(platform, &self.base, self.version)
    }
}

/// Expand `names` x `versions` into the load attempt order.
///
/// An empty version list behaves as a single unversioned attempt per name.
#[must_use]
pub fn candidate_sequence(names: &[&str], versions: &[Option<u32>]) -> Vec<Candidate> {
    let versions: &[Option<u32>] = if versions.is_empty() { &[None] } else { versions };
    let mut out = Vec::with_capacity(names.len() * versions.len());
    for name in names {
        for version in versions {
            out.push(Candidate::new(*name, *version));
        }
    }
    out
}

/// Convert a C-style version array terminated by [`END_VERSION`].
///
/// [`NO_VERSION`] maps to an unversioned attempt; entries after the
/// terminator are ignored. Negative values other than the two sentinels are
/// skipped. This exists for callers porting version tables straight from
/// the reference's macro layer; the Rust API itself takes `&[Option<u32>]`.
#[must_use]
pub fn versions_from_raw(raw: &[i32]) -> Vec<Option<u32>> {
    let mut out = Vec::new();
    for &v in raw {
        match v {
            END_VERSION => break,
            NO_VERSION => out.push(None),
            v if v >= 0 => out.push(Some(v as u32)),
            _ => {}
        }
    }
    out
}
