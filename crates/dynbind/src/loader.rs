//! Ordered candidate loading.

use dynbind_core::{BindError, Platform, Result, candidate_sequence};

use crate::handle::LibraryHandle;

/// Tries an ordered list of (name, version) candidates until one loads.
///
/// Expansion is row-major over names then versions (see
/// [`candidate_sequence`]); the first loadable file wins. Per-candidate
/// failures are swallowed and only an aggregate [`BindError::LoadFailed`]
/// surfaces when the whole pass comes up empty.
#[derive(Debug, Clone)]
pub struct CandidateLoader {
    names: Vec<String>,
    versions: Vec<Option<u32>>,
    platform: Platform,
}

impl CandidateLoader {
    /// Loader over `names`, unversioned, using the host platform's naming.
    #[must_use]
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| (*n).to_owned()).collect(),
            versions: Vec::new(),
            platform: Platform::host(),
        }
    }

    /// Versions tried per name, in order. Empty behaves as one unversioned
    /// attempt per name.
    #[must_use]
    pub fn with_versions(mut self, versions: &[Option<u32>]) -> Self {
        self.versions = versions.to_vec();
        self
    }

    /// Override the naming convention. Load attempts still go through the
    /// host OS loader; this only changes how file names are composed.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Base names, in preference order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Try every candidate until `handle` loads one.
    ///
    /// Returns the winning file name. Candidates whose name fails to
    /// compose (oversized) are skipped with a debug log; they were never
    /// presented to the OS loader and are not listed in the aggregate
    /// error.
    ///
    /// # Errors
    ///
    /// [`BindError::LoadFailed`] carrying the attempted file names in
    /// order when nothing loaded.
    pub fn load_into(&self, handle: &mut LibraryHandle) -> Result<String> {
        let names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        let mut tried = Vec::new();
        for candidate in candidate_sequence(&names, &self.versions) {
            let file = match candidate.file_name(self.platform) {
                Ok(file) => file,
                Err(err) => {
                    tracing::debug!(base = %candidate.base, %err, "skipping uncomposable candidate");
                    continue;
                }
            };
            tracing::debug!(file = %file, "trying candidate");
            if handle.load(&file) {
                tracing::info!(file = %file, "library loaded");
                return Ok(file);
            }
            tried.push(file);
        }
        Err(BindError::LoadFailed { tried })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_failure_reports_every_attempt_in_order() {
        let loader = CandidateLoader::new(&["dynbind-absent-a", "dynbind-absent-b"])
            .with_versions(&[Some(2), None])
            .with_platform(Platform::Unix);
        let mut handle = LibraryHandle::new();
        let err = loader.load_into(&mut handle).unwrap_err();
        assert!(!handle.is_loaded());
        assert_eq!(
            err,
            BindError::LoadFailed {
                tried: vec![
                    "libdynbind-absent-a.so.2".into(),
                    "libdynbind-absent-a.so".into(),
                    "libdynbind-absent-b.so.2".into(),
                    "libdynbind-absent-b.so".into(),
                ],
            }
        );
    }

    #[test]
    fn oversized_candidates_are_skipped_not_fatal() {
        let huge = "x".repeat(400);
        let loader =
            CandidateLoader::new(&[huge.as_str()]).with_platform(Platform::Unix);
        let mut handle = LibraryHandle::new();
        let err = loader.load_into(&mut handle).unwrap_err();
        assert_eq!(err, BindError::LoadFailed { tried: vec![] });
    }
}
