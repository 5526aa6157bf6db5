//! # dynbind-core
//!
//! Pure logic for binding native shared libraries at runtime: composing
//! platform-specific library file names (optionally versioned), expanding
//! ordered (name, version) candidate sequences, and the error taxonomy
//! shared with the loading layer.
//!
//! Nothing in this crate touches the OS loader; everything is testable on
//! any host against any target platform's naming convention. The actual
//! `dlopen`/`LoadLibraryExW` boundary lives in the `dynbind` crate.

#![deny(unsafe_code)]

pub mod candidates;
pub mod error;
pub mod soname;

pub use candidates::{Candidate, END_VERSION, NO_VERSION, candidate_sequence, versions_from_raw};
pub use error::{BindError, Result};
pub use soname::{MAX_FILE_NAME, Platform, build_file_name};
