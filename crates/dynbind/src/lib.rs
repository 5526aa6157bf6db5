//! # dynbind
//!
//! Call functions in a native shared library that is not linked at build
//! time, without knowing whether the library is present, which candidate
//! names or versions it ships under, or when each entry point gets bound.
//!
//! The pieces, leaves first:
//!
//! - name composition and candidate ordering: pure logic in
//!   [`dynbind_core`], re-exported here
//! - [`LibraryHandle`]: load/unload lifecycle over the OS loader, raw
//!   symbol lookup with the historical underscore-prefix fallback
//! - [`CandidateLoader`]: ordered (name, version) attempts, first success
//!   wins
//! - [`SymbolBinding`]: one per exported function, resolved at most once
//!   per load, lazily or eagerly
//! - [`LibraryApi`]: the per-library facade a generated binding table owns
//!
//! ```no_run
//! use dynbind::{CandidateLoader, LibraryApi, ResolveMode};
//!
//! let loader = CandidateLoader::new(&["z"]).with_versions(&[Some(1), None]);
//! let api = LibraryApi::open(loader, &["zlibVersion"], ResolveMode::Lazy);
//! if api.is_loaded() {
//!     let ptr = api.symbol("zlibVersion").unwrap();
//!     let version: unsafe extern "C" fn() -> *const std::ffi::c_char =
//!         unsafe { ptr.cast() };
//!     let _ = unsafe { version() };
//! }
//! ```

pub mod facade;
pub mod handle;
pub mod loader;
pub mod symbol;
mod sys;

pub use facade::{LibraryApi, ResolveMode};
pub use handle::LibraryHandle;
pub use loader::CandidateLoader;
pub use symbol::{SymbolBinding, SymbolPtr};

pub use dynbind_core::{
    BindError, Candidate, END_VERSION, MAX_FILE_NAME, NO_VERSION, Platform, Result,
    build_file_name, candidate_sequence, versions_from_raw,
};
