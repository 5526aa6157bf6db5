//! Error taxonomy for library loading and symbol resolution.
//!
//! Every failure mode is a first-class value. Load failures for individual
//! candidates are swallowed by the candidate pass and only surface as the
//! aggregate [`BindError::LoadFailed`]; symbol failures are deferred to the
//! first use of that specific symbol.

use thiserror::Error;

/// Result alias used across the dynbind crates.
pub type Result<T> = std::result::Result<T, BindError>;

/// Failures of the binding core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The composed library file name exceeded [`crate::MAX_FILE_NAME`].
    #[error("library file name for `{base}` is {len} bytes, over the {max}-byte limit")]
    NameTooLong {
        /// Base name the composition started from.
        base: String,
        /// Length the composed name would have had.
        len: usize,
        /// The enforced limit.
        max: usize,
    },

    /// No (name, version) candidate produced a loadable library.
    #[error("no candidate library could be loaded (tried: {})", .tried.join(", "))]
    LoadFailed {
        /// File names attempted, in order.
        tried: Vec<String>,
    },

    /// A specific entry point could not be resolved. Other symbols of the
    /// same library remain usable.
    #[error("symbol `{0}` could not be resolved")]
    SymbolUnavailable(String),

    /// A call that requires the library was made while it was not loaded.
    #[error("library is not loaded")]
    LibraryNotLoaded,

    /// The OS reported an error while unloading. The handle is still
    /// detached; this is informational, not fatal.
    #[error("unloading `{0}` reported an error")]
    UnloadFailed(String),
}
