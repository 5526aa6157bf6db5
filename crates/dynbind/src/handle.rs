//! Owned handle to at most one loaded native library.

use std::ffi::CString;

use dynbind_core::{BindError, Result};

use crate::symbol::SymbolPtr;
use crate::sys;

/// Owns zero-or-one loaded native library.
///
/// State machine: `Unloaded --load(success)--> Loaded --unload--> Unloaded`.
/// A failed `load` leaves the handle `Unloaded`. The OS reference-counts
/// handles to the same file across the process; this type adds no
/// refcounting of its own, so two handles to the same library are
/// independent and each must be unloaded.
#[derive(Debug)]
pub struct LibraryHandle {
    raw: sys::RawHandle,
    file: Option<String>,
}

// SAFETY: the native handle is a process-global resource; dlopen/dlsym/
// dlclose and their Win32 counterparts are thread-safe, and every mutation
// of this struct requires `&mut self`.
unsafe impl Send for LibraryHandle {}
unsafe impl Sync for LibraryHandle {}

impl LibraryHandle {
    /// New handle in the `Unloaded` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            raw: std::ptr::null_mut(),
            file: None,
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.raw.is_null()
    }

    /// File name the current load succeeded with.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Attempt to load `file`. Returns whether the handle is now loaded.
    ///
    /// Failure is not an error at this level; the caller is expected to try
    /// the next candidate. Loading over an already-loaded handle is refused
    /// (unload first).
    pub fn load(&mut self, file: &str) -> bool {
        if self.is_loaded() {
            tracing::warn!(file, current = ?self.file, "load refused: handle already loaded");
            return false;
        }
        let raw = sys::open(file);
        if raw.is_null() {
            tracing::debug!(file, error = ?sys::last_error(), "load attempt failed");
            return false;
        }
        self.raw = raw;
        self.file = Some(file.to_owned());
        true
    }

    /// Unload the library.
    ///
    /// The handle is `Unloaded` afterwards even when the OS reports an
    /// error; the error is logged and surfaced, but nothing about the
    /// handle remains to clean up. Unloading an unloaded handle is a no-op.
    ///
    /// # Errors
    ///
    /// [`BindError::UnloadFailed`] when the OS unloader reports an error.
    pub fn unload(&mut self) -> Result<()> {
        if !self.is_loaded() {
            return Ok(());
        }
        let ok = sys::close(self.raw);
        self.raw = std::ptr::null_mut();
        let file = self.file.take().unwrap_or_default();
        if ok {
            Ok(())
        } else {
            tracing::warn!(file = %file, error = ?sys::last_error(), "OS reported an error on unload");
            Err(BindError::UnloadFailed(file))
        }
    }

    /// Look up `symbol`, retrying once with a leading underscore for
    /// platforms using the historical a.out mangling convention.
    ///
    /// Returns `None` while unloaded or when both lookups fail; never
    /// panics. The retry is a single extra lookup on the failure path and
    /// cannot recurse.
    #[must_use]
    pub fn resolve(&self, symbol: &str) -> Option<SymbolPtr> {
        if !self.is_loaded() {
            return None;
        }
        if let Some(ptr) = self.lookup(symbol) {
            return Some(ptr);
        }
        self.lookup(&format!("_{symbol}"))
    }

    fn lookup(&self, symbol: &str) -> Option<SymbolPtr> {
        let c_symbol = CString::new(symbol).ok()?;
        SymbolPtr::from_raw(sys::lookup(self.raw, &c_symbol))
    }
}

impl Default for LibraryHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LibraryHandle {
    fn drop(&mut self) {
        // Unload errors are already logged; nothing else to do here.
        let _ = self.unload();
    }
}
