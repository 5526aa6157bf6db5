//! Per-symbol resolution protocol.
//!
//! One [`SymbolBinding`] exists per exported function of a wrapped library.
//! The binding resolves at most once per load (lazily on first use, or
//! eagerly right after load, per facade configuration) and the outcome is
//! sticky until the owning facade unloads: a symbol that failed to resolve
//! keeps failing without re-querying the loader.

use std::ffi::c_void;
use std::ptr::NonNull;

use once_cell::sync::OnceCell;

use dynbind_core::{BindError, Result};

use crate::handle::LibraryHandle;

/// Non-null pointer to a resolved symbol.
///
/// Holding a `SymbolPtr` does not keep the library loaded; the pointer is
/// valid only while the handle it was resolved against stays loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolPtr(NonNull<c_void>);

// SAFETY: the pointee is code or data inside a mapped image; the wrapper
// never dereferences or mutates it.
unsafe impl Send for SymbolPtr {}
unsafe impl Sync for SymbolPtr {}

impl SymbolPtr {
    pub(crate) fn from_raw(raw: *mut c_void) -> Option<Self> {
        NonNull::new(raw).map(Self)
    }

    /// Raw pointer value.
    #[must_use]
    pub fn as_raw(&self) -> *mut c_void {
        self.0.as_ptr()
    }

    /// Reinterpret as a function pointer type.
    ///
    /// # Safety
    ///
    /// `F` must be a function pointer type whose ABI and signature match
    /// the symbol actually exported by the library. No ABI validation is
    /// performed beyond the non-nullness already guaranteed by this type.
    #[must_use]
    pub unsafe fn cast<F: Copy>(&self) -> F {
        debug_assert_eq!(std::mem::size_of::<F>(), std::mem::size_of::<*mut c_void>());
        let raw = self.0.as_ptr();
        unsafe { std::mem::transmute_copy(&raw) }
    }
}

/// One exported function's binding: a name plus a resolve-at-most-once
/// cache of the outcome.
#[derive(Debug)]
pub struct SymbolBinding {
    name: String,
    slot: OnceCell<Option<SymbolPtr>>,
}

impl SymbolBinding {
    /// Unresolved binding for `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slot: OnceCell::new(),
        }
    }

    /// Symbol name this binding resolves.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a successful resolution is cached.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.slot.get(), Some(Some(_)))
    }

    /// Resolve against `library`, at most once per load.
    ///
    /// The once-cell makes the first resolution visible to all threads and
    /// guarantees the loader is queried at most once per symbol per load,
    /// fallback retry included.
    ///
    /// # Errors
    ///
    /// [`BindError::LibraryNotLoaded`] when `library` is not loaded; the
    /// one-shot slot is left untouched so a later load can still resolve.
    /// [`BindError::SymbolUnavailable`] when the lookup failed (sticky
    /// until [`SymbolBinding::reset`]).
    pub fn resolve(&self, library: &LibraryHandle) -> Result<SymbolPtr> {
        if !library.is_loaded() {
            return Err(BindError::LibraryNotLoaded);
        }
        match self.slot.get_or_init(|| library.resolve(&self.name)) {
            Some(ptr) => Ok(*ptr),
            None => Err(BindError::SymbolUnavailable(self.name.clone())),
        }
    }

    /// Forget the cached outcome.
    ///
    /// Called by the owning facade on unload so that no pointer from a
    /// previous load survives into the next one.
    pub fn reset(&mut self) {
        self.slot = OnceCell::new();
    }
}
