//! Per-library facade: a loaded (or not) library plus its symbol table.
//!
//! This is the contract the binding-generation layer consumes: one facade
//! per wrapped library, one declared symbol per exported function, and a
//! `symbol()` call that guarantees resolution before returning a pointer.

use std::collections::BTreeMap;

use dynbind_core::{BindError, Result};

use crate::handle::LibraryHandle;
use crate::loader::CandidateLoader;
use crate::symbol::{SymbolBinding, SymbolPtr};

/// When symbols are resolved relative to the load. Selected once at facade
/// construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveMode {
    /// Resolve each symbol on its first use. Programs touching a subset of
    /// a large API never pay resolution cost, or hard failures, for the
    /// rest.
    #[default]
    Lazy,
    /// Resolve every declared symbol immediately after a successful load.
    /// Individual failures are recorded per symbol and surface only when
    /// that symbol is requested.
    Eager,
}

/// A wrapped library: candidate loader, handle, and declared symbol set.
///
/// Construction never fails. When no candidate loads, the facade stays
/// unloaded: [`LibraryApi::is_loaded`] returns `false` (the caller's branch
/// point, e.g. to fall back to another implementation), every symbol
/// request yields [`BindError::LibraryNotLoaded`], and
/// [`LibraryApi::load_error`] carries the aggregate failure.
#[derive(Debug)]
pub struct LibraryApi {
    loader: CandidateLoader,
    handle: LibraryHandle,
    bindings: BTreeMap<String, SymbolBinding>,
    mode: ResolveMode,
    load_error: Option<BindError>,
}

impl LibraryApi {
    /// Run the candidate pass and declare the symbol set.
    ///
    /// Symbols not declared here are never resolvable through this facade;
    /// the generated binding table declares one per wrapped function.
    #[must_use]
    pub fn open(loader: CandidateLoader, symbols: &[&str], mode: ResolveMode) -> Self {
        let bindings = symbols
            .iter()
            .map(|s| ((*s).to_owned(), SymbolBinding::new(*s)))
            .collect();
        let mut api = Self {
            loader,
            handle: LibraryHandle::new(),
            bindings,
            mode,
            load_error: None,
        };
        api.attempt_load();
        api
    }

    fn attempt_load(&mut self) {
        match self.loader.load_into(&mut self.handle) {
            Ok(_) => {
                self.load_error = None;
                if self.mode == ResolveMode::Eager {
                    for binding in self.bindings.values() {
                        if let Err(err) = binding.resolve(&self.handle) {
                            tracing::debug!(symbol = binding.name(), %err, "eager resolution failed");
                        }
                    }
                }
            }
            Err(err) => self.load_error = Some(err),
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.handle.is_loaded()
    }

    /// Aggregate failure from the last load attempt, if it failed outright.
    #[must_use]
    pub fn load_error(&self) -> Option<&BindError> {
        self.load_error.as_ref()
    }

    /// File name of the winning candidate.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.handle.file_name()
    }

    #[must_use]
    pub fn mode(&self) -> ResolveMode {
        self.mode
    }

    /// Resolved pointer for a declared symbol, resolving first if needed.
    ///
    /// # Errors
    ///
    /// [`BindError::LibraryNotLoaded`] when no candidate ever loaded;
    /// [`BindError::SymbolUnavailable`] for undeclared names and for
    /// declared names the library does not export.
    pub fn symbol(&self, name: &str) -> Result<SymbolPtr> {
        if !self.handle.is_loaded() {
            return Err(BindError::LibraryNotLoaded);
        }
        let binding = self
            .bindings
            .get(name)
            .ok_or_else(|| BindError::SymbolUnavailable(name.to_owned()))?;
        binding.resolve(&self.handle)
    }

    /// Whether `name` is declared and currently resolved.
    #[must_use]
    pub fn is_resolved(&self, name: &str) -> bool {
        self.bindings.get(name).is_some_and(SymbolBinding::is_resolved)
    }

    /// Unload and forget every cached symbol pointer.
    ///
    /// The facade is unloaded afterwards even when the OS reports an
    /// error. Declared symbols stay declared and resolve again after a
    /// successful [`LibraryApi::reload`].
    ///
    /// # Errors
    ///
    /// Propagates [`BindError::UnloadFailed`] from the handle.
    pub fn unload(&mut self) -> Result<()> {
        for binding in self.bindings.values_mut() {
            binding.reset();
        }
        self.handle.unload()
    }

    /// Unload (if loaded) and run the candidate pass again.
    ///
    /// No pointer cached before the reload is ever reused: every binding is
    /// reset and, in eager mode, re-resolved against the fresh handle.
    /// Returns whether the facade is loaded afterwards.
    pub fn reload(&mut self) -> bool {
        if let Err(err) = self.unload() {
            tracing::debug!(%err, "unload before reload reported an error");
        }
        self.attempt_load();
        self.is_loaded()
    }
}
