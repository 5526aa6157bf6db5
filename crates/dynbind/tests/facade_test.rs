//! Integration test: the per-library facade over a real system library.
//!
//! Exercises lazy and eager resolution, sticky per-symbol failures, and
//! reload semantics. Skips politely on hosts without a loadable math
//! library.
//!
//! Run: cargo test -p dynbind --test facade_test

#![cfg(unix)]

use dynbind::{BindError, CandidateLoader, LibraryApi, ResolveMode};

const MISSING: &str = "dynbind_facade_missing_symbol";

fn math_loader() -> CandidateLoader {
    CandidateLoader::new(&["m"]).with_versions(&[Some(6), None])
}

fn open_math(symbols: &[&str], mode: ResolveMode) -> Option<LibraryApi> {
    let api = LibraryApi::open(math_loader(), symbols, mode);
    if api.is_loaded() {
        Some(api)
    } else {
        eprintln!("Skipping: no system math library ({:?})", api.load_error());
        None
    }
}

// ---------------------------------------------------------------------------
// 1. Lazy mode: resolve on first use, cache afterwards
// ---------------------------------------------------------------------------

#[test]
fn lazy_resolution_happens_on_first_use_only() {
    let Some(api) = open_math(&["cos", "sin"], ResolveMode::Lazy) else {
        return;
    };
    assert_eq!(api.mode(), ResolveMode::Lazy);
    assert!(!api.is_resolved("cos"));
    assert!(!api.is_resolved("sin"));

    let first = api.symbol("cos").unwrap();
    assert!(api.is_resolved("cos"));
    // sin is still untouched: only the used symbol paid for resolution.
    assert!(!api.is_resolved("sin"));

    // Repeated calls reuse the cached pointer.
    let second = api.symbol("cos").unwrap();
    assert_eq!(first, second);

    let cos: unsafe extern "C" fn(f64) -> f64 = unsafe { first.cast() };
    assert!((unsafe { cos(0.0) } - 1.0).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// 2. Per-symbol failure is sticky and does not poison the rest
// ---------------------------------------------------------------------------

#[test]
fn failed_symbol_is_sticky_and_isolated() {
    let Some(api) = open_math(&["cos", MISSING], ResolveMode::Lazy) else {
        return;
    };

    let err = api.symbol(MISSING).unwrap_err();
    assert_eq!(err, BindError::SymbolUnavailable(MISSING.to_owned()));
    // Same outcome on every retry, without re-querying the loader.
    assert_eq!(api.symbol(MISSING).unwrap_err(), err);

    // Other symbols of the same facade remain usable.
    assert!(api.symbol("cos").is_ok());
}

// ---------------------------------------------------------------------------
// 3. Eager mode: everything declared resolves right after load
// ---------------------------------------------------------------------------

#[test]
fn eager_mode_resolves_all_declared_symbols_after_load() {
    let Some(api) = open_math(&["cos", "sin", MISSING], ResolveMode::Eager) else {
        return;
    };
    assert!(api.is_resolved("cos"));
    assert!(api.is_resolved("sin"));
    // The missing one was recorded, not fatal.
    assert!(!api.is_resolved(MISSING));
    assert_eq!(
        api.symbol(MISSING).unwrap_err(),
        BindError::SymbolUnavailable(MISSING.to_owned())
    );
    assert!(api.symbol("sin").is_ok());
}

// ---------------------------------------------------------------------------
// 4. Undeclared symbols
// ---------------------------------------------------------------------------

#[test]
fn undeclared_symbol_yields_symbol_unavailable() {
    let Some(api) = open_math(&["cos"], ResolveMode::Lazy) else {
        return;
    };
    assert_eq!(
        api.symbol("tan").unwrap_err(),
        BindError::SymbolUnavailable("tan".to_owned())
    );
}

// ---------------------------------------------------------------------------
// 5. Unload clears caches; reload re-resolves
// ---------------------------------------------------------------------------

#[test]
fn unload_then_reload_re_resolves() {
    let Some(mut api) = open_math(&["cos"], ResolveMode::Lazy) else {
        return;
    };
    api.symbol("cos").unwrap();
    assert!(api.is_resolved("cos"));

    api.unload().unwrap();
    assert!(!api.is_loaded());
    assert!(!api.is_resolved("cos"));
    assert_eq!(api.symbol("cos").unwrap_err(), BindError::LibraryNotLoaded);

    assert!(api.reload());
    // The binding was reset across the reload; resolution happens afresh.
    assert!(api.symbol("cos").is_ok());
    assert!(api.is_resolved("cos"));
}

// ---------------------------------------------------------------------------
// 6. Eager reload re-resolves immediately
// ---------------------------------------------------------------------------

#[test]
fn eager_reload_resolves_without_first_use() {
    let Some(mut api) = open_math(&["cos", "sin"], ResolveMode::Eager) else {
        return;
    };
    assert!(api.reload());
    assert!(api.is_resolved("cos"));
    assert!(api.is_resolved("sin"));
}
