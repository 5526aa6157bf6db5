//! Raw platform loader shims.
//!
//! A thin uniform surface over the OS dynamic loader: `open`, `close`,
//! `lookup`, `last_error`. POSIX goes through `libc` with lazy,
//! process-local binding; Windows declares the needed Win32 entry points
//! directly. All policy (candidate iteration, caching, error taxonomy)
//! lives above this module.

use std::ffi::c_void;

/// Opaque native library handle. Null means no library.
pub type RawHandle = *mut c_void;

#[cfg(unix)]
mod imp {
    use std::ffi::{CStr, CString, c_void};

    use super::RawHandle;

    /// `dlopen` with lazy function binding and process-local symbol
    /// visibility. A file name with an interior NUL cannot name a library
    /// and maps to a failed load.
    pub fn open(file: &str) -> RawHandle {
        let Ok(c_file) = CString::new(file) else {
            return std::ptr::null_mut();
        };
        unsafe { libc::dlopen(c_file.as_ptr(), libc::RTLD_LAZY | libc::RTLD_LOCAL) }
    }

    pub fn close(handle: RawHandle) -> bool {
        unsafe { libc::dlclose(handle) == 0 }
    }

    pub fn lookup(handle: RawHandle, symbol: &CStr) -> *mut c_void {
        unsafe { libc::dlsym(handle, symbol.as_ptr()) }
    }

    /// Drain the loader's pending error message, if any.
    pub fn last_error() -> Option<String> {
        let err = unsafe { libc::dlerror() };
        if err.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned())
        }
    }
}

#[cfg(windows)]
mod imp {
    use std::ffi::{CStr, c_char, c_int, c_void};

    use super::RawHandle;

    unsafe extern "system" {
        fn LoadLibraryExW(file: *const u16, reserved: *mut c_void, flags: u32) -> RawHandle;
        fn FreeLibrary(module: RawHandle) -> c_int;
        fn GetProcAddress(module: RawHandle, name: *const c_char) -> *mut c_void;
        fn GetLastError() -> u32;
    }

    /// `LoadLibraryExW` with standard search-path semantics (flags 0).
    /// `DONT_RESOLVE_DLL_REFERENCES` is never used: a handle loaded that
    /// way is unusable for symbol calls.
    pub fn open(file: &str) -> RawHandle {
        let wide: Vec<u16> = file.encode_utf16().chain(std::iter::once(0)).collect();
        unsafe { LoadLibraryExW(wide.as_ptr(), std::ptr::null_mut(), 0) }
    }

    pub fn close(handle: RawHandle) -> bool {
        unsafe { FreeLibrary(handle) != 0 }
    }

    pub fn lookup(handle: RawHandle, symbol: &CStr) -> *mut c_void {
        unsafe { GetProcAddress(handle, symbol.as_ptr()) }
    }

    pub fn last_error() -> Option<String> {
        match unsafe { GetLastError() } {
            0 => None,
            code => Some(format!("Win32 error {code}")),
        }
    }
}

#[cfg(not(any(unix, windows)))]
mod imp {
    use std::ffi::{CStr, c_void};

    use super::RawHandle;

    pub fn open(_file: &str) -> RawHandle {
        std::ptr::null_mut()
    }

    pub fn close(_handle: RawHandle) -> bool {
        false
    }

    pub fn lookup(_handle: RawHandle, _symbol: &CStr) -> *mut c_void {
        std::ptr::null_mut()
    }

    pub fn last_error() -> Option<String> {
        Some("dynamic library loading is not supported on this platform".to_owned())
    }
}

pub use imp::{close, last_error, lookup, open};
