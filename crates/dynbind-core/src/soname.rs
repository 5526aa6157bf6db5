//! Platform-specific shared-library file name composition.
//!
//! The three platform families disagree on every part of the name:
//!
//! - ELF unix: `lib<base>.so`, versioned `lib<base>.so.<version>`
//! - macOS:    `lib<base>.dylib`, versioned `lib<base>.<version>.dylib`
//!   (the version goes *before* the extension)
//! - Windows:  `<base>.dll`, version ignored (DLL versioning is resolved
//!   through search-path policy, not filename suffixing)

use crate::error::{BindError, Result};

/// Maximum composed file name length in bytes.
///
/// The reference composed names into a fixed 256-byte buffer; overflow is a
/// deterministic error here rather than a truncation.
pub const MAX_FILE_NAME: usize = 256;

/// Target platform family for name composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// ELF platforms (Linux, BSDs).
    Unix,
    /// Mach-O platforms.
    MacOs,
    /// PE platforms.
    Windows,
}

impl Platform {
    /// The platform family this crate was compiled for.
    ///
    /// Targets outside the three families fall back to ELF naming.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// Compose the platform file name for `base`, optionally versioned.
///
/// Pure and idempotent: the same inputs always produce the same name.
///
/// # Errors
///
/// [`BindError::NameTooLong`] when the composed name exceeds
/// [`MAX_FILE_NAME`] bytes.
pub fn build_file_name(platform: Platform, base: &str, version: Option<u32>) -> Result<String> {
    let name = match (platform, version) {
        (Platform::Unix, None) => format!("lib{base}.so"),
        (Platform::Unix, Some(v)) => format!("lib{base}.so.{v}"),
        (Platform::MacOs, None) => format!("lib{base}.dylib"),
        (Platform::MacOs, Some(v)) => format!("lib{base}.{v}.dylib"),
        (Platform::Windows, _) => format!("{base}.dll"),
    };
    if name.len() > MAX_FILE_NAME {
        return Err(BindError::NameTooLong {
            base: base.to_owned(),
            len: name.len(),
            max: MAX_FILE_NAME,
        });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_naming() {
        assert_eq!(
            build_file_name(Platform::Unix, "z", None).unwrap(),
            "libz.so"
        );
        assert_eq!(
            build_file_name(Platform::Unix, "z", Some(1)).unwrap(),
            "libz.so.1"
        );
    }

    #[test]
    fn macos_version_precedes_extension() {
        assert_eq!(
            build_file_name(Platform::MacOs, "avcodec", None).unwrap(),
            "libavcodec.dylib"
        );
        assert_eq!(
            build_file_name(Platform::MacOs, "avcodec", Some(61)).unwrap(),
            "libavcodec.61.dylib"
        );
    }

    #[test]
    fn windows_ignores_version() {
        assert_eq!(
            build_file_name(Platform::Windows, "zlib", None).unwrap(),
            "zlib.dll"
        );
        assert_eq!(
            build_file_name(Platform::Windows, "zlib", Some(1)).unwrap(),
            "zlib.dll"
        );
    }

    #[test]
    fn idempotent_for_same_inputs() {
        let a = build_file_name(Platform::Unix, "ssl", Some(3)).unwrap();
        let b = build_file_name(Platform::Unix, "ssl", Some(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_name_is_an_error() {
        let base = "x".repeat(MAX_FILE_NAME);
        let err = build_file_name(Platform::Unix, &base, None).unwrap_err();
        match err {
            BindError::NameTooLong { len, max, .. } => {
                assert!(len > max);
                assert_eq!(max, MAX_FILE_NAME);
            }
            other => panic!("expected NameTooLong, got {other:?}"),
        }
    }

    #[test]
    fn boundary_name_is_accepted() {
        // "lib" + base + ".so" == exactly MAX_FILE_NAME bytes.
        let base = "x".repeat(MAX_FILE_NAME - 6);
        let name = build_file_name(Platform::Unix, &base, None).unwrap();
        assert_eq!(name.len(), MAX_FILE_NAME);
    }
}
