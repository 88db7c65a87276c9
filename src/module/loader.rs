//! Native module probing via dynamic loading.
//!
//! [`LibraryProbe`] attempts to load the platform binary with `libloading`
//! and, when asked, calls its version symbol. The symbol is expected to be
//! C ABI, taking no arguments and returning a NUL-terminated string:
//!
//! ```c
//! const char *version(void);
//! ```
//!
//! The [`ModuleProbe`] trait is the seam that lets the guard runner be
//! exercised in tests without a real dynamic library on disk.

use std::ffi::{c_char, CStr};
use std::path::PathBuf;

use libloading::Library;

use super::status::ModuleStatus;

/// What to probe: the artifact path and, optionally, the version symbol to
/// resolve and call after a successful load.
#[derive(Debug, Clone)]
pub struct ModuleSpec {
    /// Path to the native module artifact.
    pub path: PathBuf,

    /// C symbol returning the module's version string. `None` when version
    /// checking is disabled; loading alone then proves usability.
    pub version_symbol: Option<String>,
}

/// A probe that can determine the status of a native module.
pub trait ModuleProbe {
    /// Attempt to acquire the module handle described by `spec`.
    ///
    /// At most one load attempt per call. Never panics on loader errors;
    /// they are folded into [`ModuleStatus::LoadFailed`].
    fn probe(&self, spec: &ModuleSpec) -> ModuleStatus;
}

/// The real probe: dynamic loading through `libloading`.
#[derive(Debug, Default)]
pub struct LibraryProbe;

impl LibraryProbe {
    /// Create a new library probe.
    pub fn new() -> Self {
        Self
    }
}

impl ModuleProbe for LibraryProbe {
    fn probe(&self, spec: &ModuleSpec) -> ModuleStatus {
        if !spec.path.exists() {
            return ModuleStatus::Missing {
                path: spec.path.clone(),
            };
        }

        // SAFETY: loading a library runs its initializers. The artifact is
        // the project's own native module, named explicitly in config.
        let library = match unsafe { Library::new(&spec.path) } {
            Ok(lib) => lib,
            Err(e) => {
                return ModuleStatus::LoadFailed {
                    message: e.to_string(),
                }
            }
        };

        let Some(symbol_name) = &spec.version_symbol else {
            return ModuleStatus::Ready {
                reported_version: None,
            };
        };

        let mut symbol_bytes = symbol_name.as_bytes().to_vec();
        symbol_bytes.push(0);

        // SAFETY: the symbol signature is part of the module contract
        // (`const char *version(void)`); a module exporting something else
        // under this name is out of contract.
        let reported = unsafe {
            let version_fn: libloading::Symbol<unsafe extern "C" fn() -> *const c_char> =
                match library.get(&symbol_bytes) {
                    Ok(sym) => sym,
                    Err(e) => {
                        return ModuleStatus::LoadFailed {
                            message: format!("version symbol '{}': {}", symbol_name, e),
                        }
                    }
                };

            let ptr = version_fn();
            if ptr.is_null() {
                return ModuleStatus::LoadFailed {
                    message: format!("version symbol '{}' returned null", symbol_name),
                };
            }
            CStr::from_ptr(ptr).to_string_lossy().into_owned()
        };

        ModuleStatus::Ready {
            reported_version: Some(reported),
        }
    }
}
