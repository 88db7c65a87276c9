//! Native module status types for the guard's probe results.
//!
//! Each probe produces a [`ModuleStatus`] describing whether the platform
//! binary could be loaded. The guard then narrows unusable states into an
//! [`UnusableReason`]: three distinguished causes (missing, load error,
//! version skew) that all funnel into the single remediation branch, but
//! keep distinct notice text.

use std::path::PathBuf;

/// The result of probing the native module artifact.
#[derive(Debug, Clone)]
pub enum ModuleStatus {
    /// The library loaded. When the probe resolved a version symbol, the
    /// reported version string is carried along for comparison.
    Ready {
        /// Version string reported by the module, if queried.
        reported_version: Option<String>,
    },

    /// The artifact file does not exist on disk.
    Missing {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The artifact exists but the dynamic loader rejected it, or the
    /// version symbol could not be resolved or returned nothing.
    LoadFailed {
        /// Loader error text.
        message: String,
    },
}

impl ModuleStatus {
    /// Whether the module loaded successfully.
    pub fn is_ready(&self) -> bool {
        matches!(self, ModuleStatus::Ready { .. })
    }
}

/// Why the native module is unusable.
///
/// Collapses into one remediation path, but each cause keeps its own
/// notice wording so a version mismatch reads differently from a missing
/// binary.
#[derive(Debug, Clone)]
pub enum UnusableReason {
    /// No artifact on disk.
    Missing {
        /// The path that was checked.
        path: PathBuf,
    },

    /// Artifact present but not loadable.
    LoadFailed {
        /// Loader error text.
        message: String,
    },

    /// Artifact loaded but reports a different version than the project
    /// declares.
    VersionMismatch {
        /// Version reported by the module.
        found: String,
        /// Version the project declares.
        expected: String,
    },
}

impl UnusableReason {
    /// Whether this reason is a version mismatch (as opposed to an absent
    /// or broken binary).
    pub fn is_version_mismatch(&self) -> bool {
        matches!(self, UnusableReason::VersionMismatch { .. })
    }

    /// Short description used in status output and debug logs.
    pub fn describe(&self) -> String {
        match self {
            UnusableReason::Missing { path } => {
                format!("no binary at {}", path.display())
            }
            UnusableReason::LoadFailed { message } => {
                format!("binary failed to load: {}", message)
            }
            UnusableReason::VersionMismatch { found, expected } => {
                format!("version mismatch: {} != {}", found, expected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_is_ready() {
        let status = ModuleStatus::Ready {
            reported_version: Some("1.2.0".into()),
        };
        assert!(status.is_ready());
    }

    #[test]
    fn missing_is_not_ready() {
        let status = ModuleStatus::Missing {
            path: PathBuf::from("native/libpty.so"),
        };
        assert!(!status.is_ready());
    }

    #[test]
    fn load_failed_is_not_ready() {
        let status = ModuleStatus::LoadFailed {
            message: "wrong ELF class".into(),
        };
        assert!(!status.is_ready());
    }

    #[test]
    fn mismatch_is_version_mismatch() {
        let reason = UnusableReason::VersionMismatch {
            found: "1.0.0".into(),
            expected: "1.0.1".into(),
        };
        assert!(reason.is_version_mismatch());
    }

    #[test]
    fn missing_is_not_version_mismatch() {
        let reason = UnusableReason::Missing {
            path: PathBuf::from("native/libpty.so"),
        };
        assert!(!reason.is_version_mismatch());
    }

    #[test]
    fn describe_missing_names_path() {
        let reason = UnusableReason::Missing {
            path: PathBuf::from("native/libpty.so"),
        };
        assert!(reason.describe().contains("native/libpty.so"));
    }

    #[test]
    fn describe_load_failure_carries_loader_text() {
        let reason = UnusableReason::LoadFailed {
            message: "undefined symbol".into(),
        };
        assert!(reason.describe().contains("undefined symbol"));
    }

    #[test]
    fn describe_mismatch_names_both_versions() {
        let reason = UnusableReason::VersionMismatch {
            found: "1.0.0".into(),
            expected: "1.0.1".into(),
        };
        let text = reason.describe();
        assert!(text.contains("1.0.0"));
        assert!(text.contains("1.0.1"));
    }
}
