//! Guard run outcomes.

use crate::module::UnusableReason;
use crate::shell::CommandResult;

/// How a guard run ended.
#[derive(Debug, Clone)]
pub enum GuardOutcome {
    /// Module loaded and (where checked) the versions matched. Nothing was
    /// printed and nothing was built.
    Ready,

    /// Module was unusable and the build command ran.
    Rebuilt {
        /// Why remediation happened.
        reason: UnusableReason,
        /// Result of the build invocation.
        build: CommandResult,
    },

    /// Module was unusable and abort mode skipped the rebuild.
    Aborted {
        /// Why the guard gave up.
        reason: UnusableReason,
    },
}

impl GuardOutcome {
    /// Whether the module was already usable.
    pub fn is_ready(&self) -> bool {
        matches!(self, GuardOutcome::Ready)
    }

    /// The build result, when a build ran.
    pub fn build_result(&self) -> Option<&CommandResult> {
        match self {
            GuardOutcome::Rebuilt { build, .. } => Some(build),
            _ => None,
        }
    }

    /// The unusable reason, when there was one.
    pub fn reason(&self) -> Option<&UnusableReason> {
        match self {
            GuardOutcome::Ready => None,
            GuardOutcome::Rebuilt { reason, .. } | GuardOutcome::Aborted { reason } => Some(reason),
        }
    }
}
