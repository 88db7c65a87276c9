//! The Build-Guard procedure.
//!
//! One probe, one classification, one remediation. The satisfied path is
//! silent: a guard that finds nothing wrong must leave an installer's
//! output untouched, however many times it runs.

use tracing::debug;

use crate::config::schema::OnUnusable;
use crate::error::Result;
use crate::module::{platform, ModuleProbe, ModuleStatus, UnusableReason};
use crate::ui::UserInterface;

use super::builder::BuildRunner;
use super::outcome::GuardOutcome;
use super::plan::GuardPlan;

/// Probe the module and decide whether it is usable, without remediating.
///
/// This is the guard's CHECK phase on its own; `belay status` reports it
/// directly.
pub fn evaluate(plan: &GuardPlan, probe: &dyn ModuleProbe) -> Option<UnusableReason> {
    classify(probe.probe(&plan.module), plan.expected_version.as_deref())
}

/// Run the guard: probe the native module and remediate if needed.
pub fn run_guard(
    plan: &GuardPlan,
    probe: &dyn ModuleProbe,
    builder: &dyn BuildRunner,
    ui: &mut dyn UserInterface,
) -> Result<GuardOutcome> {
    let Some(reason) = evaluate(plan, probe) else {
        debug!(path = %plan.module.path.display(), "native module is usable, nothing to do");
        return Ok(GuardOutcome::Ready);
    };

    debug!(reason = %reason.describe(), "native module unusable");
    announce(ui, &reason, plan.on_unusable);

    match plan.on_unusable {
        OnUnusable::Abort => Ok(GuardOutcome::Aborted { reason }),
        OnUnusable::Rebuild => {
            let mut spinner = ui.start_spinner("Building native module...");
            let build = builder.run(&plan.build);
            spinner.finish_and_clear();
            let build = build?;

            if !build.stdout.is_empty() {
                ui.command_output(&build.stdout);
            }
            if !build.stderr.is_empty() {
                ui.command_error(&build.stderr);
            }

            Ok(GuardOutcome::Rebuilt { reason, build })
        }
    }
}

/// Narrow a probe status into an unusable reason, or `None` when the
/// module is fine.
///
/// A reported version is only compared when an expected version exists; a
/// `Ready` probe with no reported version and an expected version cannot
/// happen through [`GuardPlan::resolve`] (the symbol is requested exactly
/// when checking), but is treated as a load failure for safety.
pub fn classify(status: ModuleStatus, expected: Option<&str>) -> Option<UnusableReason> {
    match status {
        ModuleStatus::Missing { path } => Some(UnusableReason::Missing { path }),
        ModuleStatus::LoadFailed { message } => Some(UnusableReason::LoadFailed { message }),
        ModuleStatus::Ready { reported_version } => {
            let expected = expected?;
            match reported_version {
                Some(found) if found == expected => None,
                Some(found) => Some(UnusableReason::VersionMismatch {
                    found,
                    expected: expected.to_string(),
                }),
                None => Some(UnusableReason::LoadFailed {
                    message: "module did not report a version".into(),
                }),
            }
        }
    }
}

/// Print the unusable notices.
///
/// The leading blank line keeps the notice from extending whatever
/// progress line an installer last printed. The platform line is common to
/// every cause; a version mismatch gets its own line first.
fn announce(ui: &mut dyn UserInterface, reason: &UnusableReason, mode: OnUnusable) {
    ui.message("");

    if let UnusableReason::VersionMismatch { found, expected } = reason {
        ui.message(&format!(
            "Native library version mismatch: {} != {}",
            found, expected
        ));
    }

    ui.message(&format!(
        "No current binary was found for the platform {}.",
        platform()
    ));

    if mode == OnUnusable::Rebuild {
        ui.message("A binary will now be built for this platform. This may take a while.");
    }
}
