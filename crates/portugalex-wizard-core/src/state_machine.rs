use thiserror::Error;

use crate::domain::WizardStep;

/// Events that can move the wizard between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    SessionConnected,
    SessionLost,
    ConfirmOwnership,
    SubmitFinish,
    GoBack,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTransition {
    pub from: WizardStep,
    pub to: WizardStep,
    pub reason: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("illegal wizard transition: {from:?} on {action:?}")]
    Illegal {
        from: WizardStep,
        action: WizardAction,
    },
}

/// Pure step-transition table. Guards that depend on wizard state
/// (verification flag, loading sub-state, amount validity) live in the
/// orchestrator; this only encodes which moves exist at all.
pub fn wizard_transition(
    from: WizardStep,
    action: WizardAction,
) -> Result<(WizardStep, StepTransition), TransitionError> {
    use WizardAction::*;
    use WizardStep::*;

    let (to, reason) = match (from, action) {
        (Connect, SessionConnected) => (Verify, "session connected"),
        (Verify, SessionLost) | (Amount, SessionLost) | (Complete, SessionLost) => {
            (Connect, "session lost")
        }
        (Verify, ConfirmOwnership) => (Amount, "ownership confirmed"),
        (Amount, SubmitFinish) => (Complete, "withdrawal submitted"),
        (Amount, GoBack) => (Verify, "back to verification"),
        (Complete, Reset) => (Connect, "demo reset"),
        _ => return Err(TransitionError::Illegal { from, action }),
    };

    Ok((to, StepTransition { from, to, reason }))
}
