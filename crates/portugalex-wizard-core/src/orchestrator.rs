use serde::{Deserialize, Serialize};

use crate::domain::{
    asset_profile_for_chain, decode_proof, is_valid_amount, AssetProfile, TimestampMs,
    WizardState, WizardStep, SIWX_CACHE_KEY, SUBMIT_DELAY_MS,
};
use crate::ports::{ClockPort, PortError, ProofCachePort, SessionPort};
use crate::state_machine::{wizard_transition, StepTransition, WizardAction};

#[derive(Debug, Clone, PartialEq)]
pub enum WizardCommand {
    /// React to the provider's session stream (also safe to run every frame).
    SyncSession,
    /// Timer tick: inspect the ownership-proof cache entry.
    PollProof,
    /// Explicit user confirmation on the verification step.
    ConfirmOwnership,
    /// Update the entered amount string. No validation happens here.
    SetAmount { amount: String },
    /// Confirm the withdrawal. Starts the loading sub-state; the host must
    /// schedule `FinishSubmission` after the returned delay.
    SubmitAmount,
    /// Delayed completion callback fired by the host.
    FinishSubmission,
    /// Back from the amount step to verification.
    GoBack,
    /// Clear the whole wizard from the completion step.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandOutcome {
    pub transition: Option<StepTransition>,
    /// When set, the host owes the wizard a one-shot `FinishSubmission`
    /// after this many milliseconds.
    pub schedule_completion_ms: Option<u64>,
}

impl CommandOutcome {
    fn empty() -> Self {
        Self::default()
    }

    fn transitioned(transition: StepTransition) -> Self {
        Self {
            transition: Some(transition),
            schedule_completion_ms: None,
        }
    }
}

/// One entry of the wizard's step-transition log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub event_seq: u64,
    pub from: WizardStep,
    pub to: WizardStep,
    pub reason: String,
    pub recorded_at_ms: TimestampMs,
}

/// Owns the wizard state and sequences the four-step withdrawal flow over
/// the injected session, proof-cache and clock capabilities.
pub struct Orchestrator<S, P, C>
where
    S: SessionPort,
    P: ProofCachePort,
    C: ClockPort,
{
    pub session: S,
    pub proof_cache: P,
    pub clock: C,
    state: WizardState,
    last_session: Option<crate::domain::SessionSnapshot>,
    transitions: Vec<TransitionRecord>,
}

impl<S, P, C> Orchestrator<S, P, C>
where
    S: SessionPort,
    P: ProofCachePort,
    C: ClockPort,
{
    pub fn new(session: S, proof_cache: P, clock: C) -> Self {
        Self {
            session,
            proof_cache,
            clock,
            state: WizardState::default(),
            last_session: None,
            transitions: Vec::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Whether the confirm-withdrawal action is currently enabled.
    pub fn can_submit(&self) -> bool {
        self.state.step == WizardStep::Amount
            && !self.state.is_loading
            && is_valid_amount(&self.state.amount)
    }

    /// Asset facts for the active network. Recomputed on every call so a
    /// network switch is reflected immediately.
    pub fn asset_profile(&self) -> Result<AssetProfile, PortError> {
        let chain = self.session.active_chain()?;
        Ok(asset_profile_for_chain(chain.as_deref()))
    }

    pub fn handle(&mut self, command: WizardCommand) -> Result<CommandOutcome, PortError> {
        match command {
            WizardCommand::SyncSession => self.sync_session(),
            WizardCommand::PollProof => self.poll_proof(),
            WizardCommand::ConfirmOwnership => self.confirm_ownership(),
            WizardCommand::SetAmount { amount } => self.set_amount(amount),
            WizardCommand::SubmitAmount => self.submit_amount(),
            WizardCommand::FinishSubmission => self.finish_submission(),
            WizardCommand::GoBack => self.go_back(),
            WizardCommand::Reset => self.reset(),
        }
    }

    fn sync_session(&mut self) -> Result<CommandOutcome, PortError> {
        let snapshot = self.session.session()?;

        // Edge-triggered: the provider delivers a stream of snapshots and
        // only a change counts as an event. Running this every frame must
        // not re-fire old transitions (a reset wizard stays on the connect
        // step until the session actually changes). The edge keys on the
        // connection fields only; a network switch is not a connection
        // event and is handled by the per-read asset derivation instead.
        let changed = self.last_session.as_ref().map_or(true, |last| {
            last.connected != snapshot.connected || last.address != snapshot.address
        });
        if !changed {
            return Ok(CommandOutcome::empty());
        }
        self.last_session = Some(snapshot.clone());

        // A session only counts as connected once an address is present.
        if snapshot.connected {
            if let Some(address) = snapshot.address {
                if !self.state.connected {
                    self.state.connected = true;
                    self.state.address = Some(address);
                    if self.state.step == WizardStep::Connect {
                        let transition = self.advance(WizardAction::SessionConnected)?;
                        return Ok(CommandOutcome::transitioned(transition));
                    }
                    self.touch()?;
                } else if self.state.address.as_deref() != Some(address.as_str()) {
                    // Account switch within a live session.
                    self.state.address = Some(address);
                    self.touch()?;
                }
                return Ok(CommandOutcome::empty());
            }
        }

        // Disconnection at any step is an unconditional reset to the connect
        // step, clearing the verification flag with it.
        if self.state.connected || self.state.step != WizardStep::Connect {
            let from = self.state.step;
            self.state.clear_connection();
            self.touch()?;
            if from != WizardStep::Connect {
                let (_, transition) = wizard_transition(from, WizardAction::SessionLost)?;
                self.record(&transition)?;
                return Ok(CommandOutcome::transitioned(transition));
            }
        }
        Ok(CommandOutcome::empty())
    }

    fn poll_proof(&mut self) -> Result<CommandOutcome, PortError> {
        let verified = match self.proof_cache.read(SIWX_CACHE_KEY)? {
            // Malformed payloads decode to an unverified proof; the flag is
            // cleared rather than an error surfaced.
            Some(raw) => self.state.connected && decode_proof(&raw).is_verified(),
            None => false,
        };
        if verified != self.state.ownership_verified {
            self.state.ownership_verified = verified;
            self.touch()?;
        }
        Ok(CommandOutcome::empty())
    }

    fn confirm_ownership(&mut self) -> Result<CommandOutcome, PortError> {
        if !self.state.ownership_verified {
            return Err(PortError::Validation(
                "ownership proof not observed yet".to_owned(),
            ));
        }
        let transition = self.advance(WizardAction::ConfirmOwnership)?;
        Ok(CommandOutcome::transitioned(transition))
    }

    fn set_amount(&mut self, amount: String) -> Result<CommandOutcome, PortError> {
        if self.state.step != WizardStep::Amount {
            return Err(PortError::Validation(
                "amount entry is only available on the amount step".to_owned(),
            ));
        }
        if self.state.amount != amount {
            self.state.amount = amount;
            self.touch()?;
        }
        Ok(CommandOutcome::empty())
    }

    fn submit_amount(&mut self) -> Result<CommandOutcome, PortError> {
        if self.state.is_loading {
            return Err(PortError::Validation(
                "a submission is already in flight".to_owned(),
            ));
        }
        if !self.state.connected {
            return Err(PortError::Validation("wallet not connected".to_owned()));
        }
        if self.state.step != WizardStep::Amount {
            return Err(PortError::Validation(
                "submission is only available on the amount step".to_owned(),
            ));
        }
        if !is_valid_amount(&self.state.amount) {
            return Err(PortError::Validation(format!(
                "invalid amount: {:?}",
                self.state.amount
            )));
        }
        self.state.is_loading = true;
        self.touch()?;
        Ok(CommandOutcome {
            transition: None,
            schedule_completion_ms: Some(SUBMIT_DELAY_MS),
        })
    }

    fn finish_submission(&mut self) -> Result<CommandOutcome, PortError> {
        // A stale callback (disconnect mid-delay, or a torn-down host) must
        // land as a no-op, not an error.
        if !self.state.is_loading || self.state.step != WizardStep::Amount {
            return Ok(CommandOutcome::empty());
        }
        self.state.is_loading = false;
        self.state.withdrawal_complete = true;
        let transition = self.advance(WizardAction::SubmitFinish)?;
        Ok(CommandOutcome::transitioned(transition))
    }

    fn go_back(&mut self) -> Result<CommandOutcome, PortError> {
        if self.state.is_loading {
            return Err(PortError::Validation(
                "cannot go back while a submission is in flight".to_owned(),
            ));
        }
        let transition = self.advance(WizardAction::GoBack)?;
        Ok(CommandOutcome::transitioned(transition))
    }

    fn reset(&mut self) -> Result<CommandOutcome, PortError> {
        let (_, transition) = wizard_transition(self.state.step, WizardAction::Reset)?;
        self.state.reset();
        self.touch()?;
        self.record(&transition)?;
        Ok(CommandOutcome::transitioned(transition))
    }

    fn advance(&mut self, action: WizardAction) -> Result<StepTransition, PortError> {
        let (to, transition) = wizard_transition(self.state.step, action)?;
        self.state.step = to;
        self.touch()?;
        self.record(&transition)?;
        Ok(transition)
    }

    fn touch(&mut self) -> Result<(), PortError> {
        self.state.updated_at_ms = TimestampMs(self.clock.now_ms()?);
        Ok(())
    }

    fn record(&mut self, transition: &StepTransition) -> Result<(), PortError> {
        let event_seq = self.transitions.last().map(|r| r.event_seq + 1).unwrap_or(1);
        self.transitions.push(TransitionRecord {
            event_seq,
            from: transition.from,
            to: transition.to,
            reason: transition.reason.to_owned(),
            recorded_at_ms: TimestampMs(self.clock.now_ms()?),
        });
        Ok(())
    }
}
