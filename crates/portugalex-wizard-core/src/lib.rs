pub mod domain;
pub mod orchestrator;
pub mod ports;
pub mod state_machine;

pub use domain::{
    asset_profile_for_chain, decode_proof, is_valid_amount, AssetProfile, OwnershipProof,
    SessionSnapshot, TimestampMs, WizardState, WizardStep, BITCOIN_MAINNET_CAIP2,
    BITCOIN_TESTNET_CAIP2, MOCK_TX_HASH, PROOF_POLL_INTERVAL_MS, SIWX_CACHE_KEY, SUBMIT_DELAY_MS,
};
pub use orchestrator::{CommandOutcome, Orchestrator, TransitionRecord, WizardCommand};
pub use ports::{ClockPort, PortError, ProofCachePort, SessionPort};
pub use state_machine::{wizard_transition, StepTransition, TransitionError, WizardAction};
