use thiserror::Error;

use crate::domain::SessionSnapshot;
use crate::state_machine::TransitionError;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("port not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// The external Wallet Session Provider, reduced to what the wizard reads.
/// Connection, signing and chain communication belong to the provider.
pub trait SessionPort {
    fn session(&self) -> Result<SessionSnapshot, PortError>;
    fn active_chain(&self) -> Result<Option<String>, PortError>;
}

/// Pollable key-value read over the provider's side-channel cache. Injected
/// so tests can fake it deterministically instead of reaching for ambient
/// browser storage.
pub trait ProofCachePort {
    fn read(&self, key: &str) -> Result<Option<String>, PortError>;
}

pub trait ClockPort {
    fn now_ms(&self) -> Result<u64, PortError>;
}
