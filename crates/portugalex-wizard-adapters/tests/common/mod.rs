#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use portugalex_wizard_adapters::{MemoryCacheAdapter, MockWalletAdapter};
use portugalex_wizard_core::{
    ClockPort, Orchestrator, PortError, WizardCommand, BITCOIN_MAINNET_CAIP2,
};

#[derive(Debug, Default)]
pub struct TestClock {
    now: AtomicU64,
}

impl ClockPort for TestClock {
    fn now_ms(&self) -> Result<u64, PortError> {
        Ok(self.now.fetch_add(1, Ordering::SeqCst) + 1_739_750_400_000)
    }
}

pub type TestWizard = Orchestrator<MockWalletAdapter, MemoryCacheAdapter, TestClock>;

pub fn new_wizard() -> TestWizard {
    let cache = MemoryCacheAdapter::in_memory();
    let wallet = MockWalletAdapter::new(cache.clone());
    Orchestrator::new(wallet, cache, TestClock::default())
}

pub fn demo_address() -> &'static str {
    "0xAAA1111111111111111111111111111111111111"
}

/// Connect the mock wallet and pump the session stream once.
pub fn connect(wizard: &mut TestWizard, chain_id: &str) {
    wizard
        .session
        .connect(demo_address(), chain_id)
        .expect("connect mock wallet");
    wizard
        .handle(WizardCommand::SyncSession)
        .expect("sync session");
}

pub fn connect_mainnet(wizard: &mut TestWizard) {
    connect(wizard, BITCOIN_MAINNET_CAIP2);
}

/// Walk a freshly connected wizard to the amount step.
pub fn reach_amount_step(wizard: &mut TestWizard) {
    connect_mainnet(wizard);
    wizard
        .session
        .record_siwx_proof("sig1")
        .expect("record proof");
    wizard
        .handle(WizardCommand::PollProof)
        .expect("poll proof");
    wizard
        .handle(WizardCommand::ConfirmOwnership)
        .expect("confirm ownership");
}
