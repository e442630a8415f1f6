//! Main application state and update loop

use std::time::Duration;

use eframe::egui;

use portugalex_wizard_adapters::{MemoryCacheAdapter, MockWalletAdapter, SystemClockAdapter};
use portugalex_wizard_core::{
    ClockPort, Orchestrator, WizardCommand, BITCOIN_MAINNET_CAIP2, BITCOIN_TESTNET_CAIP2,
    PROOF_POLL_INTERVAL_MS,
};

use crate::{home, withdrawal};

/// Address the demo wallet reports once "connected".
pub const DEMO_ADDRESS: &str = "0xAAA52aF3b84e21C709aa1C70aB3f4a65C74eF5A6";

/// Signature the demo wallet caches when the simulated signing prompt is
/// approved.
pub const DEMO_SIGNATURE: &str = "0x8f1e2d3c4b5a69788796a5b4c3d2e1f0aa1b2c3d";

/// How long the simulated wallet takes to produce the ownership signature.
const SIGNING_DELAY_MS: u64 = 1_200;

/// Networks offered by the demo wallet.
pub const NETWORK_CHOICES: &[(&str, &str)] = &[
    ("Bitcoin", BITCOIN_MAINNET_CAIP2),
    ("Bitcoin Testnet", BITCOIN_TESTNET_CAIP2),
];

pub type DemoWizard = Orchestrator<MockWalletAdapter, MemoryCacheAdapter, SystemClockAdapter>;

/// The main application state
pub struct App {
    /// Current active tab
    pub(crate) active_tab: Tab,
    /// The withdrawal wizard over the demo wallet adapters
    pub(crate) wizard: DemoWizard,
    /// Clock shared with the wizard, used for the host-side timers
    pub(crate) clock: SystemClockAdapter,
    /// Last ownership-proof poll, ms since epoch
    last_poll_ms: u64,
    /// Deadline of the one-shot simulated-submission callback
    pub(crate) pending_completion_at_ms: Option<u64>,
    /// Deadline of the simulated wallet signing prompt
    pub(crate) sign_pending_until_ms: Option<u64>,
    /// CAIP-2 id the connect trigger will use
    pub(crate) selected_chain: &'static str,
}

/// Available tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Withdrawal,
}

impl App {
    /// Create a new App instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let cache = MemoryCacheAdapter::in_memory();
        let wallet = MockWalletAdapter::new(cache.clone());
        let clock = SystemClockAdapter;
        let wizard = Orchestrator::new(wallet, cache, clock.clone());

        Self {
            active_tab: Tab::default(),
            wizard,
            clock,
            last_poll_ms: 0,
            pending_completion_at_ms: None,
            sign_pending_until_ms: None,
            selected_chain: BITCOIN_MAINNET_CAIP2,
        }
    }

    /// Drive the wizard's event sources: the session stream, the
    /// fixed-period proof poll and the host-scheduled one-shot callbacks.
    fn pump_wizard(&mut self) {
        let now = match self.clock.now_ms() {
            Ok(now) => now,
            Err(e) => {
                tracing::warn!("clock unavailable: {e}");
                return;
            }
        };

        if let Err(e) = self.wizard.handle(WizardCommand::SyncSession) {
            tracing::warn!("session sync failed: {e}");
        }

        if now >= self.last_poll_ms + PROOF_POLL_INTERVAL_MS {
            self.last_poll_ms = now;
            if let Err(e) = self.wizard.handle(WizardCommand::PollProof) {
                tracing::warn!("proof poll failed: {e}");
            }
        }

        if let Some(deadline) = self.sign_pending_until_ms {
            if now >= deadline {
                self.sign_pending_until_ms = None;
                if let Err(e) = self.wizard.session.record_siwx_proof(DEMO_SIGNATURE) {
                    tracing::warn!("signing simulation failed: {e}");
                }
            }
        }

        if let Some(deadline) = self.pending_completion_at_ms {
            if now >= deadline {
                self.pending_completion_at_ms = None;
                match self.wizard.handle(WizardCommand::FinishSubmission) {
                    Ok(outcome) => {
                        if let Some(t) = outcome.transition {
                            tracing::debug!("wizard transition: {:?} -> {:?}", t.from, t.to);
                        }
                    }
                    Err(e) => tracing::warn!("submission completion failed: {e}"),
                }
            }
        }
    }

    /// Begin the simulated wallet signing prompt.
    pub(crate) fn start_signing_prompt(&mut self) {
        if self.sign_pending_until_ms.is_some() {
            return;
        }
        if let Ok(now) = self.clock.now_ms() {
            self.sign_pending_until_ms = Some(now + SIGNING_DELAY_MS);
        }
    }

    /// Confirm the withdrawal and schedule the delayed completion.
    pub(crate) fn submit_amount(&mut self) {
        match self.wizard.handle(WizardCommand::SubmitAmount) {
            Ok(outcome) => {
                if let Some(delay_ms) = outcome.schedule_completion_ms {
                    if let Ok(now) = self.clock.now_ms() {
                        self.pending_completion_at_ms = Some(now + delay_ms);
                    }
                }
            }
            Err(e) => tracing::warn!("submit rejected: {e}"),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.pump_wizard();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("💱 PortugalEx")
                        .size(22.0)
                        .color(egui::Color32::from_rgb(0, 212, 170)),
                );
                ui.add_space(30.0);
                ui.separator();
                ui.add_space(10.0);
                ui.selectable_value(&mut self.active_tab, Tab::Home, "🏠 Home");
                ui.selectable_value(&mut self.active_tab, Tab::Withdrawal, "💸 Withdrawal");
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                match self.active_tab {
                    Tab::Home => home::render(self, ui),
                    Tab::Withdrawal => withdrawal::render(self, ui),
                }
                ui.add_space(20.0);
            });
        });

        // Keep the poll timer and the one-shot callbacks ticking even when
        // no input arrives.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
