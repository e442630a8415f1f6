mod common;

use portugalex_wizard_core::{
    SessionPort, WizardCommand, WizardStep, BITCOIN_MAINNET_CAIP2, SUBMIT_DELAY_MS,
};

use common::{connect, demo_address, new_wizard, reach_amount_step};

#[test]
fn full_withdrawal_flow_reaches_completion() {
    let mut wizard = new_wizard();

    // Step 1 -> 2: the provider reports a connected Bitcoin-mainnet session.
    connect(&mut wizard, BITCOIN_MAINNET_CAIP2);
    assert_eq!(wizard.state().step, WizardStep::Verify);

    // The out-of-band signing interaction completes and is polled.
    wizard
        .session
        .record_siwx_proof("sig1")
        .expect("record proof");
    wizard.handle(WizardCommand::PollProof).expect("poll");
    assert!(wizard.state().ownership_verified);

    // Step 2 -> 3 on explicit confirmation.
    wizard
        .handle(WizardCommand::ConfirmOwnership)
        .expect("confirm ownership");
    assert_eq!(wizard.state().step, WizardStep::Amount);

    // Step 3: enter and confirm the amount.
    wizard
        .handle(WizardCommand::SetAmount {
            amount: "0.1".to_owned(),
        })
        .expect("set amount");
    let outcome = wizard.handle(WizardCommand::SubmitAmount).expect("submit");
    assert_eq!(outcome.schedule_completion_ms, Some(SUBMIT_DELAY_MS));
    assert!(wizard.state().is_loading);
    assert_eq!(wizard.state().step, WizardStep::Amount);

    // The simulated latency elapses.
    wizard
        .handle(WizardCommand::FinishSubmission)
        .expect("finish");

    let state = wizard.state();
    assert_eq!(state.step, WizardStep::Complete);
    assert!(state.withdrawal_complete);
    assert!(!state.is_loading);
    assert_eq!(state.amount, "0.1");
    assert_eq!(state.address.as_deref(), Some(demo_address()));
    assert_eq!(
        wizard.asset_profile().expect("asset profile").symbol,
        "BTC"
    );
}

#[test]
fn asset_profile_follows_the_active_network() {
    let mut wizard = new_wizard();
    connect(&mut wizard, BITCOIN_MAINNET_CAIP2);
    assert_eq!(wizard.asset_profile().expect("profile").symbol, "BTC");

    // Derivation is a pure function of the reported chain, recomputed per
    // read rather than cached at connect time.
    wizard
        .session
        .select_network("eip155:1")
        .expect("switch network");
    assert_eq!(wizard.asset_profile().expect("profile").symbol, "ETH");
}

#[test]
fn reset_returns_to_the_connect_step_without_disconnecting() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);
    wizard
        .handle(WizardCommand::SetAmount {
            amount: "0.1".to_owned(),
        })
        .expect("set amount");
    wizard.handle(WizardCommand::SubmitAmount).expect("submit");
    wizard
        .handle(WizardCommand::FinishSubmission)
        .expect("finish");
    assert_eq!(wizard.state().step, WizardStep::Complete);

    wizard.handle(WizardCommand::Reset).expect("reset");

    let state = wizard.state();
    assert_eq!(state.step, WizardStep::Connect);
    assert!(state.amount.is_empty());
    assert!(!state.withdrawal_complete);
    assert!(!state.ownership_verified);

    // The provider itself was not asked to disconnect.
    let session = wizard.session.session().expect("session");
    assert!(session.connected);

    // And with an unchanged session there is no event to re-advance on.
    let outcome = wizard.handle(WizardCommand::SyncSession).expect("sync");
    assert!(outcome.transition.is_none());
    assert_eq!(wizard.state().step, WizardStep::Connect);
}

#[test]
fn reset_is_only_offered_on_the_completion_step() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);
    let err = wizard
        .handle(WizardCommand::Reset)
        .expect_err("reset before completion must fail");
    assert!(err.to_string().contains("illegal wizard transition"));
}

#[test]
fn transition_log_records_the_whole_journey() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);
    wizard
        .handle(WizardCommand::SetAmount {
            amount: "0.2".to_owned(),
        })
        .expect("set amount");
    wizard.handle(WizardCommand::SubmitAmount).expect("submit");
    wizard
        .handle(WizardCommand::FinishSubmission)
        .expect("finish");

    let reasons: Vec<&str> = wizard
        .transitions()
        .iter()
        .map(|r| r.reason.as_str())
        .collect();
    assert_eq!(
        reasons,
        vec![
            "session connected",
            "ownership confirmed",
            "withdrawal submitted"
        ]
    );
    let seqs: Vec<u64> = wizard.transitions().iter().map(|r| r.event_seq).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
}

#[test]
fn demo_loop_restarts_after_reset_and_reconnect() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);
    wizard
        .handle(WizardCommand::SetAmount {
            amount: "0.05".to_owned(),
        })
        .expect("set amount");
    wizard.handle(WizardCommand::SubmitAmount).expect("submit");
    wizard
        .handle(WizardCommand::FinishSubmission)
        .expect("finish");
    wizard.handle(WizardCommand::Reset).expect("reset");
    assert_eq!(wizard.state().step, WizardStep::Connect);

    // The host offers a disconnect on the connect step; once taken, the
    // next connection is a fresh edge and the journey starts over.
    wizard.session.disconnect().expect("disconnect");
    wizard.handle(WizardCommand::SyncSession).expect("sync");
    assert_eq!(wizard.state().step, WizardStep::Connect);
    assert!(!wizard.state().connected);

    connect(&mut wizard, BITCOIN_MAINNET_CAIP2);
    let state = wizard.state();
    assert_eq!(state.step, WizardStep::Verify);
    assert!(state.connected);
    assert_eq!(state.address.as_deref(), Some(demo_address()));
    assert!(!state.ownership_verified);
}

#[test]
fn network_switch_after_reset_is_not_a_connection_event() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);
    wizard
        .handle(WizardCommand::SetAmount {
            amount: "0.1".to_owned(),
        })
        .expect("set amount");
    wizard.handle(WizardCommand::SubmitAmount).expect("submit");
    wizard
        .handle(WizardCommand::FinishSubmission)
        .expect("finish");
    wizard.handle(WizardCommand::Reset).expect("reset");

    // Provider stays connected; only the selected network changes.
    wizard.session.select_network("eip155:1").expect("switch");
    let outcome = wizard.handle(WizardCommand::SyncSession).expect("sync");
    assert!(outcome.transition.is_none());
    assert_eq!(wizard.state().step, WizardStep::Connect);

    // The asset derivation still follows the active network.
    assert_eq!(wizard.asset_profile().expect("profile").symbol, "ETH");
}
