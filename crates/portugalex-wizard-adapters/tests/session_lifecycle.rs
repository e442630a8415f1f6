mod common;

use portugalex_wizard_core::{WizardCommand, WizardStep};

use common::{connect_mainnet, demo_address, new_wizard, reach_amount_step};

#[test]
fn new_connection_advances_to_verification() {
    let mut wizard = new_wizard();
    assert_eq!(wizard.state().step, WizardStep::Connect);

    connect_mainnet(&mut wizard);

    assert_eq!(wizard.state().step, WizardStep::Verify);
    assert!(wizard.state().connected);
    assert_eq!(wizard.state().address.as_deref(), Some(demo_address()));
}

#[test]
fn repeated_sync_without_change_is_a_no_op() {
    let mut wizard = new_wizard();
    connect_mainnet(&mut wizard);
    let transitions_before = wizard.transitions().len();

    for _ in 0..5 {
        let outcome = wizard.handle(WizardCommand::SyncSession).expect("sync");
        assert!(outcome.transition.is_none());
    }
    assert_eq!(wizard.transitions().len(), transitions_before);
}

#[test]
fn disconnection_resets_from_verification_step() {
    let mut wizard = new_wizard();
    connect_mainnet(&mut wizard);

    wizard.session.disconnect().expect("disconnect");
    wizard.handle(WizardCommand::SyncSession).expect("sync");

    assert_eq!(wizard.state().step, WizardStep::Connect);
    assert!(!wizard.state().connected);
    assert!(wizard.state().address.is_none());
    assert!(!wizard.state().ownership_verified);
}

#[test]
fn disconnection_resets_from_amount_step() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);
    assert_eq!(wizard.state().step, WizardStep::Amount);

    wizard.session.disconnect().expect("disconnect");
    let outcome = wizard.handle(WizardCommand::SyncSession).expect("sync");

    let transition = outcome.transition.expect("reset transition");
    assert_eq!(transition.from, WizardStep::Amount);
    assert_eq!(transition.to, WizardStep::Connect);
    assert!(!wizard.state().ownership_verified);
    assert!(wizard.state().address.is_none());
}

#[test]
fn disconnection_mid_submission_clears_loading() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);
    wizard
        .handle(WizardCommand::SetAmount {
            amount: "0.1".to_owned(),
        })
        .expect("set amount");
    wizard.handle(WizardCommand::SubmitAmount).expect("submit");
    assert!(wizard.state().is_loading);

    wizard.session.disconnect().expect("disconnect");
    wizard.handle(WizardCommand::SyncSession).expect("sync");

    assert!(!wizard.state().is_loading);
    assert_eq!(wizard.state().step, WizardStep::Connect);

    // The delayed callback now lands on a reset wizard and must be inert.
    let outcome = wizard
        .handle(WizardCommand::FinishSubmission)
        .expect("stale completion is a no-op");
    assert!(outcome.transition.is_none());
    assert!(!wizard.state().withdrawal_complete);
}

#[test]
fn reconnection_after_disconnect_starts_over() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);

    wizard.session.disconnect().expect("disconnect");
    wizard.handle(WizardCommand::SyncSession).expect("sync");
    connect_mainnet(&mut wizard);

    assert_eq!(wizard.state().step, WizardStep::Verify);
    // The proof cache was dropped with the session, so verification is
    // pending again.
    wizard.handle(WizardCommand::PollProof).expect("poll");
    assert!(!wizard.state().ownership_verified);
}
