mod common;

use portugalex_wizard_core::WizardCommand;

use common::{new_wizard, reach_amount_step};

#[test]
fn confirm_is_disabled_for_invalid_amounts() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);

    for bad in ["0", "-1", "", "abc"] {
        wizard
            .handle(WizardCommand::SetAmount {
                amount: bad.to_owned(),
            })
            .expect("set amount");
        assert!(!wizard.can_submit(), "{bad:?} must leave confirm disabled");
        assert!(
            wizard.handle(WizardCommand::SubmitAmount).is_err(),
            "{bad:?} must be rejected on submit"
        );
    }
}

#[test]
fn confirm_is_enabled_for_a_positive_amount() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);

    wizard
        .handle(WizardCommand::SetAmount {
            amount: "0.01".to_owned(),
        })
        .expect("set amount");
    assert!(wizard.can_submit());
}

#[test]
fn confirm_is_suspended_while_a_submission_is_in_flight() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);
    wizard
        .handle(WizardCommand::SetAmount {
            amount: "0.01".to_owned(),
        })
        .expect("set amount");

    wizard.handle(WizardCommand::SubmitAmount).expect("submit");
    assert!(!wizard.can_submit());
    let err = wizard
        .handle(WizardCommand::SubmitAmount)
        .expect_err("second submit must be rejected");
    assert!(err.to_string().contains("in flight"));
}

#[test]
fn back_is_blocked_while_loading() {
    let mut wizard = new_wizard();
    reach_amount_step(&mut wizard);
    wizard
        .handle(WizardCommand::SetAmount {
            amount: "0.01".to_owned(),
        })
        .expect("set amount");
    wizard.handle(WizardCommand::SubmitAmount).expect("submit");

    assert!(wizard.handle(WizardCommand::GoBack).is_err());
}

#[test]
fn amount_entry_is_only_available_on_the_amount_step() {
    let mut wizard = new_wizard();
    let err = wizard
        .handle(WizardCommand::SetAmount {
            amount: "0.1".to_owned(),
        })
        .expect_err("must fail before the amount step");
    assert!(err.to_string().contains("amount step"));
}
