//! Landing page: what the Travel Rule is and what the demo shows

use eframe::egui;

use crate::app::{App, Tab};
use crate::ui;

pub fn render(app: &mut App, ui_ctx: &mut egui::Ui) {
    ui::styled_heading(ui_ctx, "Travel Rule compliance, demonstrated");
    ui_ctx.label(
        "PortugalEx is a demo exchange showing how a VASP verifies that a \
         customer owns the destination wallet before releasing a withdrawal.",
    );
    ui_ctx.add_space(15.0);

    ui::card(ui_ctx, |ui| {
        ui.label(egui::RichText::new("What is the Travel Rule?").strong());
        ui.label(
            "FATF guidance requires exchanges to collect and exchange \
             sender and receiver identity data for cryptocurrency transfers \
             above a threshold. For withdrawals to self-custodial wallets, \
             that means proving the customer controls the destination.",
        );
    });
    ui_ctx.add_space(8.0);

    ui::card(ui_ctx, |ui| {
        ui.label(egui::RichText::new("How ownership is verified").strong());
        ui.label(
            "The customer connects a wallet and signs a one-time message. \
             The signed proof is cached by the wallet SDK; the withdrawal \
             flow observes it and unlocks the final step.",
        );
    });
    ui_ctx.add_space(8.0);

    ui::card(ui_ctx, |ui| {
        ui.label(egui::RichText::new("Everything here is simulated").strong());
        ui.label(
            "No real funds move. The wallet, balances and the submitted \
             transaction are all mocked so the compliance flow can be \
             walked end to end.",
        );
    });
    ui_ctx.add_space(15.0);

    if ui::primary_button(ui_ctx, "Try the withdrawal demo").clicked() {
        app.active_tab = Tab::Withdrawal;
    }
}
