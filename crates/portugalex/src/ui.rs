//! UI helper components

use eframe::egui;

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(egui::Color32::from_rgb(0, 212, 170)));
}

/// Render content in a subtle card/frame
pub fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, add_contents);
}

/// Render content in a highlighted card (slightly brighter)
pub fn card_highlighted(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    let bg = ui.visuals().faint_bg_color.linear_multiply(1.3);
    egui::Frame::none()
        .fill(bg)
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, add_contents);
}

/// Primary action button - teal/accent colored, prominent
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let accent = egui::Color32::from_rgb(0, 180, 150);
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(130.0, 34.0))
        .fill(accent);
    ui.add(btn)
}

/// Primary button with enabled state
pub fn primary_button_enabled(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let accent = egui::Color32::from_rgb(0, 180, 150);
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(130.0, 34.0))
        .fill(accent);
    ui.add_enabled(enabled, btn)
}

/// Secondary action button - subdued, outline style
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0))
        .min_size(egui::vec2(90.0, 34.0));
    ui.add(btn)
}

/// One badge of the step indicator row
pub fn step_badge(ui: &mut egui::Ui, number: u8, label: &str, reached: bool) {
    let accent = egui::Color32::from_rgb(0, 180, 150);
    let (fill, text_color) = if reached {
        (accent, egui::Color32::WHITE)
    } else {
        (ui.visuals().faint_bg_color, ui.visuals().weak_text_color())
    };
    egui::Frame::none()
        .fill(fill)
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("Step {number}"))
                    .small()
                    .color(text_color),
            );
        });
    if reached {
        ui.label(egui::RichText::new(label).strong());
    } else {
        ui.label(egui::RichText::new(label).weak());
    }
}

/// Success message display
pub fn success_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("✅").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(80, 200, 120)));
    });
}

/// Informational alert box
pub fn info_alert(ui: &mut egui::Ui, title: &str, message: &str) {
    card_highlighted(ui, |ui| {
        ui.label(egui::RichText::new(format!("ℹ {title}")).strong());
        ui.label(message);
    });
}

/// Loading spinner
pub fn loading_spinner(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(message);
    });
}

/// Display a value with a copy button; returns true when copied
pub fn copyable_value(ui: &mut egui::Ui, shown: &str, full: &str) -> bool {
    let mut copied = false;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(shown).monospace());
        if ui
            .small_button("📋")
            .on_hover_text("Copy to clipboard")
            .clicked()
        {
            copy_to_clipboard(full);
            copied = true;
        }
    });
    copied
}

/// Copy to clipboard (platform-specific)
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let navigator = window.navigator();
        let clipboard = navigator.clipboard();
        let _ = clipboard.write_text(text);
    }
}

/// Shorten an address or hash the way the original site does:
/// first six characters, an ellipsis, then the last four.
pub fn truncate_middle(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count <= 10 {
        return value.to_string();
    }
    let head: String = value.chars().take(6).collect();
    let tail: String = value.chars().skip(char_count - 4).collect();
    format!("{head}...{tail}")
}
