// src/ui/alert.rs
use eframe::egui;

use crate::state::AppState;

/// Blocking notice for refused input. The rest of the page is disabled
/// while it is open.
pub fn show_alert(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.alert.clone() else {
        return;
    };

    egui::Window::new("Hinweis")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(&message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    state.dismiss_alert();
                }
            });
        });
}
