// src/ui/form.rs
use eframe::egui;

use crate::state::{AppState, Section};

pub fn show_add_form(ui: &mut egui::Ui, state: &mut AppState) {
    let heading = ui.strong("Daten hinzufügen (Beispielformular)");
    if state.take_scroll_target(Section::Add) {
        heading.scroll_to_me(Some(egui::Align::TOP));
    }
    ui.add_space(4.0);

    let mut submitted = false;

    ui.with_layout(state.direction.row_layout(), |ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.form.country)
                .desired_width(160.0)
                .hint_text("Land"),
        )
        .on_hover_text("Land");

        ui.add(
            egui::TextEdit::singleline(&mut state.form.company)
                .desired_width(160.0)
                .hint_text("Unternehmen"),
        )
        .on_hover_text("Unternehmen");

        let co2 = ui
            .add(
                egui::TextEdit::singleline(&mut state.form.co2)
                    .desired_width(100.0)
                    .hint_text("CO₂ in kt"),
            )
            .on_hover_text("CO2");

        // Enter in the last field submits, like a form
        if co2.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }

        let button = egui::Button::new(egui::RichText::new("Hinzufügen").color(egui::Color32::WHITE))
            .fill(egui::Color32::from_rgb(22, 163, 74));
        if ui.add(button).clicked() {
            submitted = true;
        }
    });

    if submitted {
        // refusals already raised the alert inside the state
        if let Err(e) = state.submit_form() {
            tracing::trace!(error = %e, "submission refused, alert pending");
        }
    }
}
