// src/ui/footer.rs
use chrono::prelude::*;
use eframe::egui;

pub fn show_footer(ui: &mut egui::Ui) {
    ui.small(format!(
        "© {} CO₂ Transparency Portal — Beispielseite einer Non-Profit-Organisation",
        Local::now().year()
    ));
    ui.small(
        "Rechtliche Hinweise: Alle Daten sind fiktiv. Diese Webseite ist zu Demonstrationszwecken erstellt.",
    );
}
