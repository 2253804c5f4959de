// src/ui/header.rs
use eframe::egui;

use crate::state::{AppState, Section};

/// Below this width the navigation collapses behind a menu button.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

const TOP_LINKS: [Section; 4] = [Section::Home, Section::Data, Section::About, Section::Contact];
const SIDE_LINKS: [(Section, &str); 3] = [
    (Section::Data, "CO₂-Daten"),
    (Section::Add, "Daten hinzufügen"),
    (Section::Method, "Methodik"),
];

pub fn show_header(ui: &mut egui::Ui, state: &mut AppState, narrow: bool) {
    ui.with_layout(state.direction.row_layout(), |ui| {
        ui.label(egui::RichText::new("🌍").size(36.0));
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new("CO₂ Transparency Portal")
                    .size(22.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                egui::RichText::new("Fiktive CO₂-Emissionsdaten — Demonstration")
                    .color(egui::Color32::WHITE),
            );
        });

        // Push navigation to the far edge
        let far_edge = if state.direction.is_rtl() {
            egui::Layout::left_to_right(egui::Align::Center)
        } else {
            egui::Layout::right_to_left(egui::Align::Center)
        };
        ui.with_layout(far_edge, |ui| {
            if narrow {
                let icon = if state.menu_open { "✕" } else { "☰" };
                if ui.button(icon).on_hover_text("Menü öffnen").clicked() {
                    state.toggle_menu();
                }
            } else {
                // laid out from the far edge, so reverse to keep reading order
                for section in TOP_LINKS.iter().rev() {
                    show_banner_link(ui, state, *section);
                }
            }
        });
    });

    if narrow && state.menu_open {
        ui.add_space(6.0);
        ui.group(|ui| {
            for section in TOP_LINKS {
                show_banner_link(ui, state, section);
            }
        });
    }
}

pub fn show_side_navigation(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Navigation");
    ui.add_space(4.0);
    for (section, label) in SIDE_LINKS {
        show_link(ui, state, section, label);
    }
}

fn show_banner_link(ui: &mut egui::Ui, state: &mut AppState, section: Section) {
    let text = egui::RichText::new(section.label()).color(egui::Color32::WHITE);
    if ui.link(text).clicked() {
        state.navigate(section);
    }
}

fn show_link(ui: &mut egui::Ui, state: &mut AppState, section: Section, label: &str) {
    if ui.link(label).clicked() {
        state.navigate(section);
    }
}
