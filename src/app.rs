// src/app.rs
use eframe::egui;

use crate::state::{AppState, Section};
use crate::ui::{alert, footer, form, header, table};

const BANNER_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);

pub struct PortalApp {
    state: AppState,
}

impl PortalApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn show_page(&mut self, ui: &mut egui::Ui, narrow: bool) {
        let top = ui.allocate_response(egui::Vec2::ZERO, egui::Sense::hover());
        if self.state.take_scroll_target(Section::Home) {
            top.scroll_to_me(Some(egui::Align::TOP));
        }

        // No room for the side panel: stack the navigation above the data
        if narrow {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                header::show_side_navigation(ui, &mut self.state);
            });
            ui.add_space(8.0);
        }

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            table::show_data_view(ui, &mut self.state);

            ui.add_space(16.0);
            ui.separator();
            form::show_add_form(ui, &mut self.state);
        });
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let narrow = ctx.screen_rect().width() < header::MOBILE_BREAKPOINT;
        let enabled = self.state.alert.is_none();

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::default().fill(BANNER_GREEN).inner_margin(egui::Margin::same(12.0)))
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    header::show_header(ui, &mut self.state, narrow);
                });
            });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            footer::show_footer(ui);
        });

        if !narrow {
            let panel = if self.state.direction.is_rtl() {
                egui::SidePanel::right("side_navigation")
            } else {
                egui::SidePanel::left("side_navigation")
            };
            panel.resizable(false).default_width(180.0).show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    header::show_side_navigation(ui, &mut self.state);
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("page_scroll")
                .show(ui, |ui| {
                    ui.add_enabled_ui(enabled, |ui| {
                        self.show_page(ui, narrow);
                    });
                });
        });

        alert::show_alert(ctx, &mut self.state);
    }
}
