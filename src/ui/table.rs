// src/ui/table.rs
use eframe::egui;

use crate::data::Record;
use crate::state::{AppState, Section, SortField, TableRow};

pub fn show_data_view(ui: &mut egui::Ui, state: &mut AppState) {
    let heading = ui.heading("CO₂-Emissionsdaten (fiktiv)");
    if state.take_scroll_target(Section::Data) {
        heading.scroll_to_me(Some(egui::Align::TOP));
    }
    ui.add_space(8.0);

    show_controls(ui, state);
    ui.add_space(8.0);
    show_table(ui, state);
}

fn show_controls(ui: &mut egui::Ui, state: &mut AppState) {
    let direction = state.direction;

    ui.with_layout(direction.row_layout(), |ui| {
        ui.vertical(|ui| {
            ui.small("Filter: Land");
            let mut country = state.filter.country.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut country)
                    .desired_width(180.0)
                    .hint_text("z. B. Germany"),
            );
            if response.changed() {
                state.set_country_filter(country);
            }
        });

        ui.vertical(|ui| {
            ui.small("Filter: Unternehmen");
            let mut company = state.filter.company.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut company)
                    .desired_width(180.0)
                    .hint_text("z. B. EnerTech"),
            );
            if response.changed() {
                state.set_company_filter(company);
            }
        });

        ui.vertical(|ui| {
            ui.small("Sortieren nach");
            let mut selected = state.sort.field;
            egui::ComboBox::from_id_source("sort_field")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for field in SortField::all() {
                        ui.selectable_value(&mut selected, *field, field.label());
                    }
                });
            if selected != state.sort.field {
                state.select_sort_field(selected);
            }
        });
    });
}

fn column_order(state: &AppState) -> Vec<SortField> {
    let mut fields = SortField::all().to_vec();
    if state.direction.is_rtl() {
        fields.reverse();
    }
    fields
}

fn header_text(state: &AppState, field: SortField) -> String {
    if state.sort.field != field {
        return field.label().to_string();
    }
    let arrow = if state.sort.ascending { "▲" } else { "▼" };
    format!("{} {arrow}", field.label())
}

fn cell_text(record: &Record, field: SortField) -> String {
    match field {
        SortField::Country => record.country.clone(),
        SortField::Company => record.company.clone(),
        SortField::Co2 => TableRow::co2_text(record.co2),
    }
}

fn show_table(ui: &mut egui::Ui, state: &mut AppState) {
    let columns = column_order(state);
    let rows = state.table_rows();

    egui::ScrollArea::horizontal()
        .id_source("records_table_scroll")
        .show(ui, |ui| {
            egui::Grid::new("records_table")
                .num_columns(columns.len())
                .striped(true)
                .spacing([24.0, 8.0])
                .min_col_width(120.0)
                .show(ui, |ui| {
                    // Header
                    let mut clicked = None;
                    for field in &columns {
                        let text = egui::RichText::new(header_text(state, *field)).strong();
                        if ui
                            .add(egui::Button::new(text).frame(false))
                            .on_hover_text("Sortieren")
                            .clicked()
                        {
                            clicked = Some(*field);
                        }
                    }
                    ui.end_row();

                    if let Some(field) = clicked {
                        state.toggle_sort(field);
                    }

                    for row in &rows {
                        match row {
                            TableRow::Record(record) => {
                                for field in &columns {
                                    let text = cell_text(record, *field);
                                    if *field == SortField::Co2 {
                                        ui.with_layout(
                                            egui::Layout::right_to_left(egui::Align::Center),
                                            |ui| ui.label(text),
                                        );
                                    } else {
                                        ui.label(text);
                                    }
                                }
                            }
                            TableRow::Placeholder(message) => {
                                ui.colored_label(egui::Color32::GRAY, *message);
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}
