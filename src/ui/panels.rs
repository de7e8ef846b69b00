use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::BlockModel;
use crate::state::{AppState, Status};

/// Rows shown in the preview table, mirroring a dataframe `head()`.
const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Left side panel – column selection and the UPL trigger
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Ultimate Pit Limit");
    ui.separator();

    let Some(model) = &state.model else {
        ui.label("No block model loaded.");
        return;
    };

    // Clone the column list so we can mutate state inside the loop.
    let columns = model.column_names.clone();

    ui.strong("Value column");
    column_selector(ui, "value_column", &columns, &mut state.value_column);
    ui.add_space(4.0);

    ui.strong("Cost column");
    column_selector(ui, "cost_column", &columns, &mut state.cost_column);

    ui.separator();

    let ready = state.value_column.is_some() && state.cost_column.is_some();
    if ui
        .add_enabled(ready, egui::Button::new("Compute UPL"))
        .clicked()
    {
        state.run_classification();
    }

    ui.add_space(4.0);
    ui.checkbox(&mut state.color_by_profit, "Color by profit");
}

/// One combo box enumerating the model's column names.
fn column_selector(ui: &mut Ui, id: &str, columns: &[String], selection: &mut Option<String>) {
    let current = selection.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt(id)
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for col in columns {
                if ui.selectable_label(current == *col, col).clicked() {
                    *selection = Some(col.clone());
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(model) = &state.model {
            ui.label(format!("{} blocks loaded", model.len()));
            ui.separator();
        }

        match &state.status {
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            Some(Status::Success(msg)) => {
                ui.label(RichText::new(msg).color(Color32::from_rgb(40, 160, 60)));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – block model preview
// ---------------------------------------------------------------------------

/// Render the first rows of the model, before and after classification.
pub fn preview_panel(ui: &mut Ui, model: &BlockModel) {
    ui.strong("Block model preview");

    let columns = &model.column_names;
    // Geometry first, then the attribute columns.
    let headers: Vec<&str> = ["x", "y", "z"]
        .into_iter()
        .chain(columns.iter().map(String::as_str))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(60.0), headers.len())
        .header(18.0, |mut header| {
            for name in &headers {
                header.col(|ui| {
                    ui.strong(*name);
                });
            }
        })
        .body(|mut body| {
            for block in model.blocks.iter().take(PREVIEW_ROWS) {
                body.row(16.0, |mut row| {
                    for coord in block.position {
                        row.col(|ui| {
                            ui.label(format!("{coord:.1}"));
                        });
                    }
                    for col in columns {
                        row.col(|ui| {
                            let text = block
                                .attr(col)
                                .map(|v| v.to_string())
                                .unwrap_or_else(|| "<null>".to_string());
                            ui.label(text);
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open block model")
        .add_filter("GeoJSON block model", &["geojson", "json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(model) => {
                log::info!(
                    "Loaded {} blocks with columns {:?}",
                    model.len(),
                    model.column_names
                );
                state.set_model(model);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status = Some(Status::Error(format!("Error loading file: {e:#}")));
            }
        }
    }
}
