use std::fs::File;
use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::export::{export_csv, export_json, ExportError};
use crate::data::loader;
use crate::data::model::VolcanoRecord;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Slider bounds used only while no dataset provides real ones.
const DEFAULT_SLIDER_BOUNDS: (f64, f64) = (0.0, 5000.0);

/// Render the left filter panel: country selector and elevation range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    let Some(spec) = state.spec.clone() else {
        ui.label("The loaded file has no complete rows.");
        return;
    };

    // Clone what we need so we can mutate state inside the widgets.
    let countries = dataset.countries.clone();
    let (lo, hi) = dataset.elevation_bounds.unwrap_or(DEFAULT_SLIDER_BOUNDS);
    let legend = state.color_map.as_ref().map(|cm| cm.legend_entries());

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Country selector ----
            ui.strong("Country");
            egui::ComboBox::from_id_salt("country")
                .selected_text(&spec.country)
                .show_ui(ui, |ui: &mut Ui| {
                    for country in &countries {
                        if ui
                            .selectable_label(spec.country == *country, country)
                            .clicked()
                        {
                            state.set_country(country.clone());
                        }
                    }
                });
            ui.separator();

            // ---- Elevation range ----
            ui.strong("Elevation Range (meters)");
            let mut min_elevation = spec.min_elevation;
            let mut max_elevation = spec.max_elevation;
            let mut changed = false;
            changed |= ui
                .add(
                    Slider::new(&mut min_elevation, lo..=hi)
                        .text("Min")
                        .fixed_decimals(0),
                )
                .changed();
            changed |= ui
                .add(
                    Slider::new(&mut max_elevation, lo..=hi)
                        .text("Max")
                        .fixed_decimals(0),
                )
                .changed();
            if changed {
                state.set_elevation_range(min_elevation, max_elevation);
            }
            ui.separator();

            // ---- Type legend ----
            if let Some(legend) = legend {
                egui::CollapsingHeader::new(RichText::new("Volcano types").strong())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        for (kind, color) in legend {
                            ui.label(RichText::new(kind).color(color));
                        }
                    });
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

            ui.separator();

            let can_export = state
                .result
                .as_ref()
                .is_some_and(|result| result.stats.count > 0);
            if ui
                .add_enabled(can_export, egui::Button::new("Export CSV…"))
                .clicked()
            {
                export_dialog(state, ExportFormat::Csv);
                ui.close_menu();
            }
            if ui
                .add_enabled(can_export, egui::Button::new("Export JSON…"))
                .clicked()
            {
                export_dialog(state, ExportFormat::Json);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let matching = state
                .result
                .as_ref()
                .map(|result| result.stats.count)
                .unwrap_or(0);
            ui.label(format!("{} volcanoes loaded, {matching} matching", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open volcano dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} volcano records from {} countries",
                    dataset.len(),
                    dataset.countries.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

enum ExportFormat {
    Csv,
    Json,
}

fn export_dialog(state: &mut AppState, format: ExportFormat) {
    let Some((dataset, result)) = state.dataset.as_ref().zip(state.result.as_ref()) else {
        return;
    };

    let (label, extension, default_name) = match format {
        ExportFormat::Csv => ("CSV", "csv", "volcanoes_filtered.csv"),
        ExportFormat::Json => ("JSON", "json", "volcanoes_filtered.json"),
    };

    let file = rfd::FileDialog::new()
        .set_title("Export filtered volcanoes")
        .add_filter(label, &[extension])
        .set_file_name(default_name)
        .save_file();

    let Some(path) = file else {
        return;
    };

    let rows = result.filtered.iter().map(|&i| &dataset.records[i]);
    let written = write_export(&path, rows, &format);
    match written {
        Ok(count) => log::info!("Exported {count} records to {}", path.display()),
        Err(e) => {
            log::error!("Export failed: {e}");
            state.status_message = Some(format!("Export failed: {e}"));
        }
    }
}

fn write_export<'a, I>(
    path: &Path,
    rows: I,
    format: &ExportFormat,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a VolcanoRecord>,
{
    let file = File::create(path)?;
    match format {
        ExportFormat::Csv => export_csv(rows, file),
        ExportFormat::Json => export_json(rows, file),
    }
}
