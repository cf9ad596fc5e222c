use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, Points};

use crate::color::DEFAULT_POINT_COLOR;
use crate::data::model::{VolcanoDataset, VolcanoRecord};
use crate::data::query::{Centroid, QueryOutput};
use crate::state::AppState;

/// Half-width of the map's initial viewport, in degrees, around the
/// centroid of the filtered set.
const MAP_SPAN_DEGREES: f64 = 16.0;

const TABLE_HEIGHT: f32 = 220.0;
const CHART_HEIGHT: f32 = 240.0;
const MAP_HEIGHT: f32 = 300.0;

// ---------------------------------------------------------------------------
// Central panel – table, bar chart, map
// ---------------------------------------------------------------------------

/// Render the central panel: the filtered table, the top-5 bar chart, and
/// the location map, or the appropriate placeholder.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a volcano dataset to get started  (File → Open…)");
        });
        return;
    };

    let (Some(spec), Some(result)) = (&state.spec, &state.result) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("This file contains no complete volcano records.");
        });
        return;
    };

    if result.stats.count == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(
                RichText::new("No volcanoes found in that range.").color(Color32::GOLD),
            );
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.label(
                RichText::new(format!(
                    "Found {} volcanoes in {}!",
                    result.stats.count, spec.country
                ))
                .color(Color32::DARK_GREEN)
                .strong(),
            );
            ui.add_space(6.0);

            ui.heading("Filtered Volcanoes");
            filtered_table(ui, dataset, result);
            ui.add_space(12.0);

            ui.heading("Top 5 Tallest Volcanoes");
            top_bar_chart(ui, dataset, result);
            ui.add_space(12.0);

            ui.heading("Map of Volcano Locations");
            location_map(ui, state, dataset, result);
        });
}

// ---------------------------------------------------------------------------
// Filtered table
// ---------------------------------------------------------------------------

fn filtered_table(ui: &mut Ui, dataset: &VolcanoDataset, result: &QueryOutput) {
    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(TABLE_HEIGHT)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder().at_least(70.0))
        .header(20.0, |mut header| {
            for title in [
                "Volcano Name",
                "Country",
                "Type",
                "Elevation (Meters)",
                "Latitude",
                "Longitude",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for &idx in &result.filtered {
                let r = &dataset.records[idx];
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(r.name.as_deref().unwrap_or(""));
                    });
                    row.col(|ui| {
                        ui.label(&r.country);
                    });
                    row.col(|ui| {
                        ui.label(r.kind.as_deref().unwrap_or(""));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", r.elevation));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", r.latitude));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", r.longitude));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top-5 bar chart
// ---------------------------------------------------------------------------

fn top_bar_chart(ui: &mut Ui, dataset: &VolcanoDataset, result: &QueryOutput) {
    let names: Vec<String> = result
        .top_n
        .iter()
        .map(|&idx| dataset.records[idx].display_name().to_string())
        .collect();

    let bars: Vec<Bar> = result
        .top_n
        .iter()
        .enumerate()
        .map(|(slot, &idx)| {
            let r: &VolcanoRecord = &dataset.records[idx];
            Bar::new(slot as f64, r.elevation)
                .name(r.display_name())
                .width(0.6)
                .fill(DEFAULT_POINT_COLOR)
        })
        .collect();

    Plot::new("top5_chart")
        .height(CHART_HEIGHT)
        .y_axis_label("Elevation (m)")
        .x_axis_formatter(move |mark, _range| {
            // Label only the integer marks that carry a bar.
            let slot = mark.value.round();
            if (mark.value - slot).abs() > 0.05 || slot < 0.0 {
                return String::new();
            }
            names.get(slot as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Location map
// ---------------------------------------------------------------------------

/// Scatter of the filtered records at (longitude, latitude), coloured by
/// type, with a cross at the centroid. The initial viewport is a fixed span
/// around the centroid; panning and zooming stay enabled.
fn location_map(ui: &mut Ui, state: &AppState, dataset: &VolcanoDataset, result: &QueryOutput) {
    let Some(Centroid {
        mean_latitude,
        mean_longitude,
    }) = result.stats.centroid
    else {
        // Unreachable behind the zero-count branch, but never worth a panic.
        return;
    };

    // One point series per volcano type so the legend lists each type once.
    let mut series: Vec<(String, Color32, Vec<[f64; 2]>)> = Vec::new();
    for &idx in &result.filtered {
        let r = &dataset.records[idx];
        let label = r.kind.as_deref().unwrap_or("Unknown type");
        let color = state
            .color_map
            .as_ref()
            .map(|cm| cm.color_for(r.kind.as_deref()))
            .unwrap_or(DEFAULT_POINT_COLOR);
        let point = [r.longitude, r.latitude];

        match series.iter_mut().find(|(name, _, _)| name == label) {
            Some((_, _, points)) => points.push(point),
            None => series.push((label.to_string(), color, vec![point])),
        }
    }

    Plot::new("volcano_map")
        .height(MAP_HEIGHT)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .legend(Legend::default())
        .include_x(mean_longitude - MAP_SPAN_DEGREES)
        .include_x(mean_longitude + MAP_SPAN_DEGREES)
        .include_y(mean_latitude - MAP_SPAN_DEGREES)
        .include_y(mean_latitude + MAP_SPAN_DEGREES)
        .show(ui, |plot_ui| {
            for (name, color, points) in series {
                plot_ui.points(
                    Points::new(points)
                        .name(&name)
                        .color(color)
                        .radius(3.5)
                        .shape(MarkerShape::Circle),
                );
            }

            plot_ui.points(
                Points::new(vec![[mean_longitude, mean_latitude]])
                    .name("Center")
                    .color(DEFAULT_POINT_COLOR)
                    .radius(6.0)
                    .shape(MarkerShape::Cross),
            );
        });
}
