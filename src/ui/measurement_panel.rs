use egui_plot::{Bar, BarChart, Plot, PlotBounds};

use crate::processing::chart_data::ChartData;
use crate::processing::statistics::Summary;
use crate::state::theme::Theme;
use crate::state::viewer::{LoadedMeasurement, Viewer, ViewerPhase};

/// Render the detail pane for the current selection.
pub fn show_measurement_panel(ui: &mut egui::Ui, viewer: &Viewer, theme: &Theme) {
    let Some(name) = viewer.selection() else {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);
            ui.heading(
                egui::RichText::new("Select a measurement to see its details")
                    .color(theme.muted_text()),
            );
        });
        return;
    };

    ui.heading(format!("Measurement: {name}"));
    ui.add_space(6.0);

    match viewer.phase() {
        ViewerPhase::Idle => {}
        ViewerPhase::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading…");
            });
        }
        ViewerPhase::Failed(message) => {
            ui.label(egui::RichText::new(message).color(theme.muted_text()));
        }
        ViewerPhase::Ready(measurement) => show_loaded(ui, measurement, theme),
    }
}

fn show_loaded(ui: &mut egui::Ui, measurement: &LoadedMeasurement, theme: &Theme) {
    if let Some(ts) = measurement.captured_at_display() {
        ui.label(egui::RichText::new(format!("Captured at {ts}")).weak());
    }

    ui.label(egui::RichText::new(measurement.values_line()).monospace());
    ui.add_space(8.0);

    if let Some(summary) = &measurement.summary {
        show_summary(ui, summary);
        ui.add_space(8.0);
    }

    if measurement.chart.is_empty() {
        ui.label(egui::RichText::new("This measurement has no values.").color(theme.muted_text()));
    } else {
        show_chart(ui, &measurement.chart, theme);
    }
}

fn show_summary(ui: &mut egui::Ui, summary: &Summary) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            egui::Grid::new("summary_grid")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    for (label, value) in summary.rows() {
                        ui.label(egui::RichText::new(label).strong());
                        ui.label(value);
                        ui.end_row();
                    }
                });
        });
}

/// Bar chart, one bar per value, labelled by value, fixed y range.
fn show_chart(ui: &mut egui::Ui, chart: &ChartData, theme: &Theme) {
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|b| {
            Bar::new(b.index as f64, b.value)
                .width(0.8)
                .name(&b.label)
                .fill(theme.bar_fill())
                .stroke(egui::Stroke::new(1.0, theme.bar_stroke()))
        })
        .collect();

    let labels = chart.clone();
    let (x_min, x_max) = chart.x_bounds();
    let (y_min, y_max) = (chart.y_min, chart.y_max);

    Plot::new("measurement_chart")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .x_axis_formatter(move |mark, _range| {
            labels.label_at(mark.value).unwrap_or_default().to_string()
        })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
            plot_ui.bar_chart(BarChart::new(bars).name("Value"));
        });
}
