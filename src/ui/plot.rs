use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::data::histogram;
use crate::data::model::{Attribute, PenguinDataset, Species};
use crate::state::{AppState, ChartTab};

const CHART_HEIGHT: f32 = 380.0;

// ---------------------------------------------------------------------------
// Chart tabs (central panel, below the tables)
// ---------------------------------------------------------------------------

/// Render the tab strip and the active chart.
pub fn chart_section(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in ChartTab::ALL {
            ui.selectable_value(&mut state.chart_tab, tab, tab.title());
        }
    });
    ui.separator();

    match state.chart_tab {
        ChartTab::AttributeHistogram => attribute_histogram(ui, state),
        ChartTab::BillLengthHistogram => bill_length_histogram(ui, state),
        ChartTab::Scatter => scatter_plot(ui, state),
    }
}

// ---------------------------------------------------------------------------
// Attribute histogram – selected attribute, stacked per species
// ---------------------------------------------------------------------------

fn attribute_histogram(ui: &mut Ui, state: &AppState) {
    let samples = histogram::attribute_samples(
        &state.dataset,
        &state.visible_indices,
        state.selection.attribute,
    );
    let hist = match histogram::grouped_by_species(&samples, state.selection.attribute_bins) {
        Ok(hist) => hist,
        Err(err) => {
            placeholder(ui, &err.to_string());
            return;
        }
    };

    let mut charts: Vec<BarChart> = Vec::new();
    for (species, counts) in &hist.series {
        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(bin, &count)| {
                Bar::new(hist.center(bin), count as f64).width(hist.bin_width)
            })
            .collect();

        let mut chart = BarChart::new(bars)
            .name(species.name())
            .color(state.colors.color_for(*species));
        let below: Vec<&BarChart> = charts.iter().collect();
        chart = chart.stack_on(&below);
        charts.push(chart);
    }

    Plot::new("attribute_histogram")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Attribute value")
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Bill-length histogram – fixed attribute, single series
// ---------------------------------------------------------------------------

fn bill_length_histogram(ui: &mut Ui, state: &AppState) {
    // Deliberately independent of the attribute selector: this panel
    // always shows bill length.
    let samples = histogram::attribute_samples(
        &state.dataset,
        &state.visible_indices,
        Attribute::BillLengthMm,
    );
    let values: Vec<f64> = samples.iter().map(|&(_, v)| v).collect();

    let hist = match histogram::histogram(&values, state.selection.bill_length_bins) {
        Ok(hist) => hist,
        Err(err) => {
            placeholder(ui, &err.to_string());
            return;
        }
    };

    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(bin, &count)| Bar::new(hist.center(bin), count as f64).width(hist.bin_width))
        .collect();

    ui.weak(format!("{} measurements binned", hist.total()));
    Plot::new("bill_length_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label(Attribute::BillLengthMm.axis_label())
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name(Attribute::BillLengthMm.name())
                    .color(Color32::LIGHT_BLUE),
            );
        });
}

// ---------------------------------------------------------------------------
// Scatter – flipper length vs body mass
// ---------------------------------------------------------------------------

fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let series = species_scatter(&state.dataset, &state.visible_indices);
    if series.is_empty() {
        placeholder(ui, "no penguins selected");
        return;
    }

    Plot::new("scatter_plot")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(Attribute::FlipperLengthMm.axis_label())
        .y_axis_label(Attribute::BodyMassG.axis_label())
        .show(ui, |plot_ui| {
            for (species, points) in series {
                plot_ui.points(
                    Points::new(points)
                        .name(species.name())
                        .color(state.colors.color_for(species))
                        .radius(2.5),
                );
            }
        });
}

/// Point sets per species over the filtered view; records missing either
/// coordinate are skipped.
fn species_scatter(dataset: &PenguinDataset, view: &[usize]) -> Vec<(Species, Vec<[f64; 2]>)> {
    let mut series = Vec::new();
    for species in Species::ALL {
        let points: Vec<[f64; 2]> = view
            .iter()
            .filter_map(|&i| {
                let p = &dataset.penguins[i];
                if p.species != species {
                    return None;
                }
                Some([p.flipper_length_mm?, p.body_mass_g?])
            })
            .collect();
        if !points.is_empty() {
            series.push((species, points));
        }
    }
    series
}

// ---------------------------------------------------------------------------
// Placeholder for degenerate parameters / empty views
// ---------------------------------------------------------------------------

fn placeholder(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new(message).weak());
    });
}
