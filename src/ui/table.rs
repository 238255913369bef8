use std::cmp::Ordering;
use std::ops::Range;

use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder, TableRow};

use crate::data::model::{Penguin, PenguinDataset, Sex};
use crate::state::{AppState, GridColumn, GridState};

/// Page size of the data grid.
pub const ROWS_PER_PAGE: usize = 25;

const COLUMNS: [(&str, GridColumn); 8] = [
    ("species", GridColumn::Species),
    ("island", GridColumn::Island),
    ("bill_length_mm", GridColumn::BillLength),
    ("bill_depth_mm", GridColumn::BillDepth),
    ("flipper_length_mm", GridColumn::FlipperLength),
    ("body_mass_g", GridColumn::BodyMass),
    ("sex", GridColumn::Sex),
    ("year", GridColumn::Year),
];

// ---------------------------------------------------------------------------
// Tabular views (central panel)
// ---------------------------------------------------------------------------

/// Render the two collapsible tabular views of the filtered data.
pub fn table_section(ui: &mut Ui, state: &mut AppState) {
    let dataset = state.dataset.clone();

    egui::CollapsingHeader::new(RichText::new("Data Table").strong())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            data_table(ui, &dataset, &state.visible_indices);
        });

    egui::CollapsingHeader::new(RichText::new("Data Grid").strong())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            data_grid(ui, &dataset, &state.visible_indices, &mut state.grid);
        });
}

// ---------------------------------------------------------------------------
// Dense table – every visible row in a fixed-height scroll region
// ---------------------------------------------------------------------------

fn data_table(ui: &mut Ui, dataset: &PenguinDataset, view: &[usize]) {
    if view.is_empty() {
        ui.label("No penguins selected.");
        return;
    }

    ui.push_id("data_table", |ui: &mut Ui| {
        let mut builder = TableBuilder::new(ui).striped(true);
        for _ in COLUMNS {
            builder = builder.column(Column::auto());
        }

        builder
            .max_scroll_height(320.0)
            .header(20.0, |mut header| {
                for (name, _) in COLUMNS {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, view.len(), |mut row| {
                    let penguin = &dataset.penguins[view[row.index()]];
                    penguin_row(&mut row, penguin);
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Data grid – sortable headers, fixed-size pages
// ---------------------------------------------------------------------------

fn data_grid(ui: &mut Ui, dataset: &PenguinDataset, view: &[usize], grid: &mut GridState) {
    if view.is_empty() {
        ui.label("No penguins selected.");
        return;
    }

    let sorted = sorted_view(dataset, view, grid.sort);
    let pages = page_count(sorted.len());
    grid.page = grid.page.min(pages - 1);
    let rows = &sorted[page_range(sorted.len(), grid.page)];

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("<").clicked() && grid.page > 0 {
            grid.page -= 1;
        }
        ui.label(format!("Page {} / {pages}", grid.page + 1));
        if ui.small_button(">").clicked() && grid.page + 1 < pages {
            grid.page += 1;
        }
        ui.weak(format!("{} rows", sorted.len()));
    });

    ui.push_id("data_grid", |ui: &mut Ui| {
        let mut builder = TableBuilder::new(ui).striped(true);
        for _ in COLUMNS {
            builder = builder.column(Column::auto());
        }

        builder
            .header(20.0, |mut header| {
                for (name, column) in COLUMNS {
                    header.col(|ui: &mut Ui| {
                        let marker = match grid.sort {
                            Some((current, true)) if current == column => " ⬆",
                            Some((current, false)) if current == column => " ⬇",
                            _ => "",
                        };
                        let active = matches!(grid.sort, Some((current, _)) if current == column);
                        let label = RichText::new(format!("{name}{marker}")).strong();
                        if ui.selectable_label(active, label).clicked() {
                            grid.toggle_sort(column);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let penguin = &dataset.penguins[rows[row.index()]];
                    penguin_row(&mut row, penguin);
                });
            });
    });
}

fn penguin_row(row: &mut TableRow<'_, '_>, p: &Penguin) {
    row.col(|ui: &mut Ui| {
        ui.label(p.species.name());
    });
    row.col(|ui: &mut Ui| {
        ui.label(&p.island);
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_measurement(p.bill_length_mm));
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_measurement(p.bill_depth_mm));
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_measurement(p.flipper_length_mm));
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_measurement(p.body_mass_g));
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_sex(p.sex));
    });
    row.col(|ui: &mut Ui| {
        ui.label(p.year.to_string());
    });
}

fn fmt_measurement(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.1}")).unwrap_or_default()
}

fn fmt_sex(sex: Option<Sex>) -> String {
    sex.map(|s| s.to_string()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Sorting & paging (pure, so they are testable)
// ---------------------------------------------------------------------------

/// Reorder the view for display. Missing values sort last (ascending);
/// ties keep dataset order. The view itself is never mutated.
pub fn sorted_view(
    dataset: &PenguinDataset,
    view: &[usize],
    sort: Option<(GridColumn, bool)>,
) -> Vec<usize> {
    let mut rows = view.to_vec();
    let Some((column, ascending)) = sort else {
        return rows;
    };
    rows.sort_by(|&a, &b| {
        let ord = compare_by(column, &dataset.penguins[a], &dataset.penguins[b]);
        if ascending { ord } else { ord.reverse() }
    });
    rows
}

fn compare_by(column: GridColumn, a: &Penguin, b: &Penguin) -> Ordering {
    match column {
        GridColumn::Species => a.species.name().cmp(b.species.name()),
        GridColumn::Island => a.island.cmp(&b.island),
        GridColumn::BillLength => cmp_measurement(a.bill_length_mm, b.bill_length_mm),
        GridColumn::BillDepth => cmp_measurement(a.bill_depth_mm, b.bill_depth_mm),
        GridColumn::FlipperLength => cmp_measurement(a.flipper_length_mm, b.flipper_length_mm),
        GridColumn::BodyMass => cmp_measurement(a.body_mass_g, b.body_mass_g),
        GridColumn::Sex => cmp_option(a.sex, b.sex),
        GridColumn::Year => a.year.cmp(&b.year),
    }
}

fn cmp_measurement(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_option<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub(crate) fn page_count(rows: usize) -> usize {
    rows.div_ceil(ROWS_PER_PAGE).max(1)
}

pub(crate) fn page_range(rows: usize, page: usize) -> Range<usize> {
    let start = page * ROWS_PER_PAGE;
    start..(start + ROWS_PER_PAGE).min(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Species;

    fn penguin(mass: Option<f64>, island: &str) -> Penguin {
        Penguin {
            species: Species::Adelie,
            island: island.to_string(),
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(18.0),
            flipper_length_mm: Some(190.0),
            body_mass_g: mass,
            sex: None,
            year: 2007,
        }
    }

    fn dataset() -> PenguinDataset {
        PenguinDataset::from_records(vec![
            penguin(Some(4200.0), "Dream"),
            penguin(None, "Biscoe"),
            penguin(Some(3500.0), "Torgersen"),
        ])
    }

    #[test]
    fn unsorted_view_keeps_dataset_order() {
        let ds = dataset();
        assert_eq!(sorted_view(&ds, &[0, 1, 2], None), vec![0, 1, 2]);
    }

    #[test]
    fn ascending_sort_puts_missing_values_last() {
        let ds = dataset();
        let rows = sorted_view(&ds, &[0, 1, 2], Some((GridColumn::BodyMass, true)));
        assert_eq!(rows, vec![2, 0, 1]);
    }

    #[test]
    fn descending_sort_reverses_the_order() {
        let ds = dataset();
        let rows = sorted_view(&ds, &[0, 1, 2], Some((GridColumn::BodyMass, false)));
        assert_eq!(rows, vec![1, 0, 2]);
    }

    #[test]
    fn string_columns_sort_lexicographically() {
        let ds = dataset();
        let rows = sorted_view(&ds, &[0, 1, 2], Some((GridColumn::Island, true)));
        assert_eq!(rows, vec![1, 0, 2]);
    }

    #[test]
    fn sorting_never_drops_or_duplicates_rows() {
        let ds = dataset();
        let mut rows = sorted_view(&ds, &[0, 1, 2], Some((GridColumn::Species, true)));
        rows.sort_unstable();
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn page_ranges_cover_the_rows_exactly() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(ROWS_PER_PAGE), 1);
        assert_eq!(page_count(ROWS_PER_PAGE + 1), 2);

        assert_eq!(page_range(60, 0), 0..25);
        assert_eq!(page_range(60, 1), 25..50);
        assert_eq!(page_range(60, 2), 50..60);
    }
}
