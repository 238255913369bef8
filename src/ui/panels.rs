use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::{Attribute, Species};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – user inputs
// ---------------------------------------------------------------------------

/// Render the sidebar with every user-controlled input.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Attribute selector ----
            ui.strong("Attribute");
            egui::ComboBox::from_id_salt("attribute")
                .selected_text(state.selection.attribute.name())
                .show_ui(ui, |ui: &mut Ui| {
                    for attr in Attribute::ALL {
                        ui.selectable_value(&mut state.selection.attribute, attr, attr.name());
                    }
                });
            ui.add_space(8.0);

            // ---- Bin counts ----
            ui.strong("Attribute histogram bins");
            // Zero is a permitted input; the chart degrades to a placeholder.
            ui.add(egui::DragValue::new(&mut state.selection.attribute_bins).speed(1));
            ui.add_space(8.0);

            ui.strong("Bill length bins");
            ui.add(egui::Slider::new(&mut state.selection.bill_length_bins, 1..=100));
            ui.add_space(8.0);

            // ---- Species filter ----
            ui.strong("Species");
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_species();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_species();
                }
            });

            for species in Species::ALL {
                let count = state.dataset.species_count(species);
                let text = RichText::new(format!("{species}  ({count})"))
                    .color(state.colors.color_for(species));

                let mut checked = state.selection.species.contains(&species);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_species(species);
                }
            }

            ui.add_space(12.0);
            ui.separator();
            ui.hyperlink_to(
                "Palmer Penguins data",
                "https://github.com/allisonhorst/palmerpenguins",
            );
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar with dataset / view counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Rusty Penguin");
        ui.separator();
        ui.label(format!(
            "{} penguins loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));
    });
}
