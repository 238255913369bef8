use std::collections::BTreeSet;

use super::model::{Attribute, PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Selection state: the current values of all user-controlled inputs
// ---------------------------------------------------------------------------

/// Everything the user can change from the sidebar. Owned by one session,
/// mutated only by that session's input events.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    /// Attribute shown in the attribute histogram.
    pub attribute: Attribute,
    /// Bin count for the attribute histogram. Zero is accepted as input;
    /// the renderer degrades to a placeholder.
    pub attribute_bins: u32,
    /// Bin count for the fixed bill-length histogram (slider, 1–100).
    pub bill_length_bins: u32,
    /// Species whose records are visible.
    pub species: BTreeSet<Species>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            attribute: Attribute::BillLengthMm,
            attribute_bins: 10,
            bill_length_bins: 10,
            species: Species::ALL.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtered view derivation
// ---------------------------------------------------------------------------

/// Return indices of records whose species is in the current selection,
/// in dataset order.
///
/// An empty species set yields an empty view; that is a valid state, not
/// an error. The result is recomputed wholesale on every call.
pub fn filtered_indices(dataset: &PenguinDataset, selection: &SelectionState) -> Vec<usize> {
    dataset
        .penguins
        .iter()
        .enumerate()
        .filter(|(_, p)| selection.species.contains(&p.species))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Penguin;

    fn penguin(species: Species) -> Penguin {
        Penguin {
            species,
            island: "Biscoe".to_string(),
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(17.0),
            flipper_length_mm: Some(195.0),
            body_mass_g: Some(4000.0),
            sex: None,
            year: 2007,
        }
    }

    fn dataset() -> PenguinDataset {
        PenguinDataset::from_records(vec![
            penguin(Species::Adelie),
            penguin(Species::Gentoo),
            penguin(Species::Chinstrap),
            penguin(Species::Adelie),
            penguin(Species::Chinstrap),
        ])
    }

    fn selection_of(species: &[Species]) -> SelectionState {
        SelectionState {
            species: species.iter().copied().collect(),
            ..SelectionState::default()
        }
    }

    #[test]
    fn every_result_row_matches_the_selection() {
        let ds = dataset();
        let sel = selection_of(&[Species::Chinstrap]);
        let view = filtered_indices(&ds, &sel);
        assert!(!view.is_empty());
        for &i in &view {
            assert_eq!(ds.penguins[i].species, Species::Chinstrap);
        }
    }

    #[test]
    fn result_is_a_subset_in_dataset_order() {
        let ds = dataset();
        let sel = selection_of(&[Species::Adelie, Species::Chinstrap]);
        let view = filtered_indices(&ds, &sel);
        assert!(view.iter().all(|&i| i < ds.len()));
        assert!(view.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn identical_inputs_yield_identical_views() {
        let ds = dataset();
        let sel = selection_of(&[Species::Gentoo, Species::Adelie]);
        assert_eq!(filtered_indices(&ds, &sel), filtered_indices(&ds, &sel));
    }

    #[test]
    fn empty_species_set_yields_empty_view() {
        let ds = dataset();
        let sel = selection_of(&[]);
        assert_eq!(filtered_indices(&ds, &sel), Vec::<usize>::new());
    }

    #[test]
    fn full_species_set_yields_the_whole_dataset() {
        let ds = dataset();
        let sel = SelectionState::default();
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn deselecting_one_species_drops_exactly_its_rows() {
        let ds = dataset();
        let mut sel = SelectionState::default();
        let before = filtered_indices(&ds, &sel).len();
        sel.species.remove(&Species::Chinstrap);
        let after = filtered_indices(&ds, &sel).len();
        assert_eq!(before - after, ds.species_count(Species::Chinstrap));
    }

    #[test]
    fn bin_counts_and_attribute_do_not_affect_the_view() {
        let ds = dataset();
        let mut sel = SelectionState::default();
        let before = filtered_indices(&ds, &sel);
        sel.attribute = Attribute::BodyMassG;
        sel.attribute_bins = 0;
        sel.bill_length_bins = 1;
        assert_eq!(filtered_indices(&ds, &sel), before);
    }
}
