use std::sync::Arc;

use crate::color::SpeciesColors;
use crate::data::filter::{SelectionState, filtered_indices};
use crate::data::model::{PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which chart tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTab {
    #[default]
    AttributeHistogram,
    BillLengthHistogram,
    Scatter,
}

impl ChartTab {
    pub const ALL: [ChartTab; 3] = [
        ChartTab::AttributeHistogram,
        ChartTab::BillLengthHistogram,
        ChartTab::Scatter,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartTab::AttributeHistogram => "Attribute Histogram",
            ChartTab::BillLengthHistogram => "Bill Length",
            ChartTab::Scatter => "Scatter",
        }
    }
}

/// Sortable columns of the data grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridColumn {
    Species,
    Island,
    BillLength,
    BillDepth,
    FlipperLength,
    BodyMass,
    Sex,
    Year,
}

/// Presentation state of the data grid. Sorting and paging rearrange the
/// rows on screen but never alter the filtered view itself.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    /// Sort column and ascending flag, if any.
    pub sort: Option<(GridColumn, bool)>,
    /// Zero-based page, clamped by the renderer when the view shrinks.
    pub page: usize,
}

impl GridState {
    /// Header click: new column sorts ascending, same column flips.
    pub fn toggle_sort(&mut self, column: GridColumn) {
        self.sort = match self.sort {
            Some((current, ascending)) if current == column => Some((column, !ascending)),
            _ => Some((column, true)),
        };
        self.page = 0;
    }
}

/// The full UI state of one session, independent of rendering.
pub struct AppState {
    /// The immutable dataset, shared by reference.
    pub dataset: Arc<PenguinDataset>,

    /// Current sidebar inputs.
    pub selection: SelectionState,

    /// Indices of records passing the species filter (cached).
    pub visible_indices: Vec<usize>,

    /// Fixed species colours used across swatches and charts.
    pub colors: SpeciesColors,

    /// Active chart tab.
    pub chart_tab: ChartTab,

    /// Data grid sort / pagination.
    pub grid: GridState,
}

impl AppState {
    pub fn new(dataset: Arc<PenguinDataset>) -> Self {
        let mut state = Self {
            dataset,
            selection: SelectionState::default(),
            visible_indices: Vec::new(),
            colors: SpeciesColors::default(),
            chart_tab: ChartTab::default(),
            grid: GridState::default(),
        };
        state.refilter();
        state
    }

    /// Recompute `visible_indices` after a species-set change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.selection);
    }

    /// Toggle one species in the filter.
    pub fn toggle_species(&mut self, species: Species) {
        if !self.selection.species.remove(&species) {
            self.selection.species.insert(species);
        }
        self.refilter();
    }

    /// Select all species.
    pub fn select_all_species(&mut self) {
        self.selection.species = Species::ALL.into_iter().collect();
        self.refilter();
    }

    /// Deselect all species. Yields an empty view, which is a valid state.
    pub fn select_no_species(&mut self) {
        self.selection.species.clear();
        self.refilter();
    }
}
