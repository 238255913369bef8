use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Species – the closed categorical domain of the dataset
// ---------------------------------------------------------------------------

/// One of the three penguin species observed in the Palmer Archipelago.
/// Declared in the order the UI lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    pub fn name(self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Sex – optional per record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
        }
    }
}

// ---------------------------------------------------------------------------
// Attribute – the numeric columns a user can pick for the histogram
// ---------------------------------------------------------------------------

/// The four continuous morphological measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    BillLengthMm,
    BillDepthMm,
    FlipperLengthMm,
    BodyMassG,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::BillLengthMm,
        Attribute::BillDepthMm,
        Attribute::FlipperLengthMm,
        Attribute::BodyMassG,
    ];

    /// Column name as it appears in the dataset header.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::BillLengthMm => "bill_length_mm",
            Attribute::BillDepthMm => "bill_depth_mm",
            Attribute::FlipperLengthMm => "flipper_length_mm",
            Attribute::BodyMassG => "body_mass_g",
        }
    }

    /// Human-readable axis caption.
    pub fn axis_label(self) -> &'static str {
        match self {
            Attribute::BillLengthMm => "Bill Length (mm)",
            Attribute::BillDepthMm => "Bill Depth (mm)",
            Attribute::FlipperLengthMm => "Flipper Length (mm)",
            Attribute::BodyMassG => "Body Mass (g)",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single observed penguin. Measurements may be missing.
#[derive(Debug, Clone, Deserialize)]
pub struct Penguin {
    pub species: Species,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<Sex>,
    pub year: u16,
}

impl Penguin {
    /// Value of the given numeric attribute, if recorded.
    pub fn value(&self, attribute: Attribute) -> Option<f64> {
        match attribute {
            Attribute::BillLengthMm => self.bill_length_mm,
            Attribute::BillDepthMm => self.bill_depth_mm,
            Attribute::FlipperLengthMm => self.flipper_length_mm,
            Attribute::BodyMassG => self.body_mass_g,
        }
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, immutable after load.
#[derive(Debug, Clone)]
pub struct PenguinDataset {
    /// All records, in file order.
    pub penguins: Vec<Penguin>,
    /// Row count per species, computed once at construction.
    species_counts: BTreeMap<Species, usize>,
}

impl PenguinDataset {
    pub fn from_records(penguins: Vec<Penguin>) -> Self {
        let mut species_counts: BTreeMap<Species, usize> = BTreeMap::new();
        for p in &penguins {
            *species_counts.entry(p.species).or_default() += 1;
        }
        PenguinDataset {
            penguins,
            species_counts,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }

    /// Number of records of one species.
    pub fn species_count(&self, species: Species) -> usize {
        self.species_counts.get(&species).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penguin(species: Species, bill_length: f64) -> Penguin {
        Penguin {
            species,
            island: "Dream".to_string(),
            bill_length_mm: Some(bill_length),
            bill_depth_mm: Some(18.0),
            flipper_length_mm: Some(190.0),
            body_mass_g: Some(3700.0),
            sex: Some(Sex::Female),
            year: 2008,
        }
    }

    #[test]
    fn species_counts_are_indexed_at_construction() {
        let ds = PenguinDataset::from_records(vec![
            penguin(Species::Adelie, 39.1),
            penguin(Species::Adelie, 38.2),
            penguin(Species::Gentoo, 47.0),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.species_count(Species::Adelie), 2);
        assert_eq!(ds.species_count(Species::Gentoo), 1);
        assert_eq!(ds.species_count(Species::Chinstrap), 0);
    }

    #[test]
    fn attribute_accessor_matches_fields() {
        let mut p = penguin(Species::Chinstrap, 49.5);
        p.body_mass_g = None;
        assert_eq!(p.value(Attribute::BillLengthMm), Some(49.5));
        assert_eq!(p.value(Attribute::FlipperLengthMm), Some(190.0));
        assert_eq!(p.value(Attribute::BodyMassG), None);
    }
}
