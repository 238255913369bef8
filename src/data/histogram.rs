use thiserror::Error;

use super::model::{Attribute, PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Render parameter errors
// ---------------------------------------------------------------------------

/// Degenerate chart parameters. Handled locally by the panel that hit
/// them; other displays keep rendering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("bin count must be at least 1")]
    InvalidBinCount,
    #[error("no values to bin")]
    EmptyView,
}

// ---------------------------------------------------------------------------
// Histogram artifacts
// ---------------------------------------------------------------------------

/// Equal-width bins over the observed value range, single series.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub bin_width: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    /// X coordinate of a bin's midpoint, for bar placement.
    pub fn center(&self, bin: usize) -> f64 {
        bin_center(self.min, self.bin_width, bin)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// One bin grid shared by all species, counts kept per species so the
/// chart can stack species-colored bars.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedHistogram {
    pub min: f64,
    pub bin_width: f64,
    /// Series in display order; species without samples are omitted.
    pub series: Vec<(Species, Vec<u64>)>,
}

impl GroupedHistogram {
    pub fn center(&self, bin: usize) -> f64 {
        bin_center(self.min, self.bin_width, bin)
    }
}

fn bin_center(min: f64, bin_width: f64, bin: usize) -> f64 {
    min + (bin as f64 + 0.5) * bin_width
}

// ---------------------------------------------------------------------------
// Binning
// ---------------------------------------------------------------------------

/// Collect `(species, value)` pairs of one attribute over the filtered
/// view, skipping records where the measurement is missing.
pub fn attribute_samples(
    dataset: &PenguinDataset,
    view: &[usize],
    attribute: Attribute,
) -> Vec<(Species, f64)> {
    view.iter()
        .filter_map(|&i| {
            let p = &dataset.penguins[i];
            p.value(attribute).map(|v| (p.species, v))
        })
        .collect()
}

/// Bin values into `bins` equal-width buckets spanning their range.
///
/// A zero value range (all values equal) degrades to a single occupied
/// bucket of nominal width 1 centered on the value.
pub fn histogram(values: &[f64], bins: u32) -> Result<Histogram, RenderError> {
    let (min, bin_width) = bin_grid(values.iter().copied(), bins)?;

    let mut counts = vec![0u64; bins as usize];
    for &v in values {
        counts[bin_index(v, min, bin_width, bins)] += 1;
    }

    Ok(Histogram {
        min,
        bin_width,
        counts,
    })
}

/// Bin `(species, value)` samples on a grid shared by all species.
pub fn grouped_by_species(
    samples: &[(Species, f64)],
    bins: u32,
) -> Result<GroupedHistogram, RenderError> {
    let (min, bin_width) = bin_grid(samples.iter().map(|&(_, v)| v), bins)?;

    let mut series = Vec::new();
    for species in Species::ALL {
        let mut counts = vec![0u64; bins as usize];
        let mut occupied = false;
        for &(s, v) in samples {
            if s == species {
                counts[bin_index(v, min, bin_width, bins)] += 1;
                occupied = true;
            }
        }
        if occupied {
            series.push((species, counts));
        }
    }

    Ok(GroupedHistogram {
        min,
        bin_width,
        series,
    })
}

/// Common validation: bin count and value range.
fn bin_grid(values: impl Iterator<Item = f64>, bins: u32) -> Result<(f64, f64), RenderError> {
    if bins == 0 {
        return Err(RenderError::InvalidBinCount);
    }

    let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
    let mut any = false;
    for v in values {
        min = min.min(v);
        max = max.max(v);
        any = true;
    }
    if !any {
        return Err(RenderError::EmptyView);
    }

    let range = max - min;
    if range > 0.0 {
        Ok((min, range / bins as f64))
    } else {
        Ok((min - 0.5, 1.0))
    }
}

fn bin_index(value: f64, min: f64, bin_width: f64, bins: u32) -> usize {
    // The maximum value lands exactly on the upper edge; clamp it into
    // the last bin.
    (((value - min) / bin_width) as usize).min(bins as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Penguin;

    #[test]
    fn zero_bins_is_an_invalid_parameter() {
        assert_eq!(histogram(&[1.0, 2.0], 0), Err(RenderError::InvalidBinCount));
        assert_eq!(
            grouped_by_species(&[(Species::Adelie, 1.0)], 0),
            Err(RenderError::InvalidBinCount)
        );
    }

    #[test]
    fn no_values_is_an_empty_view() {
        assert_eq!(histogram(&[], 10), Err(RenderError::EmptyView));
        assert_eq!(grouped_by_species(&[], 10), Err(RenderError::EmptyView));
    }

    #[test]
    fn one_bin_collects_every_value() {
        let h = histogram(&[35.0, 40.1, 59.6, 44.2], 1).unwrap();
        assert_eq!(h.counts, vec![4]);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn counts_sum_to_the_number_of_values() {
        let values: Vec<f64> = (0..97).map(|i| 30.0 + i as f64 * 0.3).collect();
        let h = histogram(&values, 12).unwrap();
        assert_eq!(h.counts.len(), 12);
        assert_eq!(h.total(), 97);
    }

    #[test]
    fn maximum_value_falls_into_the_last_bin() {
        let h = histogram(&[0.0, 10.0], 5).unwrap();
        assert_eq!(h.counts[0], 1);
        assert_eq!(h.counts[4], 1);
    }

    #[test]
    fn zero_range_degrades_to_one_occupied_bucket() {
        let h = histogram(&[42.0, 42.0, 42.0], 8).unwrap();
        assert_eq!(h.total(), 3);
        assert_eq!(h.counts[0], 3);
        assert!((h.center(0) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn species_share_the_bin_grid_but_keep_their_counts() {
        let samples = vec![
            (Species::Adelie, 0.0),
            (Species::Adelie, 1.0),
            (Species::Gentoo, 9.0),
            (Species::Gentoo, 10.0),
        ];
        let h = grouped_by_species(&samples, 2).unwrap();
        assert_eq!(h.series.len(), 2);
        let (sp_a, counts_a) = &h.series[0];
        let (sp_g, counts_g) = &h.series[1];
        assert_eq!(*sp_a, Species::Adelie);
        assert_eq!(counts_a, &vec![2, 0]);
        assert_eq!(*sp_g, Species::Gentoo);
        assert_eq!(counts_g, &vec![0, 2]);
    }

    #[test]
    fn absent_species_get_no_series() {
        let samples = vec![(Species::Chinstrap, 1.0), (Species::Chinstrap, 2.0)];
        let h = grouped_by_species(&samples, 4).unwrap();
        assert_eq!(h.series.len(), 1);
        assert_eq!(h.series[0].0, Species::Chinstrap);
    }

    #[test]
    fn missing_measurements_are_skipped_when_sampling() {
        let mut with_value = Penguin {
            species: Species::Adelie,
            island: "Torgersen".to_string(),
            bill_length_mm: Some(39.1),
            bill_depth_mm: Some(18.7),
            flipper_length_mm: Some(181.0),
            body_mass_g: Some(3750.0),
            sex: None,
            year: 2007,
        };
        let mut without_value = with_value.clone();
        without_value.bill_length_mm = None;
        with_value.species = Species::Gentoo;

        let ds = PenguinDataset::from_records(vec![with_value, without_value]);
        let view = vec![0, 1];
        let samples = attribute_samples(&ds, &view, Attribute::BillLengthMm);
        assert_eq!(samples, vec![(Species::Gentoo, 39.1)]);
    }
}
