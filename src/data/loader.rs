use std::io::Read;

use anyhow::{Context, Result, bail};

use super::model::{Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// Packaged dataset
// ---------------------------------------------------------------------------

/// The dataset shipped inside the binary. Regenerated with the
/// `generate_sample` binary.
const PENGUINS_CSV: &str = include_str!("../../data/penguins.csv");

/// Parse the packaged dataset.
///
/// Called exactly once at startup. There is no retry policy: a malformed
/// resource is a build defect and aborts the launch.
pub fn load_embedded() -> Result<PenguinDataset> {
    let dataset =
        parse_csv(PENGUINS_CSV.as_bytes()).context("parsing packaged penguins.csv")?;
    if dataset.is_empty() {
        bail!("packaged penguins.csv contains no records");
    }
    Ok(dataset)
}

/// Expected CSV layout: header row
/// `species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year`,
/// empty cells for missing values.
fn parse_csv<R: Read>(input: R) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let mut penguins = Vec::new();
    for (row_no, result) in reader.deserialize::<Penguin>().enumerate() {
        let penguin: Penguin = result.with_context(|| format!("CSV row {row_no}"))?;
        penguins.push(penguin);
    }

    Ok(PenguinDataset::from_records(penguins))
}
