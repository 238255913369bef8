//! Regenerates `data/penguins.csv`, the dataset packaged into the main
//! binary. Fully deterministic: the same seed always produces the same
//! file.

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Deterministic RNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

// ---------------------------------------------------------------------------
// Species morphology parameters
// ---------------------------------------------------------------------------

struct SpeciesSpec {
    name: &'static str,
    islands: &'static [&'static str],
    rows: usize,
    /// (mean, standard deviation) per measurement.
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    flipper_length: (f64, f64),
    body_mass: (f64, f64),
}

const SPECIES: [SpeciesSpec; 3] = [
    SpeciesSpec {
        name: "Adelie",
        islands: &["Torgersen", "Biscoe", "Dream"],
        rows: 152,
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper_length: (190.0, 6.5),
        body_mass: (3700.0, 460.0),
    },
    SpeciesSpec {
        name: "Gentoo",
        islands: &["Biscoe"],
        rows: 124,
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        flipper_length: (217.0, 6.5),
        body_mass: (5076.0, 504.0),
    },
    SpeciesSpec {
        name: "Chinstrap",
        islands: &["Dream"],
        rows: 68,
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        flipper_length: (195.8, 7.1),
        body_mass: (3733.0, 384.0),
    },
];

const YEARS: [u16; 3] = [2007, 2008, 2009];

/// Fraction of rows with every measurement missing.
const MISSING_MEASUREMENTS_RATE: f64 = 0.006;
/// Fraction of rows with an unrecorded sex.
const MISSING_SEX_RATE: f64 = 0.03;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut writer =
        csv::Writer::from_path("data/penguins.csv").context("creating data/penguins.csv")?;
    writer.write_record([
        "species",
        "island",
        "bill_length_mm",
        "bill_depth_mm",
        "flipper_length_mm",
        "body_mass_g",
        "sex",
        "year",
    ])?;

    let mut total = 0usize;
    for spec in &SPECIES {
        for _ in 0..spec.rows {
            let island = spec.islands[(rng.next_u64() % spec.islands.len() as u64) as usize];
            let year = YEARS[(rng.next_u64() % YEARS.len() as u64) as usize];
            let missing_measurements = rng.next_f64() < MISSING_MEASUREMENTS_RATE;

            let bill_length = rng.gauss(spec.bill_length.0, spec.bill_length.1);
            let bill_depth = rng.gauss(spec.bill_depth.0, spec.bill_depth.1);
            let flipper_length = rng.gauss(spec.flipper_length.0, spec.flipper_length.1);
            let body_mass = rng.gauss(spec.body_mass.0, spec.body_mass.1);

            let sex = if rng.next_f64() < MISSING_SEX_RATE {
                ""
            } else if rng.next_u64() & 1 == 0 {
                "male"
            } else {
                "female"
            };

            let (bl, bd, fl, bm) = if missing_measurements {
                (String::new(), String::new(), String::new(), String::new())
            } else {
                (
                    format!("{bill_length:.1}"),
                    format!("{bill_depth:.1}"),
                    (flipper_length.round() as i64).to_string(),
                    // Body mass was recorded to the nearest 25 g.
                    ((body_mass / 25.0).round() as i64 * 25).to_string(),
                )
            };

            let year = year.to_string();
            writer.write_record([
                spec.name,
                island,
                bl.as_str(),
                bd.as_str(),
                fl.as_str(),
                bm.as_str(),
                sex,
                year.as_str(),
            ])?;
            total += 1;
        }
    }

    writer.flush().context("writing data/penguins.csv")?;
    println!("Wrote {total} rows to data/penguins.csv");
    Ok(())
}
