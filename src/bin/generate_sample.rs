//! Writes a deterministic synthetic player dataset as CSV and Parquet.
//!
//! Usage: `generate_sample [out_dir]` (defaults to `data/`).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const FIRST_NAMES: [&str; 12] = [
    "Marcus", "Tyrese", "Andre", "Devin", "Jalen", "Kris", "Luka", "Miles", "Nate", "Oscar",
    "Reggie", "Terrence",
];
const LAST_NAMES: [&str; 10] = [
    "Holloway", "Bennett", "Carver", "Dawson", "Ellison", "Fairbanks", "Granger", "Hayes",
    "Irving", "Jennings",
];

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

struct SampleRow {
    name: String,
    salary: Option<i64>,
    three_point_pct: Option<f64>,
}

fn generate_rows(rng: &mut SimpleRng) -> Vec<SampleRow> {
    let mut rows = Vec::new();
    for first in FIRST_NAMES {
        for last in LAST_NAMES {
            // Log-normal-ish salaries between the minimum and a max contract.
            let salary = (1.1e6 * rng.gauss(1.6, 0.9).exp()).clamp(1.1e6, 48.0e6);
            // Accuracy rises gently with salary, then flattens.
            let millions = salary / 1.0e6;
            let mean = 0.30 + 0.004 * millions - 0.00006 * millions * millions;
            let pct = rng.gauss(mean, 0.045).clamp(0.0, 1.0);

            // Roughly 1 in 15 rows has a missing cell.
            let missing = rng.next_f64();
            rows.push(SampleRow {
                name: format!("{first} {last}"),
                salary: (missing >= 0.03).then_some(salary.round() as i64),
                three_point_pct: (missing < 0.03 || missing >= 0.066)
                    .then_some((pct * 1000.0).round() / 1000.0),
            });
        }
    }
    rows
}

fn write_csv(path: &Path, rows: &[SampleRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer.write_record(["Player Name", "Salary", "3P%"])?;
    for row in rows {
        writer.write_record([
            row.name.clone(),
            row.salary.map(|s| s.to_string()).unwrap_or_default(),
            row.three_point_pct.map(|p| p.to_string()).unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[SampleRow]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Player Name", DataType::Utf8, false),
        Field::new("Salary", DataType::Int64, true),
        Field::new("3P%", DataType::Float64, true),
    ]));

    let names = StringArray::from(rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>());
    let salaries = Int64Array::from(rows.iter().map(|r| r.salary).collect::<Vec<_>>());
    let pcts = Float64Array::from(rows.iter().map(|r| r.three_point_pct).collect::<Vec<_>>());

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![Arc::new(names), Arc::new(salaries), Arc::new(pcts)],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng);

    let csv_path = out_dir.join("sample_players.csv");
    let parquet_path = out_dir.join("sample_players.parquet");
    write_csv(&csv_path, &rows)?;
    write_parquet(&parquet_path, &rows)?;

    println!(
        "Wrote {} players to {} and {}",
        rows.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
