use std::io::Read;
use std::path::{Path, PathBuf};

use arrow::array::{Array, AsArray};
use arrow::compute::{CastOptions, cast, cast_with_options};
use arrow::datatypes::{DataType, Float64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dataset, RawRow};
use crate::config::ColumnMapping;

/// Cell contents treated as missing, matching the pandas `read_csv` defaults.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected JSON layout: {0}")]
    Shape(String),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the player dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row; extra columns are ignored
/// * `.parquet` – any column types castable to string / float64
/// * `.json`    – `[{ "Player Name": "...", "Salary": 1.0, "3P%": 0.4 }, ...]`
pub fn load_file(path: &Path, columns: &ColumnMapping) -> Result<Dataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv_from_reader(open(path)?, columns)?,
        "parquet" | "pq" => load_parquet(path, columns)?,
        "json" => {
            let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            load_json_from_str(&text, columns)?
        }
        other => return Err(DataLoadError::UnsupportedFormat(other.to_string())),
    };

    log::info!(
        "Loaded {} players from {} ({} incomplete rows dropped)",
        dataset.len(),
        path.display(),
        dataset.dropped()
    );
    let dups = dataset.duplicate_names();
    if !dups.is_empty() {
        log::warn!(
            "{} player names appear more than once; lookups use the first row: {:?}",
            dups.len(),
            dups
        );
    }
    Ok(dataset)
}

fn open(path: &Path) -> Result<std::fs::File, DataLoadError> {
    std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Cell helpers
// ---------------------------------------------------------------------------

fn is_na(cell: &str) -> bool {
    NA_TOKENS.contains(&cell)
}

fn text_cell(cell: &str) -> Option<String> {
    (!is_na(cell)).then(|| cell.to_string())
}

fn numeric_cell(cell: &str, row: usize, column: &str) -> Result<Option<f64>, DataLoadError> {
    let trimmed = cell.trim();
    if is_na(trimmed) {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| DataLoadError::InvalidValue {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read CSV from any reader. Rows are numbered from 1, excluding the header.
pub fn load_csv_from_reader<R: Read>(
    rdr: R,
    columns: &ColumnMapping,
) -> Result<Dataset, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let headers = reader.headers()?.clone();

    let index_of = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
    };
    let player_idx = index_of(&columns.player)?;
    let salary_idx = index_of(&columns.salary)?;
    let pct_idx = index_of(&columns.three_point_percentage)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        rows.push(RawRow {
            player: text_cell(cell(player_idx)),
            salary: numeric_cell(cell(salary_idx), row, &columns.salary)?,
            three_point_percentage: numeric_cell(
                cell(pct_idx),
                row,
                &columns.three_point_percentage,
            )?,
        });
    }

    Ok(Dataset::from_rows(rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
/// A key absent from a record counts as a missing cell; a key absent from
/// every record is a missing column. An empty array carries no column names,
/// so it loads as an empty dataset.
pub fn load_json_from_str(text: &str, columns: &ColumnMapping) -> Result<Dataset, DataLoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let records = root
        .as_array()
        .ok_or_else(|| DataLoadError::Shape("expected a top-level array".to_string()))?;

    for name in [
        &columns.player,
        &columns.salary,
        &columns.three_point_percentage,
    ] {
        let present = records
            .iter()
            .any(|r| r.as_object().is_some_and(|o| o.contains_key(name)));
        if !present && !records.is_empty() {
            return Err(DataLoadError::MissingColumn(name.clone()));
        }
    }

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let row = i + 1;
        let obj = rec
            .as_object()
            .ok_or_else(|| DataLoadError::Shape(format!("row {row} is not an object")))?;

        let player = match obj.get(&columns.player) {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(s)) => text_cell(s),
            Some(other) => Some(other.to_string()),
        };

        rows.push(RawRow {
            player,
            salary: json_numeric(obj.get(&columns.salary), row, &columns.salary)?,
            three_point_percentage: json_numeric(
                obj.get(&columns.three_point_percentage),
                row,
                &columns.three_point_percentage,
            )?,
        });
    }

    Ok(Dataset::from_rows(rows))
}

fn json_numeric(
    val: Option<&JsonValue>,
    row: usize,
    column: &str,
) -> Result<Option<f64>, DataLoadError> {
    match val {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => Ok(n.as_f64()),
        Some(JsonValue::String(s)) => numeric_cell(s, row, column),
        Some(other) => Err(DataLoadError::InvalidValue {
            row,
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by pandas (`df.to_parquet()`) or polars.
///
/// The player column is cast to Utf8, the numeric columns to Float64.
/// Arrow nulls and float NaNs count as missing.
fn load_parquet(path: &Path, columns: &ColumnMapping) -> Result<Dataset, DataLoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;

    // Resolved from the file schema so a file without row groups is checked too.
    let schema = builder.schema().clone();
    let index_of = |name: &str| {
        schema
            .index_of(name)
            .map_err(|_| DataLoadError::MissingColumn(name.to_string()))
    };
    let player_idx = index_of(&columns.player)?;
    let salary_idx = index_of(&columns.salary)?;
    let pct_idx = index_of(&columns.three_point_percentage)?;

    let reader = builder.build()?;
    let strict = CastOptions {
        safe: false,
        ..Default::default()
    };

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;

        let players = cast(batch.column(player_idx), &DataType::Utf8)?;
        let salaries = cast_with_options(batch.column(salary_idx), &DataType::Float64, &strict)?;
        let pcts = cast_with_options(batch.column(pct_idx), &DataType::Float64, &strict)?;

        let players = players.as_string::<i32>();
        let salaries = salaries.as_primitive::<Float64Type>();
        let pcts = pcts.as_primitive::<Float64Type>();

        for row in 0..batch.num_rows() {
            rows.push(RawRow {
                player: (!players.is_null(row)).then(|| players.value(row).to_string()),
                salary: (!salaries.is_null(row)).then(|| salaries.value(row)),
                three_point_percentage: (!pcts.is_null(row)).then(|| pcts.value(row)),
            });
        }
    }

    Ok(Dataset::from_rows(rows))
}
