use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::{Map as JsonMap, Value as JsonValue};
use thiserror::Error;

use super::model::{LaunchRecord, LaunchTable, Outcome};

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const CATEGORY_COLUMN: &str = "Booster Version Category";

/// Columns every dataset must carry. Anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, CATEGORY_COLUMN];

/// Schema problems found while reading a launch dataset.
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("'class' must be 0 or 1, got {0}")]
    InvalidClass(i64),
    #[error("'Payload Mass (kg)' must be a non-negative number, got {0}")]
    InvalidPayload(f64),
    #[error("null value in column '{0}'")]
    NullValue(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch table from a file.  Dispatch by extension.
///
/// Row numbers in error context are 1-based data rows for every format.
///
/// Supported formats:
/// * `.csv`     – header row with at least the [`REQUIRED_COLUMNS`]
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat scalar columns with the same names
pub fn load_file(path: &Path) -> Result<LaunchTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            read_csv(file)?
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            read_json(&text)?
        }
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    };

    log::info!(
        "Loaded {} launches from {} sites ({})",
        table.len(),
        table.sites().len(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Row validation shared by the text formats
// ---------------------------------------------------------------------------

/// One text-format row. Empty CSV cells and JSON `null`s arrive as `None`.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    site: Option<String>,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: Option<f64>,
    #[serde(rename = "class")]
    class: Option<i64>,
    #[serde(rename = "Booster Version Category")]
    booster_category: Option<String>,
}

impl RawRow {
    fn into_record(self) -> Result<LaunchRecord, LoadError> {
        build_record(
            self.site.ok_or(LoadError::NullValue(SITE_COLUMN))?,
            self.payload_mass_kg
                .ok_or(LoadError::NullValue(PAYLOAD_COLUMN))?,
            self.class.ok_or(LoadError::NullValue(CLASS_COLUMN))?,
            self.booster_category
                .ok_or(LoadError::NullValue(CATEGORY_COLUMN))?,
        )
    }
}

fn build_record(
    site: String,
    payload_mass_kg: f64,
    class: i64,
    booster_category: String,
) -> Result<LaunchRecord, LoadError> {
    if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
        return Err(LoadError::InvalidPayload(payload_mass_kg));
    }
    let outcome = Outcome::from_class(class).ok_or(LoadError::InvalidClass(class))?;
    Ok(LaunchRecord {
        site,
        payload_mass_kg,
        outcome,
        booster_category,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read a CSV launch table.
pub fn read_csv<R: Read>(reader: R) -> Result<LaunchTable> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column).into());
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        let row_no = i + 1;
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let record = raw
            .into_record()
            .with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(LaunchTable::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
///
/// Every object must carry all [`REQUIRED_COLUMNS`]; `null` values are
/// reported as [`LoadError::NullValue`].
pub fn read_json(text: &str) -> Result<LaunchTable> {
    let rows: Vec<JsonMap<String, JsonValue>> =
        serde_json::from_str(text).context("parsing JSON")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, obj) in rows.into_iter().enumerate() {
        let row_no = i + 1;
        if let Some(column) = REQUIRED_COLUMNS.iter().find(|c| !obj.contains_key(**c)) {
            return Err(LoadError::MissingColumn(*column))
                .with_context(|| format!("JSON row {row_no}"));
        }
        let raw: RawRow = serde_json::from_value(JsonValue::Object(obj))
            .with_context(|| format!("JSON row {row_no}"))?;
        let record = raw
            .into_record()
            .with_context(|| format!("JSON row {row_no}"))?;
        records.push(record);
    }

    Ok(LaunchTable::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat columns named like the CSV headers.
///
/// Numeric columns may be any integer or float type; they are cast to
/// `Float64` / `Int64` before validation. Works with files written by
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<LaunchTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut records)?;
    }

    Ok(LaunchTable::from_records(records))
}

fn read_batch(batch: &RecordBatch, out: &mut Vec<LaunchRecord>) -> Result<()> {
    let sites = cast_column(batch, SITE_COLUMN, &DataType::Utf8)?;
    let payloads = cast_column(batch, PAYLOAD_COLUMN, &DataType::Float64)?;
    let classes = cast_column(batch, CLASS_COLUMN, &DataType::Int64)?;
    let categories = cast_column(batch, CATEGORY_COLUMN, &DataType::Utf8)?;

    let sites = sites.as_string::<i32>();
    let payloads = payloads.as_primitive::<Float64Type>();
    let classes = classes.as_primitive::<Int64Type>();
    let categories = categories.as_string::<i32>();

    let first_row = out.len();
    for row in 0..batch.num_rows() {
        let row_no = first_row + row + 1;
        for (name, col) in [
            (SITE_COLUMN, sites as &dyn Array),
            (PAYLOAD_COLUMN, payloads as &dyn Array),
            (CLASS_COLUMN, classes as &dyn Array),
            (CATEGORY_COLUMN, categories as &dyn Array),
        ] {
            if col.is_null(row) {
                return Err(LoadError::NullValue(name))
                    .with_context(|| format!("Parquet row {row_no}"));
            }
        }

        let record = build_record(
            sites.value(row).to_string(),
            payloads.value(row),
            classes.value(row),
            categories.value(row).to_string(),
        )
        .with_context(|| format!("Parquet row {row_no}"))?;
        out.push(record);
    }
    Ok(())
}

/// Look up a required column and cast it to `to`.
fn cast_column(batch: &RecordBatch, name: &'static str, to: &DataType) -> Result<ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| LoadError::MissingColumn(name))?;
    cast(batch.column(idx), to).with_context(|| format!("casting column '{name}' to {to}"))
}
