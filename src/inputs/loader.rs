use super::RawInputSet;
use crate::error::{FitRadarError, FrResult};
use crate::scorer::RawValue;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads a JSON object of `metric id -> value`. Values may be numbers or
/// strings; `null` entries are dropped and score as missing.
pub fn load_inputs_json<R: Read>(reader: R) -> FrResult<RawInputSet> {
    let set: RawInputSet = serde_json::from_reader(reader)?;
    debug!("   -> Loaded {} inputs from JSON", set.len());
    Ok(set)
}

/// Reads a `metric,value` CSV with a header row. Rows with fewer than two
/// fields or an empty metric id are skipped; cells are kept as text.
pub fn load_inputs_csv<R: Read>(reader: R) -> FrResult<RawInputSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut set = RawInputSet::new();
    let mut skipped_count = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 2 || rec[0].is_empty() {
            skipped_count += 1;
            continue;
        }

        if let Some(previous) = set.insert(&rec[0], RawValue::Text(rec[1].to_string())) {
            warn!(
                "   ⚠️  [Row {}] '{}' given twice, replacing '{}'",
                row_idx + 2,
                &rec[0],
                previous
            );
        }
    }

    if skipped_count > 0 {
        warn!("   ⚠️  Skipped {} invalid rows in input CSV.", skipped_count);
    }

    Ok(set)
}

/// Loads an input set, picking the format from the file extension
/// (`.csv`, anything else is read as JSON).
pub fn load_inputs_from_file<P: AsRef<Path>>(path: P) -> FrResult<RawInputSet> {
    let path = path.as_ref();
    info!("📂 Loading inputs from: {}", path.display());

    let file = File::open(path).map_err(|e| {
        FitRadarError::Validation(format!(
            "Could not open inputs at '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    if is_csv {
        load_inputs_csv(file)
    } else {
        load_inputs_json(file)
    }
}

/// Writes the input set as pretty JSON, readable by `load_inputs_json`.
pub fn save_inputs_json<W: Write>(mut writer: W, inputs: &RawInputSet) -> FrResult<()> {
    serde_json::to_writer_pretty(&mut writer, inputs)?;
    writer.flush()?;
    Ok(())
}
