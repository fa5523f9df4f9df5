use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Dog;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dog roster from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row `name,breed,weight,date_of_birth`
/// * `.json` – `[{ "name": ..., "breed": ..., "weight": ..., "date_of_birth": ... }, ...]`
///
/// Rows keep their source order; that order is what the registry's queries
/// later report results in. `date_of_birth` is deliberately **not** parsed
/// here, see [`super::model::Dog`].
pub fn load_file(path: &Path) -> Result<Vec<Dog>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "name": "Rex",
///     "breed": "Rhodesian Ridgeback",
///     "weight": 38.0,
///     "date_of_birth": "05-02-2005"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<Dog>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let dogs: Vec<Dog> = serde_json::from_str(&text).context("parsing JSON")?;

    for (i, dog) in dogs.iter().enumerate() {
        validate(dog).with_context(|| format!("Row {i}"))?;
    }
    Ok(dogs)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row `name,breed,weight,date_of_birth`, one dog per
/// row. Breed cells carry the canonical display string.
fn load_csv(path: &Path) -> Result<Vec<Dog>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let mut dogs = Vec::new();
    for (row_no, result) in reader.deserialize::<Dog>().enumerate() {
        let dog = result.with_context(|| format!("CSV row {row_no}"))?;
        validate(&dog).with_context(|| format!("CSV row {row_no}"))?;
        dogs.push(dog);
    }
    Ok(dogs)
}

// ---------------------------------------------------------------------------
// Row validation
// ---------------------------------------------------------------------------

/// Checks the loader is responsible for. Weight must be a non-negative
/// number; everything else is covered by deserialization itself.
fn validate(dog: &Dog) -> Result<()> {
    if !dog.weight.is_finite() || dog.weight < 0.0 {
        bail!("'{}' has invalid weight {}", dog.name, dog.weight);
    }
    Ok(())
}
