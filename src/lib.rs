//! # Ingredient Strip
//!
//! Removes the `restaurant_id` field from every record of an ingredient
//! export and writes the cleaned collection back out as pretty JSON.
//!
//! ## Modules
//!
//! - **stripper**: per-record field removal and tally
//! - **io**: load a JSON array of objects, write it with a two-space indent
//! - **error**: the single failure type for a run
//!
//! ## Quick Start
//!
//! ```rust
//! use ingredient_strip::{FieldStripper, Record};
//! use serde_json::json;
//!
//! let mut records: Vec<Record> = serde_json::from_value(json!([
//!     {"name": "Salt", "restaurant_id": "r1"},
//!     {"name": "Pepper"}
//! ])).unwrap();
//!
//! let removed = FieldStripper::new().strip(&mut records);
//! assert_eq!(removed, 1);
//! assert!(!records[0].contains_key("restaurant_id"));
//! ```
//!
//! For a whole file, use [`strip_field`]:
//!
//! ```no_run
//! # fn main() -> ingredient_strip::Result<()> {
//! let report = ingredient_strip::strip_field(
//!     "ingredients_with_translations.json",
//!     "ingredients_without_restaurant_id.json",
//! )?;
//! println!("Removed restaurant_id from {} ingredients", report.removed);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

pub mod error;
pub mod io;
pub mod logger;
pub mod stripper;
pub mod types;

pub use error::{Result, StripError};
pub use io::{read_collection, write_collection};
pub use stripper::FieldStripper;
pub use types::{
    Record, StripEvent, StripOptions, StripReport, WriteMode, INPUT_FILE, OUTPUT_FILE,
    TARGET_FIELD,
};

/// Strip `restaurant_id` from every record in `input_path` and write the
/// result to `output_path`
pub fn strip_field<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<StripReport> {
    strip_field_with(input_path, output_path, &StripOptions::default(), |_| {})
}

/// Like [`strip_field`], reporting progress to `on_event` as each stage
/// completes. Nothing is written if reading or parsing fails.
pub fn strip_field_with<P, Q, F>(
    input_path: P,
    output_path: Q,
    options: &StripOptions,
    mut on_event: F,
) -> Result<StripReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(StripEvent),
{
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    tracing::debug!(input = %input_path.display(), "reading ingredients");
    let mut records = read_collection(input_path)?;
    let found = records.len();
    tracing::info!(found, "loaded ingredients");
    on_event(StripEvent::Loaded { count: found });

    let stripper = FieldStripper::new();
    let removed = stripper.strip(&mut records);
    tracing::info!(removed, field = stripper.field(), "stripped field");
    on_event(StripEvent::Stripped { removed });

    tracing::debug!(output = %output_path.display(), mode = ?options.write_mode, "writing ingredients");
    write_collection(output_path, &records, options.write_mode)?;
    on_event(StripEvent::Written {
        path: output_path.to_path_buf(),
    });

    Ok(StripReport {
        found,
        removed,
        output_path: output_path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_events_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        let output = dir.path().join("out.json");
        std::fs::write(
            &input,
            json!([{"name": "Salt", "restaurant_id": "r1"}, {"name": "Pepper"}]).to_string(),
        )
        .unwrap();

        let mut events = Vec::new();
        let report =
            strip_field_with(&input, &output, &StripOptions::default(), |e| events.push(e)).unwrap();

        assert_eq!(
            events,
            vec![
                StripEvent::Loaded { count: 2 },
                StripEvent::Stripped { removed: 1 },
                StripEvent::Written { path: output.clone() },
            ]
        );
        assert_eq!(report.found, 2);
        assert_eq!(report.removed, 1);
    }

    #[test]
    fn test_no_events_when_input_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut events = Vec::new();

        let result = strip_field_with(
            dir.path().join("missing.json"),
            dir.path().join("out.json"),
            &StripOptions::default(),
            |e| events.push(e),
        );

        assert!(matches!(result, Err(StripError::Read { .. })));
        assert!(events.is_empty());
        assert!(!dir.path().join("out.json").exists());
    }
}
