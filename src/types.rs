use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// One ingredient: an ordered, schema-less JSON object
pub type Record = Map<String, Value>;

/// The only key this crate inspects or removes
pub const TARGET_FIELD: &str = "restaurant_id";

/// Input file read by the `remove-restaurant-id` binary
pub const INPUT_FILE: &str = "ingredients_with_translations.json";

/// Output file written by the `remove-restaurant-id` binary
pub const OUTPUT_FILE: &str = "ingredients_without_restaurant_id.json";

/// How the cleaned collection reaches disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate the output file and write into it directly
    #[default]
    Direct,
    /// Write a sibling temp file, then rename it over the output
    Atomic,
}

/// Options for a strip run
#[derive(Debug, Clone, Default)]
pub struct StripOptions {
    pub write_mode: WriteMode,
}

impl StripOptions {
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}

/// Progress notifications, emitted in this order during a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripEvent {
    /// The input was parsed into `count` records
    Loaded { count: usize },
    /// The target field was removed from `removed` records
    Stripped { removed: usize },
    /// The cleaned collection was written to `path`
    Written { path: PathBuf },
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripReport {
    /// Records read from the input
    pub found: usize,

    /// Records that carried the target field
    pub removed: usize,

    /// Where the cleaned collection was written
    pub output_path: PathBuf,
}
