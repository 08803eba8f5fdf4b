use crate::types::{Record, TARGET_FIELD};

/// Removes the target field from ingredient records
pub struct FieldStripper {
    field: &'static str,
}

impl FieldStripper {
    pub fn new() -> Self {
        FieldStripper {
            field: TARGET_FIELD,
        }
    }

    /// The key this stripper removes
    pub fn field(&self) -> &str {
        self.field
    }

    /// Remove the field from one record, returning whether it was present
    pub fn strip_record(&self, record: &mut Record) -> bool {
        // shift_remove keeps the remaining keys in their original order
        record.shift_remove(self.field).is_some()
    }

    /// Strip every record in place and return how many carried the field
    pub fn strip(&self, records: &mut [Record]) -> usize {
        let mut removed = 0;

        for (index, record) in records.iter_mut().enumerate() {
            if self.strip_record(record) {
                tracing::trace!(index, field = self.field, "removed field");
                removed += 1;
            }
        }

        removed
    }
}

impl Default for FieldStripper {
    fn default() -> Self {
        Self::new()
    }
}
