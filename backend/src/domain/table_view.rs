//! Tabular rendering of entity lists.
//!
//! Headers come from the entity's field table in declared order, so every
//! entity renders the same way without per-type column lists. Cell text is the
//! field's value as displayed by [`FieldValue`]'s `Display`; NULL renders empty.

use crate::storage::{Entity, FieldValue};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// An empty slice produces a table with no columns and no rows.
    pub fn from_records<T: Entity>(records: &[T]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let headers = T::FIELDS.iter().map(|f| f.column.to_string()).collect();
        let rows = records
            .iter()
            .map(|record| {
                T::FIELDS
                    .iter()
                    .map(|f| display_cell((f.get)(record)))
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

fn display_cell(value: FieldValue) -> String {
    value.to_string()
}
