use std::collections::HashMap;

use crate::row::Row;

/// Table-keyed row collection produced by a flatten call.
///
/// Tables appear in first-discovery order, and rows within a table keep
/// their first-discovery order until deduplication reorders them.
#[derive(Debug, Clone, Default)]
pub struct DataMap {
    tables: Vec<TableRows>,
    index: HashMap<&'static str, usize>,
}

#[derive(Debug, Clone)]
struct TableRows {
    table: &'static str,
    rows: Vec<Row>,
}

impl DataMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to the table's collection, creating the collection on
    /// first use.
    pub fn push(&mut self, table: &'static str, row: Row) {
        let position = match self.index.get(table) {
            Some(position) => *position,
            None => {
                self.tables.push(TableRows {
                    table,
                    rows: Vec::new(),
                });
                let position = self.tables.len() - 1;
                self.index.insert(table, position);
                position
            }
        };
        self.tables[position].rows.push(row);
    }

    pub fn rows(&self, table: &str) -> Option<&[Row]> {
        self.index
            .get(table)
            .map(|position| self.tables[*position].rows.as_slice())
    }

    /// Tables and their rows in first-discovery order.
    pub fn tables(&self) -> impl Iterator<Item = (&'static str, &[Row])> {
        self.tables
            .iter()
            .map(|entry| (entry.table, entry.rows.as_slice()))
    }

    pub fn into_tables(self) -> impl Iterator<Item = (&'static str, Vec<Row>)> {
        self.tables.into_iter().map(|entry| (entry.table, entry.rows))
    }

    /// Whether any collected row for `table` carries `key` in `column`,
    /// compared through the stable key form. This is the revisit probe the
    /// flattener uses as its cycle guard.
    pub fn contains_column_key(&self, table: &str, column: &str, key: &str) -> bool {
        self.rows(table).is_some_and(|rows| {
            rows.iter()
                .any(|row| row.get(column).is_some_and(|value| value.to_key() == key))
        })
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Total number of rows across all tables.
    pub fn len(&self) -> usize {
        self.tables.iter().map(|entry| entry.rows.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
