use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rowpress_core::{DataMap, Row, Value};

use crate::count::CountingWriter;
use crate::errors::RenderError;

/// Render one `INSERT INTO ... VALUES ...;` statement block per non-empty
/// table, blocks separated by blank lines. Column order is taken from each
/// table's first row; every other row must carry the same column set.
pub fn render_sql<W: Write>(writer: &mut W, data: &DataMap) -> Result<(), RenderError> {
    let mut first_block = true;
    for (table, rows) in data.tables() {
        if rows.is_empty() {
            continue;
        }
        let columns: Vec<&str> = rows[0].columns().collect();
        check_uniform_columns(table, &columns, rows)?;

        if !first_block {
            writeln!(writer)?;
        }
        first_block = false;

        writeln!(writer, "INSERT INTO \"{table}\" ({})", columns.join(", "))?;
        writeln!(writer, "VALUES")?;
        for (index, row) in rows.iter().enumerate() {
            let tuple: Vec<String> = row.iter().map(|(_, value)| sql_literal(value)).collect();
            let terminator = if index + 1 == rows.len() { ";" } else { "," };
            writeln!(writer, "    ({}){terminator}", tuple.join(", "))?;
        }
    }
    Ok(())
}

/// Write the `INSERT` statements to a new file at `path`, returning the
/// number of bytes written.
pub fn write_sql(path: &Path, data: &DataMap) -> Result<u64, RenderError> {
    let mut writer = CountingWriter::new(BufWriter::new(File::create(path)?));
    render_sql(&mut writer, data)?;
    writer.flush()?;
    Ok(writer.bytes_written())
}

fn check_uniform_columns(table: &str, columns: &[&str], rows: &[Row]) -> Result<(), RenderError> {
    for (index, row) in rows.iter().enumerate().skip(1) {
        let row_columns: Vec<&str> = row.columns().collect();
        if row_columns != columns {
            return Err(RenderError::MismatchedColumns {
                table: table.to_string(),
                detail: format!(
                    "row {index} has columns ({}) but the first row has ({})",
                    row_columns.join(", "),
                    columns.join(", "),
                ),
            });
        }
    }
    Ok(())
}

/// SQL literal form of one value: `NULL` for nulls, single-quoted text with
/// embedded quotes doubled, quoted textual forms for dates and booleans,
/// bare text for numbers. Enum values render as their stored value.
fn sql_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Int(_) | Value::Float(_) => value.to_key(),
        Value::Text(text) => format!("'{}'", text.replace('\'', "''")),
        Value::Bool(_) | Value::Uuid(_) | Value::Date(_) | Value::DateTime(_) => {
            format!("'{}'", value.to_key())
        }
        Value::Enum(value) => sql_literal(&value.stored),
    }
}
