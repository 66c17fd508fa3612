use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rowpress_core::DataMap;

use crate::count::CountingWriter;
use crate::errors::RenderError;

/// Render the literal dump: one `<table> = <rows>` line per non-empty
/// table, with rows as a JSON array of column-ordered objects.
pub fn render_raw<W: Write>(writer: &mut W, data: &DataMap) -> Result<(), RenderError> {
    for (table, rows) in data.tables() {
        if rows.is_empty() {
            continue;
        }
        let literal = serde_json::to_string(rows)?;
        writeln!(writer, "{table} = {literal}")?;
    }
    Ok(())
}

/// Write the literal dump to a new file at `path`, returning the number of
/// bytes written.
pub fn write_raw(path: &Path, data: &DataMap) -> Result<u64, RenderError> {
    let mut writer = CountingWriter::new(BufWriter::new(File::create(path)?));
    render_raw(&mut writer, data)?;
    writer.flush()?;
    Ok(writer.bytes_written())
}
