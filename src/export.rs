//! Delimited-text export of projection rows

use std::io::Write;
use std::path::Path;

use crate::projection::YearRow;

/// Write rows as CSV with a header line; values are written unrounded
pub fn write_rows<W: Write>(writer: W, rows: &[YearRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write rows to a CSV file, replacing any existing file
pub fn write_rows_to_path<P: AsRef<Path>>(path: P, rows: &[YearRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_path(path)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render rows as a CSV string
pub fn rows_to_csv(rows: &[YearRow]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_rows(&mut buf, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
