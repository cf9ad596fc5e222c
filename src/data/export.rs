use std::io::Write;

use thiserror::Error;

use super::loader::{
    COL_COUNTRY, COL_ELEVATION, COL_LATITUDE, COL_LONGITUDE, COL_NAME, COL_TYPE,
};
use super::model::VolcanoRecord;

// ---------------------------------------------------------------------------
// Export of the current filtered view
// ---------------------------------------------------------------------------

/// Errors writing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the records as CSV using the same six column names the input
/// format carries, so an export can be re-opened as a dataset. Returns the
/// number of records written.
pub fn export_csv<'a, W, I>(records: I, writer: W) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a VolcanoRecord>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        COL_NAME,
        COL_COUNTRY,
        COL_TYPE,
        COL_ELEVATION,
        COL_LATITUDE,
        COL_LONGITUDE,
    ])?;

    let mut count = 0;
    for r in records {
        let elevation = r.elevation.to_string();
        let latitude = r.latitude.to_string();
        let longitude = r.longitude.to_string();
        csv_writer.write_record([
            r.name.as_deref().unwrap_or(""),
            r.country.as_str(),
            r.kind.as_deref().unwrap_or(""),
            elevation.as_str(),
            latitude.as_str(),
            longitude.as_str(),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Write the records as a JSON array of objects. Returns the number of
/// records written.
pub fn export_json<'a, W, I>(records: I, writer: W) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a VolcanoRecord>,
{
    let rows: Vec<&VolcanoRecord> = records.into_iter().collect();
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: Option<&str>, country: &str, elevation: f64) -> VolcanoRecord {
        VolcanoRecord {
            name: name.map(str::to_string),
            country: country.to_string(),
            kind: Some("Stratovolcano".to_string()),
            elevation,
            latitude: 35.36,
            longitude: 138.73,
        }
    }

    #[test]
    fn csv_export_writes_header_and_rows() {
        let records = vec![
            make_record(Some("Fuji"), "Japan", 3776.0),
            make_record(None, "Japan", 1117.0),
        ];
        let mut buf = Vec::new();
        let count = export_csv(&records, &mut buf).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Volcano Name,Country,Type,Elevation (Meters),Latitude,Longitude"
        );
        assert!(output.contains("Fuji,Japan,Stratovolcano,3776,35.36,138.73"));
        // Absent name exports as an empty cell.
        assert!(output.contains(",Japan,Stratovolcano,1117"));
    }

    #[test]
    fn csv_export_round_trips_through_the_loader() {
        let records = vec![make_record(Some("Fuji"), "Japan", 3776.0)];
        let mut buf = Vec::new();
        export_csv(&records, &mut buf).unwrap();

        let ds = crate::data::loader::load_reader(buf.as_slice()).unwrap();
        assert_eq!(ds.records, records);
    }

    #[test]
    fn json_export_is_an_array_of_objects() {
        let records = vec![make_record(Some("Fuji"), "Japan", 3776.0)];
        let mut buf = Vec::new();
        let count = export_json(&records, &mut buf).unwrap();
        assert_eq!(count, 1);

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Fuji");
        assert_eq!(rows[0]["type"], "Stratovolcano");
        assert_eq!(rows[0]["elevation"], 3776.0);
    }
}
