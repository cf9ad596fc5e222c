use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{VolcanoDataset, VolcanoRecord};

// ---------------------------------------------------------------------------
// Column names of the source format
// ---------------------------------------------------------------------------

/// Header names the input file must carry. Binding is by name, once, at
/// load time; column order in the file is irrelevant and extra columns are
/// ignored.
pub const COL_NAME: &str = "Volcano Name";
pub const COL_COUNTRY: &str = "Country";
pub const COL_TYPE: &str = "Type";
pub const COL_ELEVATION: &str = "Elevation (Meters)";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Load failures that abort the whole upload. Incomplete rows are not
/// errors: they are dropped silently and only reflected in the row count.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not parseable as CSV: {0}")]
    Malformed(#[from] csv::Error),

    #[error("header is missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a volcano dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<VolcanoDataset, LoadError> {
    let file = File::open(path)?;
    load_reader(file)
}

/// Load a volcano dataset from any UTF-8 CSV stream.
///
/// The header row must contain all six named columns. Each data row becomes
/// one [`VolcanoRecord`]; rows with a missing or unparsable value in
/// Latitude, Longitude, Country, or Elevation are dropped whole. Name and
/// Type cells may be empty. Input order is preserved minus dropped rows.
pub fn load_reader<R: Read>(reader: R) -> Result<VolcanoDataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(LoadError::MissingColumn(name))
    };

    let name_idx = column(COL_NAME)?;
    let country_idx = column(COL_COUNTRY)?;
    let kind_idx = column(COL_TYPE)?;
    let elevation_idx = column(COL_ELEVATION)?;
    let latitude_idx = column(COL_LATITUDE)?;
    let longitude_idx = column(COL_LONGITUDE)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in rdr.records() {
        let row = row?;

        let required = (
            text_cell(row.get(country_idx)),
            numeric_cell(row.get(elevation_idx)),
            numeric_cell(row.get(latitude_idx)),
            numeric_cell(row.get(longitude_idx)),
        );
        let (Some(country), Some(elevation), Some(latitude), Some(longitude)) = required else {
            dropped += 1;
            continue;
        };

        records.push(VolcanoRecord {
            name: text_cell(row.get(name_idx)),
            country,
            kind: text_cell(row.get(kind_idx)),
            elevation,
            latitude,
            longitude,
        });
    }

    if dropped > 0 {
        log::info!("Dropped {dropped} incomplete rows during load");
    }

    Ok(VolcanoDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Cell parsing
// ---------------------------------------------------------------------------

/// A non-empty, trimmed text cell. Absent or blank cells are `None`.
fn text_cell(cell: Option<&str>) -> Option<String> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A finite numeric cell. Anything unparsable counts as missing, so the
/// caller drops the row instead of failing the load.
fn numeric_cell(cell: Option<&str>) -> Option<f64> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Volcano Name,Country,Type,Elevation (Meters),Latitude,Longitude
Fuji,Japan,Stratovolcano,3776,35.36,138.73
Etna,Italy,Stratovolcano,3329,37.75,14.99
Sakurajima,Japan,Stratovolcano,1117,31.58,130.65
";

    #[test]
    fn loads_well_formed_rows_in_order() {
        let ds = load_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0].name.as_deref(), Some("Fuji"));
        assert_eq!(ds.records[1].country, "Italy");
        assert_eq!(ds.records[2].elevation, 1117.0);
        assert_eq!(ds.countries, vec!["Italy", "Japan"]);
    }

    #[test]
    fn column_order_is_irrelevant() {
        let reordered = "\
Longitude,Elevation (Meters),Volcano Name,Latitude,Country,Type
138.73,3776,Fuji,35.36,Japan,Stratovolcano
";
        let ds = load_reader(reordered.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        let r = &ds.records[0];
        assert_eq!(r.name.as_deref(), Some("Fuji"));
        assert_eq!(r.country, "Japan");
        assert_eq!(r.elevation, 3776.0);
        assert_eq!(r.latitude, 35.36);
        assert_eq!(r.longitude, 138.73);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let extra = "\
Volcano Name,Country,Type,Elevation (Meters),Latitude,Longitude,Last Eruption
Fuji,Japan,Stratovolcano,3776,35.36,138.73,1707
";
        let ds = load_reader(extra.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn rows_missing_required_cells_are_dropped() {
        let input = "\
Volcano Name,Country,Type,Elevation (Meters),Latitude,Longitude
Fuji,Japan,Stratovolcano,3776,35.36,138.73
NoCountry,,Stratovolcano,1000,10.0,10.0
NoElevation,Japan,Stratovolcano,,10.0,10.0
BadLatitude,Japan,Stratovolcano,1000,not-a-number,10.0
NanLongitude,Japan,Stratovolcano,1000,10.0,NaN
Etna,Italy,Stratovolcano,3329,37.75,14.99
";
        let ds = load_reader(input.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].name.as_deref(), Some("Fuji"));
        assert_eq!(ds.records[1].name.as_deref(), Some("Etna"));
    }

    #[test]
    fn short_rows_are_dropped_not_fatal() {
        let input = "\
Volcano Name,Country,Type,Elevation (Meters),Latitude,Longitude
Fuji,Japan
Etna,Italy,Stratovolcano,3329,37.75,14.99
";
        let ds = load_reader(input.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].name.as_deref(), Some("Etna"));
    }

    #[test]
    fn absent_name_and_type_survive_as_none() {
        let input = "\
Volcano Name,Country,Type,Elevation (Meters),Latitude,Longitude
,Japan,,1117,31.58,130.65
";
        let ds = load_reader(input.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].name, None);
        assert_eq!(ds.records[0].kind, None);
    }

    #[test]
    fn missing_required_column_fails() {
        let input = "\
Volcano Name,Country,Type,Elevation (Meters),Longitude
Fuji,Japan,Stratovolcano,3776,138.73
";
        let err = load_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(COL_LATITUDE)));
    }

    #[test]
    fn non_utf8_stream_is_malformed() {
        let bytes: &[u8] = &[
            b'V', b'o', b'l', 0xff, 0xfe, b'\n', 0xff, b',', 0xfe, b'\n',
        ];
        let err = load_reader(bytes).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn load_csv_reads_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(SAMPLE.as_bytes()).unwrap();
        let ds = load_csv(tmp.path()).unwrap();
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn load_csv_missing_file_is_io_error() {
        let err = load_csv(Path::new("/nonexistent/volcanoes.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
