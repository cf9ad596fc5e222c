use std::collections::BTreeSet;

use serde::Serialize;

// ---------------------------------------------------------------------------
// VolcanoRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single cleaned volcano record (one row of the source CSV).
///
/// Latitude, longitude, country, and elevation are always present; rows
/// missing any of them never survive loading. Name and type may be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolcanoRecord {
    pub name: Option<String>,
    pub country: String,
    /// The "Type" column (stratovolcano, shield volcano, …).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Elevation in meters. Negative for submarine volcanoes.
    pub elevation: f64,
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
}

impl VolcanoRecord {
    /// Label used in the table, bar labels and chart legends.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}

// ---------------------------------------------------------------------------
// VolcanoDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset with column indices computed once at load time.
///
/// `records` is immutable after construction: queries derive index vectors
/// from it and never reorder or mutate the rows.
#[derive(Debug, Clone)]
pub struct VolcanoDataset {
    /// All cleaned records, in input file order.
    pub records: Vec<VolcanoRecord>,
    /// Sorted distinct country values. Drives the country selector, so any
    /// country a query is asked about is guaranteed to exist in the data.
    pub countries: Vec<String>,
    /// Sorted distinct volcano types (absent types excluded).
    pub kinds: Vec<String>,
    /// (min, max) elevation over all records; `None` for an empty dataset.
    pub elevation_bounds: Option<(f64, f64)>,
}

impl VolcanoDataset {
    /// Build the per-column indices from the cleaned records.
    pub fn from_records(records: Vec<VolcanoRecord>) -> Self {
        let countries: Vec<String> = records
            .iter()
            .map(|r| r.country.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let kinds: Vec<String> = records
            .iter()
            .filter_map(|r| r.kind.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let elevation_bounds = records.iter().map(|r| r.elevation).fold(None, |acc, e| {
            Some(match acc {
                None => (e, e),
                Some((lo, hi)) => (e.min(lo), e.max(hi)),
            })
        });

        VolcanoDataset {
            records,
            countries,
            kinds,
            elevation_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
