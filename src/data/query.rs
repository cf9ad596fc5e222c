use super::model::VolcanoRecord;

// ---------------------------------------------------------------------------
// Query parameters and outputs
// ---------------------------------------------------------------------------

/// How many records the ranked view keeps.
pub const TOP_N: usize = 5;

/// User-chosen country and elevation range. The country always comes from
/// the dataset's own distinct-country list, and `min_elevation` never
/// exceeds `max_elevation`; both are enforced by the selection UI.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub country: String,
    pub min_elevation: f64,
    pub max_elevation: f64,
}

/// Mean position of a filtered set, used to center the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub mean_latitude: f64,
    pub mean_longitude: f64,
}

/// Summary of a filtered set. `centroid` is `None` exactly when the set is
/// empty: no well-formed center point exists, and callers must branch to a
/// "no matches" presentation instead of computing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub centroid: Option<Centroid>,
}

/// The three derived views one query produces. `filtered` and `top_n` are
/// freshly allocated index vectors into the record slice the query ran on.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutput {
    /// Indices of matching records, in input order.
    pub filtered: Vec<usize>,
    /// The up-to-[`TOP_N`] highest-elevation matches, tallest first.
    pub top_n: Vec<usize>,
    pub stats: Stats,
}

// ---------------------------------------------------------------------------
// The query itself
// ---------------------------------------------------------------------------

/// Run one filter/rank/aggregate pass over the cleaned records.
///
/// Pure function of its inputs: re-running with the same records and spec
/// yields identical output, and the records are never mutated.
pub fn query(records: &[VolcanoRecord], spec: &FilterSpec) -> QueryOutput {
    let filtered: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            r.country == spec.country
                && r.elevation >= spec.min_elevation
                && r.elevation <= spec.max_elevation
        })
        .map(|(i, _)| i)
        .collect();

    // Stable sort: equal elevations keep input order.
    let mut top_n = filtered.clone();
    top_n.sort_by(|&a, &b| records[b].elevation.total_cmp(&records[a].elevation));
    top_n.truncate(TOP_N);

    let stats = Stats {
        count: filtered.len(),
        centroid: centroid(records, &filtered),
    };

    QueryOutput {
        filtered,
        top_n,
        stats,
    }
}

fn centroid(records: &[VolcanoRecord], indices: &[usize]) -> Option<Centroid> {
    if indices.is_empty() {
        return None;
    }
    let n = indices.len() as f64;
    let (lat_sum, lon_sum) = indices.iter().fold((0.0, 0.0), |(lat, lon), &i| {
        (lat + records[i].latitude, lon + records[i].longitude)
    });
    Some(Centroid {
        mean_latitude: lat_sum / n,
        mean_longitude: lon_sum / n,
    })
}
