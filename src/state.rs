use crate::color::ColorMap;
use crate::data::model::VolcanoDataset;
use crate::data::query::{self, FilterSpec, QueryOutput};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Elevation selection offered before the user touches the range controls,
/// clamped into the dataset's actual bounds.
pub const DEFAULT_ELEVATION_RANGE: (f64, f64) = (0.0, 5000.0);

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<VolcanoDataset>,

    /// Current country + elevation selection. None while no dataset is
    /// loaded, or when the loaded file had no complete rows.
    pub spec: Option<FilterSpec>,

    /// Result of the last query (recomputed on every selection change).
    pub result: Option<QueryOutput>,

    /// Colour per volcano type for the map layer.
    pub color_map: Option<ColorMap>,

    /// Error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            spec: None,
            result: None,
            color_map: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: initialise the selection defaults,
    /// build the type colour map, and run the first query.
    pub fn set_dataset(&mut self, dataset: VolcanoDataset) {
        self.spec = default_spec(&dataset);
        self.color_map = if dataset.kinds.is_empty() {
            None
        } else {
            Some(ColorMap::new(&dataset.kinds))
        };
        self.result = self
            .spec
            .as_ref()
            .map(|spec| query::query(&dataset.records, spec));
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute the derived views after a selection change.
    pub fn requery(&mut self) {
        if let (Some(ds), Some(spec)) = (&self.dataset, &self.spec) {
            self.result = Some(query::query(&ds.records, spec));
        }
    }

    /// Switch the selected country.
    pub fn set_country(&mut self, country: String) {
        if let Some(spec) = &mut self.spec {
            spec.country = country;
            self.requery();
        }
    }

    /// Update the elevation range. Crossed values are reordered so the
    /// minimum never exceeds the maximum.
    pub fn set_elevation_range(&mut self, min: f64, max: f64) {
        if let Some(spec) = &mut self.spec {
            let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
            spec.min_elevation = lo;
            spec.max_elevation = hi;
            self.requery();
        }
    }
}

/// Initial selection for a fresh dataset: first country in sorted order,
/// default elevation range clamped into the dataset's bounds.
fn default_spec(dataset: &VolcanoDataset) -> Option<FilterSpec> {
    let country = dataset.countries.first()?.clone();
    let (lo, hi) = dataset.elevation_bounds?;
    Some(FilterSpec {
        country,
        min_elevation: DEFAULT_ELEVATION_RANGE.0.clamp(lo, hi),
        max_elevation: DEFAULT_ELEVATION_RANGE.1.clamp(lo, hi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::VolcanoRecord;

    fn make_record(country: &str, elevation: f64) -> VolcanoRecord {
        VolcanoRecord {
            name: Some(format!("{country}-{elevation}")),
            country: country.to_string(),
            kind: Some("Stratovolcano".to_string()),
            elevation,
            latitude: 10.0,
            longitude: 20.0,
        }
    }

    fn two_country_dataset() -> VolcanoDataset {
        VolcanoDataset::from_records(vec![
            make_record("Japan", 3776.0),
            make_record("Italy", 3329.0),
            make_record("Japan", 1117.0),
        ])
    }

    #[test]
    fn set_dataset_selects_first_country_and_queries() {
        let mut state = AppState::default();
        state.set_dataset(two_country_dataset());

        let spec = state.spec.as_ref().unwrap();
        assert_eq!(spec.country, "Italy"); // first in sorted order
        let result = state.result.as_ref().unwrap();
        assert_eq!(result.stats.count, 1);
        assert!(state.color_map.is_some());
    }

    #[test]
    fn default_range_is_clamped_into_bounds() {
        let mut state = AppState::default();
        state.set_dataset(VolcanoDataset::from_records(vec![
            make_record("Japan", 2000.0),
            make_record("Japan", 6000.0),
        ]));

        let spec = state.spec.as_ref().unwrap();
        assert_eq!(spec.min_elevation, 2000.0);
        assert_eq!(spec.max_elevation, 5000.0);
    }

    #[test]
    fn country_change_requeries() {
        let mut state = AppState::default();
        state.set_dataset(two_country_dataset());

        state.set_country("Japan".to_string());
        let result = state.result.as_ref().unwrap();
        assert_eq!(result.stats.count, 2);
    }

    #[test]
    fn crossed_elevation_range_is_reordered() {
        let mut state = AppState::default();
        state.set_dataset(two_country_dataset());

        state.set_elevation_range(3000.0, 1000.0);
        let spec = state.spec.as_ref().unwrap();
        assert!(spec.min_elevation <= spec.max_elevation);
        assert_eq!(spec.min_elevation, 1000.0);
        assert_eq!(spec.max_elevation, 3000.0);
    }

    #[test]
    fn empty_dataset_leaves_no_selection() {
        let mut state = AppState::default();
        state.set_dataset(VolcanoDataset::from_records(Vec::new()));
        assert!(state.spec.is_none());
        assert!(state.result.is_none());
        assert!(state.color_map.is_none());
    }

    #[test]
    fn new_dataset_replaces_the_old_selection() {
        let mut state = AppState::default();
        state.set_dataset(two_country_dataset());
        state.set_country("Japan".to_string());

        state.set_dataset(VolcanoDataset::from_records(vec![make_record(
            "Chile", 6893.0,
        )]));
        let spec = state.spec.as_ref().unwrap();
        assert_eq!(spec.country, "Chile");
        // Range collapses onto the single elevation present.
        assert_eq!(spec.min_elevation, 6893.0);
        assert_eq!(state.result.as_ref().unwrap().stats.count, 1);
    }
}
