/// Data layer: core types, loading/cleaning, querying, and export.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + clean rows → VolcanoDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ VolcanoDataset │  Vec<VolcanoRecord>, column indices
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  filter + rank + centroid → filtered / top-5 / stats
///   └──────────┘
/// ```
pub mod export;
pub mod loader;
pub mod model;
pub mod query;
