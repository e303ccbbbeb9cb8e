/// Data layer: core types, loading, and the two chart queries.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LaunchTable  │  Vec<LaunchRecord>, site index, payload bounds
///   └─────────────┘
///        │
///   ┌────┴─────┐
///   ▼          ▼
/// ┌──────────┐ ┌──────────┐
/// │aggregate │ │  filter  │
/// └──────────┘ └──────────┘
///  site → outcome   payload range + site
///  counts (pie)     → rows (scatter)
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
