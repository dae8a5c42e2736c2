/// Data layer: core types, loading, and player search.
///
/// Architecture:
/// ```text
///  .csv / .parquet / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  select + rename columns → Vec<RawRow>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  drop incomplete rows → Vec<PlayerRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  name search → matching indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
