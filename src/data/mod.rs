/// Data layer: core types, loading, filtering, and chart artifacts.
///
/// Architecture:
/// ```text
///  data/penguins.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse resource → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ PenguinDataset │  Vec<Penguin>, species counts
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  species membership → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ histogram  │  bin filtered values → chart artifacts
///   └───────────┘
/// ```
pub mod filter;
pub mod histogram;
pub mod loader;
pub mod model;
