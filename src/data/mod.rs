/// Data layer: core types, loading, and classification.
///
/// Architecture:
/// ```text
///  .geojson / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → BlockModel
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ BlockModel  │  Vec<Block>, column index
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  derive profit / in_pit per block
///   └──────────┘
/// ```

pub mod classify;
pub mod loader;
pub mod model;
