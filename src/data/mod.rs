/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Dog>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ DogRegistry│  immutable roster + query engine (crate::registry)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
