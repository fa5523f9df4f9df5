//! In-memory dog registry.
//!
//! Loads a fixed-schema roster of dog records from a CSV or JSON file and
//! answers aggregate and filter queries against it: per-breed weight
//! averages, arbitrary predicate filters, and "oldest dog born after a
//! date". The roster is immutable once loaded; dates of birth are parsed
//! lazily, per query, under a configurable pattern.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use kennel_registry::{registry_for, AnimalKind, Breed};
//!
//! # fn main() -> Result<(), kennel_registry::RegistryError> {
//! let registry = registry_for(AnimalKind::Dog, "dogs.csv")?;
//!
//! let avg = registry.average_weight(Breed::RhodesianRidgeback);
//! let heavyweights = registry.dogs_by_condition(|dog| dog.weight > 38.0);
//! let cutoff = NaiveDate::from_ymd_opt(2005, 2, 4).unwrap();
//! let oldest = registry.oldest_after_date(cutoff)?;
//! # let _ = (avg, heavyweights, oldest);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod factory;
pub mod registry;

pub use config::{set_query_tracing, RegistryConfig, DEFAULT_DATE_FORMAT};
pub use data::model::{Breed, Dog};
pub use error::RegistryError;
pub use factory::{registry_for, AnimalKind};
pub use registry::DogRegistry;
