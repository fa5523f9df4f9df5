use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::RegistryConfig;
use crate::data::model::{Breed, Dog};
use crate::error::RegistryError;

// ---------------------------------------------------------------------------
// DogRegistry – in-memory query engine
// ---------------------------------------------------------------------------

/// In-memory query engine over a loaded dog roster.
///
/// The roster is fixed at construction (load order is preserved) and never
/// mutated afterwards; every query is a pure `&self` read, so a registry can
/// be shared across threads freely. Date-of-birth text is parsed lazily,
/// per query, under the patterns in [`RegistryConfig`].
#[derive(Debug, Clone)]
pub struct DogRegistry {
    dogs: Vec<Dog>,
    config: RegistryConfig,
}

impl DogRegistry {
    /// Crate-private: registries are built through [`crate::factory`].
    pub(crate) fn new(dogs: Vec<Dog>) -> Self {
        Self {
            dogs,
            config: RegistryConfig::default(),
        }
    }

    /// The full roster in load order.
    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    /// Number of dogs in the roster.
    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Mutable access to the date-pattern configuration. Takes effect for
    /// all subsequent date queries; the roster itself stays immutable.
    pub fn config_mut(&mut self) -> &mut RegistryConfig {
        &mut self.config
    }

    // -----------------------------------------------------------------------
    // Aggregate queries
    // -----------------------------------------------------------------------

    /// Arithmetic mean weight over all dogs of `breed`.
    ///
    /// Returns `0.0` when the roster has no such dog: a defined "no data"
    /// value, not an error.
    pub fn average_weight(&self, breed: Breed) -> f64 {
        let (sum, count) = self
            .dogs
            .iter()
            .filter(|dog| dog.breed == breed)
            .fold((0.0_f64, 0_usize), |(sum, count), dog| {
                (sum + dog.weight, count + 1)
            });

        let average = if count == 0 { 0.0 } else { sum / count as f64 };
        log::debug!("{breed} average weight is {average}");
        average
    }

    /// Mean weight per breed, for every breed with at least one dog.
    ///
    /// Breeds without a dog are absent from the map, not reported as zero,
    /// unlike [`Self::average_weight`]. `Breed: Ord` follows declaration
    /// order, so iteration over the map does too.
    pub fn average_weight_per_breed(&self) -> BTreeMap<Breed, f64> {
        let mut groups: BTreeMap<Breed, (f64, usize)> = BTreeMap::new();
        for dog in &self.dogs {
            let (sum, count) = groups.entry(dog.breed).or_insert((0.0, 0));
            *sum += dog.weight;
            *count += 1;
        }

        let averages: BTreeMap<Breed, f64> = groups
            .into_iter()
            .map(|(breed, (sum, count))| (breed, sum / count as f64))
            .collect();
        log::debug!("average weight for all breeds: {averages:?}");
        averages
    }

    // -----------------------------------------------------------------------
    // Filter queries
    // -----------------------------------------------------------------------

    /// All dogs satisfying `predicate`, in load order. Empty when none
    /// match.
    pub fn dogs_by_condition(&self, predicate: impl Fn(&Dog) -> bool) -> Vec<&Dog> {
        let dogs: Vec<&Dog> = self.dogs.iter().filter(|dog| predicate(dog)).collect();
        log::debug!("{} dogs meet the condition", dogs.len());
        dogs
    }

    /// The oldest dog born strictly after `cutoff`, i.e. the survivor with
    /// the earliest date of birth. `Ok(None)` when no dog qualifies.
    ///
    /// Every roster entry's `date_of_birth` is parsed under its configured
    /// pattern, whether or not it survives the cutoff filter; the first
    /// unparsable value aborts the query with
    /// [`RegistryError::DateParse`].
    ///
    /// Ties on the minimal date keep the dog loaded earlier: the scan only
    /// replaces its candidate on a strictly earlier date, so repeated calls
    /// return the same record.
    pub fn oldest_after_date(&self, cutoff: NaiveDate) -> Result<Option<&Dog>, RegistryError> {
        let mut oldest: Option<(&Dog, NaiveDate)> = None;

        for dog in &self.dogs {
            let born = self.parse_date_of_birth(dog)?;
            if born <= cutoff {
                continue;
            }
            match oldest {
                Some((_, candidate)) if candidate <= born => {}
                _ => oldest = Some((dog, born)),
            }
        }

        match oldest {
            Some((dog, _)) => log::debug!("oldest dog born after {cutoff} is {}", dog.name),
            None => log::debug!("no dog born after {cutoff}"),
        }
        Ok(oldest.map(|(dog, _)| dog))
    }

    fn parse_date_of_birth(&self, dog: &Dog) -> Result<NaiveDate, RegistryError> {
        let format = self.config.format_for(dog.breed);
        NaiveDate::parse_from_str(&dog.date_of_birth, format).map_err(|source| {
            RegistryError::DateParse {
                name: dog.name.clone(),
                value: dog.date_of_birth.clone(),
                format: format.to_string(),
                source,
            }
        })
    }
}
