//! End-to-end tests: factory → loader → registry, driven against the
//! fixture rosters under `tests/fixtures/`.

use std::path::PathBuf;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use kennel_registry::{
    registry_for, set_query_tracing, AnimalKind, Breed, DogRegistry, RegistryError,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn dog_registry() -> DogRegistry {
    registry_for(AnimalKind::Dog, fixture("dogs.csv")).expect("fixture roster should load")
}

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%d-%m-%Y").unwrap()
}

/// Expected mean weight per breed for the `dogs.csv` / `dogs.json` roster.
fn expected_average(breed: Breed) -> f64 {
    match breed {
        Breed::RhodesianRidgeback => 38.0,
        Breed::BerneseMountainDog => 55.0,
        Breed::ShibaInu => 12.25,
        Breed::GermanShepherd => 29.0,
        Breed::LabradorRetriever => 33.0,
        Breed::Greyhound => 29.0,
        Breed::SiberianHusky => 25.5,
        Breed::JapaneseSpitz => 12.0,
        Breed::BohemianWirehairedPointingGriffon => 28.0,
    }
}

#[test]
fn average_weight_for_every_breed() {
    let registry = dog_registry();
    for breed in Breed::ALL {
        assert_eq!(registry.average_weight(breed), expected_average(breed), "{breed}");
    }
}

#[test]
fn per_breed_averages_agree_with_single_breed_queries() {
    let registry = dog_registry();
    let averages = registry.average_weight_per_breed();

    // Every breed appears in the fixture, so no key is omitted here.
    assert_eq!(averages.len(), Breed::ALL.len());
    for (breed, average) in &averages {
        assert_eq!(*average, registry.average_weight(*breed), "{breed}");
    }
}

#[test]
fn condition_query_hits_the_strict_boundary() {
    let registry = dog_registry();

    // The only Rex weighs exactly 38.0, so a strict > excludes him.
    let matches = registry.dogs_by_condition(|dog| dog.weight > 38.0 && dog.name == "Rex");
    assert!(matches.is_empty());

    let matches = registry.dogs_by_condition(|dog| dog.weight >= 38.0 && dog.name == "Rex");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].breed, Breed::RhodesianRidgeback);
}

#[test]
fn oldest_dog_after_date() {
    let registry = dog_registry();
    let found = registry.oldest_after_date(date("04-02-2005")).unwrap();

    let dog = found.expect("a dog born after 04-02-2005 exists");
    assert_eq!(dog.name, "Rex");
    assert_eq!(dog.date_of_birth, "05-02-2005");
    assert_eq!(dog.weight, 38.0);
    assert_eq!(dog.breed.to_string(), "Rhodesian Ridgeback");
}

#[test]
fn oldest_dog_after_a_future_date_is_none() {
    let registry = dog_registry();
    assert!(registry.oldest_after_date(date("01-01-2030")).unwrap().is_none());
}

#[test]
fn unparsable_date_of_birth_fails_the_date_query() {
    let registry = registry_for(AnimalKind::Dog, fixture("bad_dates.csv")).unwrap();

    // Aggregate queries never touch dates and still work.
    assert_eq!(registry.average_weight(Breed::Greyhound), 29.5);

    let err = registry.oldest_after_date(date("01-01-2010")).unwrap_err();
    assert!(matches!(err, RegistryError::DateParse { .. }));
}

#[test]
fn json_roster_is_identical_to_csv_roster() {
    let from_csv = dog_registry();
    let from_json = registry_for(AnimalKind::Dog, fixture("dogs.json")).unwrap();
    assert_eq!(from_csv.dogs(), from_json.dogs());
}

#[test]
fn unregistered_kind_is_an_invalid_argument() {
    let err = registry_for(AnimalKind::Cat, fixture("dogs.csv")).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownAnimal(AnimalKind::Cat)));
}

#[test]
fn missing_source_propagates_as_a_load_error() {
    let err = registry_for(AnimalKind::Dog, fixture("absent.csv")).unwrap_err();
    assert!(matches!(err, RegistryError::Load(_)));
}

#[test]
fn query_tracing_toggle_never_changes_results() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = dog_registry();

    set_query_tracing(true);
    let traced = registry.average_weight_per_breed();
    let traced_oldest = registry
        .oldest_after_date(date("04-02-2005"))
        .unwrap()
        .cloned();

    set_query_tracing(false);
    let silent = registry.average_weight_per_breed();
    let silent_oldest = registry
        .oldest_after_date(date("04-02-2005"))
        .unwrap()
        .cloned();
    set_query_tracing(true);

    assert_eq!(traced, silent);
    assert_eq!(traced_oldest, silent_oldest);
}
