use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Breed – the closed set of breeds the registry knows about
// ---------------------------------------------------------------------------

/// A dog breed. The set is closed: a dataset referencing anything else fails
/// at load time. Per-breed results live in `BTreeMap`s keyed by `Breed`, so
/// the `Ord` derive (declaration order) is what keeps them in declaration
/// order.
///
/// Serialization uses the canonical display string, which is also what the
/// source files contain (e.g. `"Rhodesian Ridgeback"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Breed {
    #[serde(rename = "Rhodesian Ridgeback")]
    RhodesianRidgeback,
    #[serde(rename = "Bernese Mountain Dog")]
    BerneseMountainDog,
    #[serde(rename = "Shiba Inu")]
    ShibaInu,
    #[serde(rename = "German Shepherd")]
    GermanShepherd,
    #[serde(rename = "Labrador Retriever")]
    LabradorRetriever,
    #[serde(rename = "Greyhound")]
    Greyhound,
    #[serde(rename = "Siberian Husky")]
    SiberianHusky,
    #[serde(rename = "Japanese Spitz")]
    JapaneseSpitz,
    #[serde(rename = "Bohemian Wirehaired Pointing Griffon")]
    BohemianWirehairedPointingGriffon,
}

impl Breed {
    /// All breeds in declaration order.
    pub const ALL: [Breed; 9] = [
        Breed::RhodesianRidgeback,
        Breed::BerneseMountainDog,
        Breed::ShibaInu,
        Breed::GermanShepherd,
        Breed::LabradorRetriever,
        Breed::Greyhound,
        Breed::SiberianHusky,
        Breed::JapaneseSpitz,
        Breed::BohemianWirehairedPointingGriffon,
    ];

    /// Canonical display string, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Breed::RhodesianRidgeback => "Rhodesian Ridgeback",
            Breed::BerneseMountainDog => "Bernese Mountain Dog",
            Breed::ShibaInu => "Shiba Inu",
            Breed::GermanShepherd => "German Shepherd",
            Breed::LabradorRetriever => "Labrador Retriever",
            Breed::Greyhound => "Greyhound",
            Breed::SiberianHusky => "Siberian Husky",
            Breed::JapaneseSpitz => "Japanese Spitz",
            Breed::BohemianWirehairedPointingGriffon => "Bohemian Wirehaired Pointing Griffon",
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dog – one row of the source dataset
// ---------------------------------------------------------------------------

/// A single dog record (one row of the source file).
///
/// `date_of_birth` stays as the raw text from the file; it is parsed against
/// the configured pattern only when a date query touches it, so a malformed
/// value fails that query rather than the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    /// Call name; not required to be unique.
    pub name: String,
    pub breed: Breed,
    /// Weight in kilograms. The loader rejects negative values.
    pub weight: f64,
    /// Raw date-of-birth text, e.g. `"05-02-2005"` under the default pattern.
    pub date_of_birth: String,
}
