use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use crate::data::loader;
use crate::error::RegistryError;
use crate::registry::DogRegistry;

// ---------------------------------------------------------------------------
// AnimalKind – which registry to build
// ---------------------------------------------------------------------------

/// Kinds of animal a registry can be requested for.
///
/// `Cat` is declared but has no registered constructor, so requesting it
/// exercises the unknown-kind error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnimalKind {
    Dog,
    Cat,
}

impl AnimalKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            AnimalKind::Dog => "dog",
            AnimalKind::Cat => "cat",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Registration table
// ---------------------------------------------------------------------------

/// Given a source path, build a fully loaded registry.
type Constructor = fn(&Path) -> Result<DogRegistry, RegistryError>;

/// Kind → constructor table, populated once at first use.
static CONSTRUCTORS: LazyLock<BTreeMap<AnimalKind, Constructor>> = LazyLock::new(|| {
    let mut table: BTreeMap<AnimalKind, Constructor> = BTreeMap::new();
    table.insert(AnimalKind::Dog, build_dog_registry);
    table
});

fn build_dog_registry(source: &Path) -> Result<DogRegistry, RegistryError> {
    let dogs = loader::load_file(source)?;
    log::debug!("loaded {} dogs from {}", dogs.len(), source.display());
    Ok(DogRegistry::new(dogs))
}

/// Build a registry for `kind` from the dataset at `source`.
///
/// Fails with [`RegistryError::UnknownAnimal`] when no constructor is
/// registered for `kind`, and with [`RegistryError::Load`] when the source
/// is missing or malformed; no partially constructed registry is ever
/// returned.
pub fn registry_for(
    kind: AnimalKind,
    source: impl AsRef<Path>,
) -> Result<DogRegistry, RegistryError> {
    match CONSTRUCTORS.get(&kind) {
        Some(construct) => construct(source.as_ref()),
        None => Err(RegistryError::UnknownAnimal(kind)),
    }
}
