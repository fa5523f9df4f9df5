use thiserror::Error;

use crate::factory::AnimalKind;

// ---------------------------------------------------------------------------
// RegistryError – everything this library can fail with
// ---------------------------------------------------------------------------

/// Errors raised by the registry library. None of these are retried or
/// swallowed; each surfaces synchronously from the call that triggered it.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No constructor is registered for the requested animal kind.
    #[error("no registry available for animal kind: {0}")]
    UnknownAnimal(AnimalKind),

    /// Source file missing or structurally invalid. Transparent so the
    /// loader's context chain reaches the caller unmodified.
    #[error(transparent)]
    Load(#[from] anyhow::Error),

    /// A record's date of birth does not match the configured pattern.
    /// Raised by date queries at the first record they fail to parse; the
    /// query aborts rather than skipping the record.
    #[error("'{value}' (date of birth of {name}) does not match pattern '{format}'")]
    DateParse {
        name: String,
        value: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },
}
