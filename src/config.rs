use std::collections::BTreeMap;

use log::LevelFilter;

use crate::data::model::Breed;

// ---------------------------------------------------------------------------
// Date-pattern configuration
// ---------------------------------------------------------------------------

/// Pattern used for `date_of_birth` unless a breed override is set:
/// day-month-year, e.g. `"05-02-2005"`.
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Date-pattern configuration carried by a registry.
///
/// One default pattern (chrono strftime syntax) applies to every breed; a
/// per-breed override map can point individual breeds at a different
/// pattern. Changing either after construction changes parsing for all
/// subsequent date queries; records are never parsed ahead of time.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    default_format: String,
    overrides: BTreeMap<Breed, String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_format: DEFAULT_DATE_FORMAT.to_string(),
            overrides: BTreeMap::new(),
        }
    }
}

impl RegistryConfig {
    /// The pattern records of `breed` are parsed with.
    pub fn format_for(&self, breed: Breed) -> &str {
        self.overrides
            .get(&breed)
            .map(String::as_str)
            .unwrap_or(&self.default_format)
    }

    /// The default pattern (ignoring overrides).
    pub fn date_format(&self) -> &str {
        &self.default_format
    }

    /// Replace the default pattern for all breeds without an override.
    pub fn set_date_format(&mut self, format: impl Into<String>) {
        self.default_format = format.into();
    }

    /// Pin a single breed to its own pattern.
    pub fn set_breed_format(&mut self, breed: Breed, format: impl Into<String>) {
        self.overrides.insert(breed, format.into());
    }

    /// Drop a breed override, falling back to the default pattern.
    pub fn clear_breed_format(&mut self, breed: Breed) {
        self.overrides.remove(&breed);
    }
}

// ---------------------------------------------------------------------------
// Query tracing toggle
// ---------------------------------------------------------------------------

/// Process-wide toggle for the per-query trace lines.
///
/// Tracing rides on the `log` facade (install a logger such as `env_logger`
/// to see the output). Toggling only moves the facade's max level; it never
/// changes what any query returns.
pub fn set_query_tracing(enabled: bool) {
    if enabled {
        log::set_max_level(LevelFilter::Debug);
        log::debug!("query tracing enabled");
    } else {
        log::debug!("query tracing disabled");
        log::set_max_level(LevelFilter::Off);
    }
}
