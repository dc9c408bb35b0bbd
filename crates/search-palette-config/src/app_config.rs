//! Application configuration
//!
//! Configuration loaded from .trek-finder.toml file.

use search_palette::{Catalog, PaletteOptions, DEFAULT_HISTORY_KEY};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from .trek-finder.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Searchable destinations and pages, in display order
    #[serde(default = "default_destinations")]
    pub destinations: Vec<String>,

    /// Destinations suggested while the query is empty
    #[serde(default = "default_featured")]
    pub featured: Vec<String>,

    /// Storage key of the recent history
    #[serde(default = "default_history_key")]
    pub history_key: String,

    /// Keep the typed query when the palette is dismissed by clicking outside
    #[serde(default)]
    pub preserve_query_on_outside_click: bool,

    /// Delay before a typed query is matched, 0 matches on every keystroke
    #[serde(default)]
    pub debounce_ms: u64,

    /// Placeholder shown in the empty search field
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_destinations() -> Vec<String> {
    [
        "Home",
        "About Us",
        "Services",
        "Contact",
        "Blog",
        "Careers",
        "Pricing",
        "FAQ",
        "Kathmandu Valley",
        "Annapurna Trek",
        "Mount Everest",
        "Langtang Region",
        "Mustang Expedition",
        "Chitwan National Park",
        "Lumbini",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_featured() -> Vec<String> {
    vec!["Illam".to_string(), "Everest Base Camp".to_string()]
}

fn default_history_key() -> String {
    DEFAULT_HISTORY_KEY.to_string()
}

fn default_placeholder() -> String {
    "Search treks, peaks, or guides...".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            destinations: default_destinations(),
            featured: default_featured(),
            history_key: default_history_key(),
            preserve_query_on_outside_click: false,
            debounce_ms: 0,
            placeholder: default_placeholder(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Candidate catalog described by this configuration
    pub fn catalog(&self) -> Catalog {
        Catalog::from_labels(self.destinations.iter().cloned(), self.featured.iter().cloned())
    }

    pub fn palette_options(&self) -> PaletteOptions {
        PaletteOptions {
            preserve_query_on_outside_click: self.preserve_query_on_outside_click,
        }
    }
}
