//! Data shapes for the client's persisted UI preferences.
//!
//! The preference store itself lives client-side under the fixed key below;
//! the server only publishes the contract. Theme and favorites persist
//! across sessions, the compare list and selected city do not.

use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "airwatch-storage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteCity {
    pub uid: i64,
    pub name: String,
    pub country: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPreferences {
    pub theme: Theme,
    #[serde(default)]
    pub favorites: Vec<FavoriteCity>,
}

impl Default for StoredPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            favorites: Vec::new(),
        }
    }
}
