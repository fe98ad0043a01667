pub mod aqi;
pub mod cache;
pub mod config;
pub mod prefs;
pub mod routes;
pub mod upstream;
