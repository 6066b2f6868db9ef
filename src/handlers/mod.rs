// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod pairs;

pub use health::config as health_config;
pub use pairs::config as pairs_config;
