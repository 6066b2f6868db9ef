// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod env;

pub use env::{Config, DEFAULT_MAX_RESULTS, DEFAULT_MIN_CATEGORIES};
