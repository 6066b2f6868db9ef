// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod google_maps_client;
pub mod maps_service;
pub mod pair_finder;
pub mod region_resolver;

pub use google_maps_client::*;
pub use maps_service::*;
pub use pair_finder::*;
pub use region_resolver::*;
