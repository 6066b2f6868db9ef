// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod pair;
pub mod place;

pub use pair::*;
pub use place::*;
