// src/lib.rs
// DOCUMENTATION: Library root shared by the HTTP service and the console
// PURPOSE: Expose config, errors, models, services and handlers

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
