// src/services/maps_service.rs
// DOCUMENTATION: Port for the remote mapping service
// PURPOSE: The three remote operations the finder consumes, independent of any vendor

use crate::errors::FinderError;
use crate::models::{Coordinates, Place, RouteOutcome};
use async_trait::async_trait;

/// Remote mapping capabilities used by the resolver and the pair finder
/// DOCUMENTATION: GoogleMapsClient is the production implementation; any
/// service offering the same three operations can be substituted
#[async_trait]
pub trait MapsService: Send + Sync {
    /// Geocode free text into candidate coordinates, best match first
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, FinderError>;

    /// Search places matching `query` near `center`
    /// Returned places carry `query` as their category
    async fn place_search(
        &self,
        query: &str,
        center: Coordinates,
        region_hint: &str,
    ) -> Result<Vec<Place>, FinderError>;

    /// Driving distance between two points
    async fn driving_distance(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteOutcome, FinderError>;
}

#[cfg(test)]
pub mod fake {
    //! In-memory MapsService that serves canned data and records every call.

    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Geocode(String),
        PlaceSearch { query: String, center: Coordinates, region_hint: String },
        Distance(String, String),
    }

    #[derive(Default)]
    pub struct FakeMaps {
        pub geocode_results: Vec<Coordinates>,
        pub geocode_error: bool,
        pub places: HashMap<String, Vec<Place>>,
        pub search_error_for: Option<String>,
        /// Keyed by (origin name, destination name); missing pairs report NOT_FOUND
        pub distances: HashMap<(String, String), RouteOutcome>,
        /// Pairs for which the service itself errors
        pub distance_errors: Vec<(String, String)>,
        pub calls: Mutex<Vec<Call>>,
    }

    impl FakeMaps {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_center(mut self, lat: f64, lng: f64) -> Self {
            self.geocode_results.push(Coordinates::new(lat, lng));
            self
        }

        /// Places get distinct coordinates so distance lookups can map them back to names
        pub fn with_places(mut self, category: &str, names: &[&str]) -> Self {
            let offset: usize = self.places.values().map(Vec::len).sum();
            let places = names
                .iter()
                .enumerate()
                .map(|(i, name)| Place {
                    name: name.to_string(),
                    formatted_address: None,
                    latitude: 10.0 + (offset + i) as f64,
                    longitude: 20.0 + (offset + i) as f64,
                    category: category.to_string(),
                })
                .collect();
            self.places.insert(category.to_string(), places);
            self
        }

        pub fn with_distance(mut self, from: &str, to: &str, meters: u64) -> Self {
            self.distances.insert(
                (from.to_string(), to.to_string()),
                RouteOutcome::Route {
                    distance_meters: meters,
                    duration_seconds: Some(meters / 10),
                    duration_text: Some(format!("{} mins", meters / 600)),
                },
            );
            self
        }

        pub fn with_no_route(mut self, from: &str, to: &str) -> Self {
            self.distances.insert(
                (from.to_string(), to.to_string()),
                RouteOutcome::NoRoute {
                    status: "ZERO_RESULTS".to_string(),
                },
            );
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn distance_calls(&self) -> Vec<(String, String)> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    Call::Distance(a, b) => Some((a, b)),
                    _ => None,
                })
                .collect()
        }

        fn place_name_at(&self, point: Coordinates) -> String {
            self.places
                .values()
                .flatten()
                .find(|p| p.coordinates() == point)
                .map(|p| p.name.clone())
                .unwrap_or_default()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl MapsService for FakeMaps {
        async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, FinderError> {
            self.record(Call::Geocode(address.to_string()));
            if self.geocode_error {
                return Err(FinderError::ExternalApiError("geocoder down".to_string()));
            }
            Ok(self.geocode_results.clone())
        }

        async fn place_search(
            &self,
            query: &str,
            center: Coordinates,
            region_hint: &str,
        ) -> Result<Vec<Place>, FinderError> {
            self.record(Call::PlaceSearch {
                query: query.to_string(),
                center,
                region_hint: region_hint.to_string(),
            });
            if self.search_error_for.as_deref() == Some(query) {
                return Err(FinderError::RateLimitExceeded);
            }
            Ok(self.places.get(query).cloned().unwrap_or_default())
        }

        async fn driving_distance(
            &self,
            origin: Coordinates,
            destination: Coordinates,
        ) -> Result<RouteOutcome, FinderError> {
            let key = (self.place_name_at(origin), self.place_name_at(destination));
            self.record(Call::Distance(key.0.clone(), key.1.clone()));

            if self.distance_errors.contains(&key) {
                return Err(FinderError::ExternalApiError("matrix failed".to_string()));
            }

            Ok(self
                .distances
                .get(&key)
                .cloned()
                .unwrap_or(RouteOutcome::NoRoute {
                    status: "NOT_FOUND".to_string(),
                }))
        }
    }
}
