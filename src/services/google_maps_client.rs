// src/services/google_maps_client.rs
// DOCUMENTATION: Google Maps Platform client
// PURPOSE: Geocoding, Places Text Search and Distance Matrix calls behind MapsService

use crate::config::Config;
use crate::errors::FinderError;
use crate::models::{Coordinates, Place, RouteOutcome};
use crate::services::MapsService;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Google Maps API client
/// DOCUMENTATION: Holds the API key and a shared HTTP client; built once at startup
pub struct GoogleMapsClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps Platform API key
    api_key: String,
    /// Base URL for the web services (e.g., https://maps.googleapis.com/maps/api)
    base_url: String,
}

/// Fields every Google web service response carries
trait StatusResponse {
    fn status(&self) -> &str;
    fn error_message(&self) -> Option<&str>;
}

/// Response from the Geocoding API
#[derive(Debug, Deserialize, Serialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub status: String,
    pub error_message: Option<String>,
}

/// Single geocoding candidate
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeResult {
    pub formatted_address: Option<String>,
    pub geometry: GoogleGeometry,
}

/// Response from Places Text Search
#[derive(Debug, Deserialize, Serialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub results: Vec<GooglePlace>,
    pub status: String,
    /// Next page token (ignored, only the first page is used)
    pub next_page_token: Option<String>,
    pub error_message: Option<String>,
}

/// Individual place from Places Text Search
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GooglePlace {
    pub name: String,
    pub geometry: GoogleGeometry,
    pub formatted_address: Option<String>,
    pub place_id: Option<String>,
}

/// Geographic location from Google
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleGeometry {
    pub location: GoogleLocation,
}

/// Coordinates from Google
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleLocation {
    pub lat: f64,
    pub lng: f64,
}

/// Response from the Distance Matrix API
#[derive(Debug, Deserialize, Serialize)]
pub struct DistanceMatrixResponse {
    #[serde(default)]
    pub rows: Vec<DistanceMatrixRow>,
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DistanceMatrixRow {
    #[serde(default)]
    pub elements: Vec<DistanceMatrixElement>,
}

/// One origin/destination cell of the matrix
#[derive(Debug, Deserialize, Serialize)]
pub struct DistanceMatrixElement {
    pub status: String,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
}

/// Google's { "text": "1.2 km", "value": 1234 } pairs
#[derive(Debug, Deserialize, Serialize)]
pub struct TextValue {
    pub text: String,
    pub value: u64,
}

macro_rules! impl_status_response {
    ($($ty:ty),*) => {
        $(impl StatusResponse for $ty {
            fn status(&self) -> &str {
                &self.status
            }

            fn error_message(&self) -> Option<&str> {
                self.error_message.as_deref()
            }
        })*
    };
}

impl_status_response!(GeocodeResponse, TextSearchResponse, DistanceMatrixResponse);

impl GoogleMapsClient {
    /// Create client against a specific base URL with a request timeout
    pub fn with_base_url(api_key: String, base_url: String, timeout: Duration) -> Self {
        let mut builder = Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().unwrap_or_else(|e| {
            log::warn!("Falling back to default HTTP client: {}", e);
            Client::new()
        });

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build client from application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(
            config.google_maps_api_key.clone(),
            config.maps_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Issue a GET against a Maps web service and decode the JSON body
    /// DOCUMENTATION: Transport and HTTP-level failures become ExternalApiError;
    /// API-level status is checked by the caller via check_status
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, FinderError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Maps request to {} failed: {}", endpoint, e);
                FinderError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Google Maps API error {} on {}: {}", status, endpoint, body);
            return Err(FinderError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            log::error!("Failed to parse Google Maps response from {}: {}", endpoint, e);
            FinderError::ExternalApiError(format!("Parse error: {}", e))
        })
    }
}

/// Map a top-level API status to success or a FinderError
/// DOCUMENTATION: OK and ZERO_RESULTS are both successful (possibly empty) answers
fn check_status<R: StatusResponse>(api: &str, response: &R) -> Result<(), FinderError> {
    match response.status() {
        "OK" | "ZERO_RESULTS" => Ok(()),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => {
            log::error!("Google {} API quota exceeded", api);
            Err(FinderError::RateLimitExceeded)
        }
        "REQUEST_DENIED" | "INVALID_REQUEST" => {
            let msg = response
                .error_message()
                .unwrap_or("Unknown error")
                .to_string();
            log::error!("Google {} API request denied: {}", api, msg);
            Err(FinderError::ExternalApiError(msg))
        }
        other => {
            let msg = response
                .error_message()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Unknown status: {}", other));
            log::error!("Google {} API unexpected status: {}", api, msg);
            Err(FinderError::ExternalApiError(msg))
        }
    }
}

fn geocode_candidates(response: GeocodeResponse) -> Result<Vec<Coordinates>, FinderError> {
    check_status("Geocoding", &response)?;
    Ok(response
        .results
        .into_iter()
        .map(|r| Coordinates::new(r.geometry.location.lat, r.geometry.location.lng))
        .collect())
}

fn search_places(response: TextSearchResponse, category: &str) -> Result<Vec<Place>, FinderError> {
    check_status("Places", &response)?;
    Ok(response
        .results
        .into_iter()
        .map(|p| Place {
            name: p.name,
            formatted_address: p.formatted_address,
            latitude: p.geometry.location.lat,
            longitude: p.geometry.location.lng,
            category: category.to_string(),
        })
        .collect())
}

/// Read the single origin/destination element of a 1x1 matrix
fn route_outcome(response: DistanceMatrixResponse) -> Result<RouteOutcome, FinderError> {
    check_status("Distance Matrix", &response)?;

    let element = response
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next());

    let Some(element) = element else {
        return Ok(RouteOutcome::NoRoute {
            status: "EMPTY_MATRIX".to_string(),
        });
    };

    match (element.status.as_str(), element.distance) {
        ("OK", Some(distance)) => {
            let (duration_seconds, duration_text) = match element.duration {
                Some(d) => (Some(d.value), Some(d.text)),
                None => (None, None),
            };
            Ok(RouteOutcome::Route {
                distance_meters: distance.value,
                duration_seconds,
                duration_text,
            })
        }
        (status, _) => Ok(RouteOutcome::NoRoute {
            status: status.to_string(),
        }),
    }
}

#[async_trait]
impl MapsService for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, FinderError> {
        log::debug!("Google geocode lookup: address={}", address);

        let response: GeocodeResponse = self
            .get_json("geocode/json", &[("address", address.to_string())])
            .await?;

        let candidates = geocode_candidates(response)?;
        log::debug!("Geocode returned {} candidates for {}", candidates.len(), address);
        Ok(candidates)
    }

    async fn place_search(
        &self,
        query: &str,
        center: Coordinates,
        region_hint: &str,
    ) -> Result<Vec<Place>, FinderError> {
        log::debug!(
            "Google Places text search: query={}, location={}, region={}",
            query,
            center,
            region_hint
        );

        let response: TextSearchResponse = self
            .get_json(
                "place/textsearch/json",
                &[
                    ("query", query.to_string()),
                    ("location", center.to_string()),
                    ("region", region_hint.to_string()),
                ],
            )
            .await?;

        let places = search_places(response, query)?;
        log::info!("Google Places search for {} returned {} results", query, places.len());
        Ok(places)
    }

    async fn driving_distance(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteOutcome, FinderError> {
        let response: DistanceMatrixResponse = self
            .get_json(
                "distancematrix/json",
                &[
                    ("origins", origin.to_string()),
                    ("destinations", destination.to_string()),
                    ("mode", "driving".to_string()),
                ],
            )
            .await?;

        route_outcome(response)
    }
}
