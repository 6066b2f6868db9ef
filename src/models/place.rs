// src/models/place.rs
// DOCUMENTATION: Core data structures for places and pairs
// PURPOSE: Domain types shared by the resolver, the pair finder and the presentation shells

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown in place of a missing formatted address
pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// The (0, 0) point used when a region cannot be resolved
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Renders as "lat,lng", the form Google accepts for location parameters
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A place returned by a category search
/// DOCUMENTATION: Immutable once fetched, lives for a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name
    pub name: String,

    /// Full address, when the search returned one
    pub formatted_address: Option<String>,

    pub latitude: f64,

    pub longitude: f64,

    /// The search term (category) that produced this place
    pub category: String,
}

impl Place {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Address for display, falling back to the sentinel text
    pub fn address(&self) -> &str {
        self.formatted_address
            .as_deref()
            .unwrap_or(ADDRESS_NOT_AVAILABLE)
    }
}

/// Places found for one category, in the order the search returned them
#[derive(Debug, Clone)]
pub struct CategoryResults {
    pub category: String,
    pub places: Vec<Place>,
}

/// Outcome of geocoding a free-text region
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// First geocode candidate
    Resolved(Coordinates),
    /// Geocoder returned no candidates
    Unresolved,
}

impl Resolution {
    /// Coordinates of the region, or the origin when unresolved
    pub fn center_or_origin(&self) -> Coordinates {
        match self {
            Resolution::Resolved(center) => *center,
            Resolution::Unresolved => Coordinates::origin(),
        }
    }
}

/// How the finder treats a region that geocodes to nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedRegionPolicy {
    /// Search around (0, 0) and carry on
    #[default]
    Origin,
    /// Fail the request with RegionNotFound
    Reject,
}

impl FromStr for UnresolvedRegionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "origin" | "fallback" => Ok(UnresolvedRegionPolicy::Origin),
            "reject" | "fail" => Ok(UnresolvedRegionPolicy::Reject),
            other => Err(format!("unknown unresolved region policy: {}", other)),
        }
    }
}

/// Result of a single driving distance query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Route {
        distance_meters: u64,
        duration_seconds: Option<u64>,
        /// Google's own rendering of the duration (e.g., "7 mins")
        duration_text: Option<String>,
    },
    /// Element status other than OK (NOT_FOUND, ZERO_RESULTS, ...)
    NoRoute { status: String },
}

/// Two places from different categories and the driving distance between them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairCandidate {
    pub place_a: Place,
    pub place_b: Place,
    pub distance_meters: u64,
    pub duration_seconds: Option<u64>,
    pub duration_text: Option<String>,
}
