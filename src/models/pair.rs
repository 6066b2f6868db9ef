// src/models/pair.rs
// DOCUMENTATION: Request/response DTOs for the closest-pair API
// PURPOSE: Input normalization and the outbound pair format shared by HTTP and console

use crate::errors::FinderError;
use crate::models::PairCandidate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

/// Category list as submitted by a client
/// DOCUMENTATION: Accepts a JSON array or a single comma-separated string (web form style)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryInput {
    List(Vec<String>),
    Csv(String),
}

impl CategoryInput {
    fn into_raw(self) -> Vec<String> {
        match self {
            CategoryInput::List(items) => items,
            CategoryInput::Csv(text) => text.split(',').map(str::to_string).collect(),
        }
    }
}

/// Request DTO for POST /pairs
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FindPairsRequest {
    /// Free-text region (e.g., "Kadiyam Mandal")
    #[validate(length(min = 1, max = 255))]
    pub region: String,

    /// Place categories to pair up (e.g., ["Sai Baba Temple", "Medical Store"])
    pub location_types: CategoryInput,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuery {
    pub region: String,
    pub categories: Vec<String>,
}

impl FindPairsRequest {
    /// Validate and normalize the request
    /// DOCUMENTATION: Trims the region and every category, drops empty entries,
    /// and enforces the minimum number of distinct categories
    pub fn into_query(self, min_categories: usize) -> Result<ValidatedQuery, FinderError> {
        if let Err(e) = self.validate() {
            return Err(FinderError::ValidationError(e.to_string()));
        }

        let region = self.region.trim().to_string();
        let categories = normalize_categories(self.location_types.into_raw());
        check_query(&region, &categories, min_categories)?;

        Ok(ValidatedQuery { region, categories })
    }
}

/// Trim each entry, discard empty ones and repeats, keeping first-occurrence order
pub fn normalize_categories<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

/// Reject an empty region or too few distinct categories
pub fn check_query(
    region: &str,
    categories: &[String],
    min_categories: usize,
) -> Result<(), FinderError> {
    if region.trim().is_empty() {
        return Err(FinderError::ValidationError(
            "Please enter a region.".to_string(),
        ));
    }

    let distinct: HashSet<&str> = categories.iter().map(String::as_str).collect();
    if distinct.len() < min_categories {
        return Err(FinderError::ValidationError(format!(
            "Please enter at least {} location types.",
            min_categories
        )));
    }

    Ok(())
}

/// Format meters as kilometers with 2 decimals (e.g., "1.23 km")
pub fn format_km(meters: u64) -> String {
    format!("{:.2} km", meters as f64 / 1000.0)
}

/// One side of a pair in API responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationResponse {
    /// Category that produced the place
    #[serde(rename = "type")]
    pub type_: String,
    pub name: String,
    /// Formatted address or "Address not available"
    pub address: String,
}

/// A ranked pair in API responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairResponse {
    pub location1: LocationResponse,
    pub location2: LocationResponse,
    /// Driving distance in meters
    pub distance: u64,
    /// Distance in kilometers, 2 decimals
    pub distance_text: String,
    /// Driving time, when the distance service reported it
    pub duration_text: Option<String>,
}

impl From<&PairCandidate> for PairResponse {
    fn from(pair: &PairCandidate) -> Self {
        let side = |place: &crate::models::Place| LocationResponse {
            type_: place.category.clone(),
            name: place.name.clone(),
            address: place.address().to_string(),
        };

        PairResponse {
            location1: side(&pair.place_a),
            location2: side(&pair.place_b),
            distance: pair.distance_meters,
            distance_text: format_km(pair.distance_meters),
            duration_text: pair.duration_text.clone(),
        }
    }
}

/// Response DTO for POST /pairs
#[derive(Debug, Serialize, Deserialize)]
pub struct FindPairsResponse {
    pub region: String,
    pub location_types: Vec<String>,
    pub pairs: Vec<PairResponse>,
}

impl FindPairsResponse {
    pub fn new(query: ValidatedQuery, pairs: &[PairCandidate]) -> Self {
        Self {
            region: query.region,
            location_types: query.categories,
            pairs: pairs.iter().map(PairResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Place;

    fn request(region: &str, types: CategoryInput) -> FindPairsRequest {
        FindPairsRequest {
            region: region.to_string(),
            location_types: types,
        }
    }

    #[test]
    fn test_normalize_categories() {
        let raw = vec!["  temple ", "", "   ", "pharmacy"];
        assert_eq!(normalize_categories(raw), vec!["temple", "pharmacy"]);
    }

    #[test]
    fn test_normalize_drops_repeated_categories() {
        let raw = vec!["bank", " bank ", "cafe", "bank", "gym", "cafe"];
        assert_eq!(normalize_categories(raw), vec!["bank", "cafe", "gym"]);
    }

    #[test]
    fn test_repeated_category_query() {
        let req = request(
            "Town",
            CategoryInput::List(vec!["bank".into(), "bank".into(), "cafe".into()]),
        );
        let query = req.into_query(2).unwrap();
        assert_eq!(query.categories, vec!["bank", "cafe"]);
    }

    #[test]
    fn test_csv_input() {
        let req = request(
            " Kadiyam Mandal ",
            CategoryInput::Csv("Sai Baba Temple, Medical Store ,,".to_string()),
        );
        let query = req.into_query(2).unwrap();
        assert_eq!(query.region, "Kadiyam Mandal");
        assert_eq!(query.categories, vec!["Sai Baba Temple", "Medical Store"]);
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let list: FindPairsRequest =
            serde_json::from_str(r#"{"region":"Madrid","location_types":["bar","cafe"]}"#)
                .unwrap();
        assert!(matches!(list.location_types, CategoryInput::List(ref v) if v.len() == 2));

        let csv: FindPairsRequest =
            serde_json::from_str(r#"{"region":"Madrid","location_types":"bar, cafe"}"#).unwrap();
        assert!(matches!(csv.location_types, CategoryInput::Csv(_)));
    }

    #[test]
    fn test_rejects_too_few_categories() {
        let req = request("Madrid", CategoryInput::List(vec!["bar".into(), " ".into()]));
        assert!(matches!(
            req.into_query(2),
            Err(FinderError::ValidationError(_))
        ));

        let dupes = request("Madrid", CategoryInput::List(vec!["bar".into(), "bar".into()]));
        assert!(dupes.into_query(2).is_err());
    }

    #[test]
    fn test_rejects_blank_region() {
        let empty = request("", CategoryInput::List(vec!["bar".into(), "cafe".into()]));
        assert!(empty.into_query(2).is_err());

        let blank = request("   ", CategoryInput::List(vec!["bar".into(), "cafe".into()]));
        assert!(blank.into_query(2).is_err());
    }

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(300), "0.30 km");
        assert_eq!(format_km(1234), "1.23 km");
        assert_eq!(format_km(0), "0.00 km");
    }

    #[test]
    fn test_pair_response_from_candidate() {
        let pair = PairCandidate {
            place_a: Place {
                name: "T2".to_string(),
                formatted_address: None,
                latitude: 1.0,
                longitude: 2.0,
                category: "temple".to_string(),
            },
            place_b: Place {
                name: "P1".to_string(),
                formatted_address: Some("Market St".to_string()),
                latitude: 1.1,
                longitude: 2.1,
                category: "pharmacy".to_string(),
            },
            distance_meters: 300,
            duration_seconds: Some(240),
            duration_text: Some("4 mins".to_string()),
        };

        let response = PairResponse::from(&pair);
        assert_eq!(response.location1.type_, "temple");
        assert_eq!(response.location1.address, "Address not available");
        assert_eq!(response.location2.address, "Market St");
        assert_eq!(response.distance_text, "0.30 km");
        assert_eq!(response.duration_text.as_deref(), Some("4 mins"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["location1"]["type"], "temple");
    }
}
