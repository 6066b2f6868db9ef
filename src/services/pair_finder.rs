// src/services/pair_finder.rs
// DOCUMENTATION: Closest cross-category pair search
// PURPOSE: Fetch places per category, measure driving distance across categories, rank

use crate::config::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_CATEGORIES};
use crate::errors::FinderError;
use crate::models::{
    CategoryResults, Coordinates, PairCandidate, Resolution, RouteOutcome, UnresolvedRegionPolicy,
};
use crate::services::{MapsService, RegionResolver};
use std::collections::HashSet;

/// Tuning for a pair search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinderOptions {
    /// Number of closest pairs returned
    pub max_results: usize,
    /// Below this many distinct categories the search returns nothing
    pub min_categories: usize,
    /// Handling of regions the geocoder cannot place
    pub unresolved_region: UnresolvedRegionPolicy,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_categories: DEFAULT_MIN_CATEGORIES,
            unresolved_region: UnresolvedRegionPolicy::default(),
        }
    }
}

/// All category index pairs (i, j) with i < j, in list order
/// DOCUMENTATION: Same-category and mirrored pairs can never appear
pub fn category_pairs(count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .flat_map(|i| (i + 1..count).map(move |j| (i, j)))
        .collect()
}

/// Drop repeated categories, keeping the first occurrence of each
pub fn distinct_categories(categories: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .filter(|c| seen.insert(c.as_str()))
        .cloned()
        .collect()
}

/// Sort ascending by distance and keep the first `max_results`
/// Equal distances keep their discovery order
pub fn rank_candidates(mut candidates: Vec<PairCandidate>, max_results: usize) -> Vec<PairCandidate> {
    candidates.sort_by_key(|c| c.distance_meters);
    candidates.truncate(max_results);
    candidates
}

/// Closest-pair finder
/// DOCUMENTATION: All remote calls are awaited one after another
pub struct PairFinder<'a> {
    maps: &'a dyn MapsService,
    options: FinderOptions,
}

impl<'a> PairFinder<'a> {
    pub fn new(maps: &'a dyn MapsService, options: FinderOptions) -> Self {
        Self { maps, options }
    }

    /// Find the closest pairs of places across different categories
    ///
    /// Process:
    /// 1. Resolve the region to a center coordinate
    /// 2. Search places for each category near that center
    /// 3. Query driving distance for every cross-category place pair
    /// 4. Rank by distance and truncate
    ///
    /// # Returns
    /// Up to `max_results` pairs, closest first. Too few categories yields
    /// an empty list without touching the remote service.
    pub async fn find_closest(
        &self,
        region: &str,
        categories: &[String],
    ) -> Result<Vec<PairCandidate>, FinderError> {
        let categories = distinct_categories(categories);
        if categories.len() < self.options.min_categories {
            log::warn!(
                "Pair search needs at least {} categories, got {}",
                self.options.min_categories,
                categories.len()
            );
            return Ok(Vec::new());
        }

        let center = match RegionResolver::resolve(self.maps, region).await? {
            Resolution::Resolved(center) => center,
            Resolution::Unresolved => match self.options.unresolved_region {
                UnresolvedRegionPolicy::Origin => {
                    log::warn!("Region {} not found, searching around (0, 0)", region);
                    Coordinates::origin()
                }
                UnresolvedRegionPolicy::Reject => {
                    return Err(FinderError::RegionNotFound(region.to_string()));
                }
            },
        };

        let results = self.fetch_categories(center, region, &categories).await?;
        let candidates = self.measure_pairs(&results).await;

        Ok(rank_candidates(candidates, self.options.max_results))
    }

    /// One place search per category, in order
    /// Any search failure aborts the request
    pub async fn fetch_categories(
        &self,
        center: Coordinates,
        region: &str,
        categories: &[String],
    ) -> Result<Vec<CategoryResults>, FinderError> {
        let mut results = Vec::with_capacity(categories.len());

        for category in categories {
            log::info!("Searching for {}...", category);
            let places = self.maps.place_search(category, center, region).await?;
            results.push(CategoryResults {
                category: category.clone(),
                places,
            });
        }

        Ok(results)
    }

    /// Driving distance for every place pair across distinct categories
    /// Failed or unroutable lookups are dropped
    pub async fn measure_pairs(&self, results: &[CategoryResults]) -> Vec<PairCandidate> {
        let mut candidates = Vec::new();
        let mut queries = 0usize;

        for (i, j) in category_pairs(results.len()) {
            if results[i].category == results[j].category {
                continue;
            }
            for place_a in &results[i].places {
                for place_b in &results[j].places {
                    queries += 1;
                    let outcome = self
                        .maps
                        .driving_distance(place_a.coordinates(), place_b.coordinates())
                        .await;

                    match outcome {
                        Ok(RouteOutcome::Route {
                            distance_meters,
                            duration_seconds,
                            duration_text,
                        }) => candidates.push(PairCandidate {
                            place_a: place_a.clone(),
                            place_b: place_b.clone(),
                            distance_meters,
                            duration_seconds,
                            duration_text,
                        }),
                        Ok(RouteOutcome::NoRoute { status }) => {
                            log::debug!(
                                "No route between {} and {}: {}",
                                place_a.name,
                                place_b.name,
                                status
                            );
                        }
                        Err(e) => {
                            log::debug!(
                                "Distance lookup failed for {} -> {}: {}",
                                place_a.name,
                                place_b.name,
                                e
                            );
                        }
                    }
                }
            }
        }

        log::info!(
            "Measured {} place pairs, {} with a driving route",
            queries,
            candidates.len()
        );
        candidates
    }
}
