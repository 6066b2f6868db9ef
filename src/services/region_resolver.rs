// src/services/region_resolver.rs
// DOCUMENTATION: Region name to coordinate resolution
// PURPOSE: One geocoding call per request, first candidate wins

use crate::errors::FinderError;
use crate::models::{Coordinates, Resolution};
use crate::services::MapsService;

pub struct RegionResolver;

impl RegionResolver {
    /// Resolve a free-text region to the first geocode candidate
    /// DOCUMENTATION: Zero candidates yields Resolution::Unresolved; the caller
    /// decides whether that is fatal. Service errors propagate unchanged.
    pub async fn resolve(
        maps: &dyn MapsService,
        region: &str,
    ) -> Result<Resolution, FinderError> {
        let candidates = maps.geocode(region).await?;

        match candidates.first() {
            Some(center) => {
                log::debug!("Resolved region {} to {}", region, center);
                Ok(Resolution::Resolved(*center))
            }
            None => {
                log::debug!("Region {} returned no geocode candidates", region);
                Ok(Resolution::Unresolved)
            }
        }
    }

    /// Resolve a region to its center, using (0, 0) when nothing matches
    pub async fn resolve_center(
        maps: &dyn MapsService,
        region: &str,
    ) -> Result<Coordinates, FinderError> {
        Ok(Self::resolve(maps, region).await?.center_or_origin())
    }
}
