// src/handlers/pairs.rs
// DOCUMENTATION: HTTP handler for closest-pair searches
// PURPOSE: Parse requests, validate before any remote call, run the finder, return JSON

use crate::config::Config;
use crate::errors::FinderError;
use crate::models::{FindPairsRequest, FindPairsResponse};
use crate::services::{MapsService, PairFinder};
use actix_web::{web, HttpResponse, Responder};

/// POST /pairs
/// Find the closest pairs of places across the requested categories
pub async fn find_pairs(
    config: web::Data<Config>,
    maps: web::Data<dyn MapsService>,
    req: web::Json<FindPairsRequest>,
) -> Result<impl Responder, FinderError> {
    let query = req.into_inner().into_query(config.min_categories)?;

    log::info!(
        "Pair search for {} across {} categories",
        query.region,
        query.categories.len()
    );

    let finder = PairFinder::new(maps.get_ref(), config.finder_options());
    let pairs = finder.find_closest(&query.region, &query.categories).await?;

    Ok(HttpResponse::Ok().json(FindPairsResponse::new(query, &pairs)))
}

/// Configuration for pair routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/pairs", web::post().to(find_pairs));
}
