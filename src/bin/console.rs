// src/bin/console.rs
// DOCUMENTATION: Interactive terminal front-end
// PURPOSE: Prompt for a region and categories, then print the closest pairs

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use location_finder::config::Config;
use location_finder::models::{check_query, format_km, normalize_categories, PairCandidate};
use location_finder::services::{GoogleMapsClient, PairFinder};
use std::io::{self, BufRead, Write};

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Read category lines until a blank line or end of input
fn read_categories(input: &mut impl BufRead) -> Result<Vec<String>> {
    let mut raw = Vec::new();
    while let Some(line) = prompt(input, "Enter location type (or press Enter to finish): ")? {
        if line.is_empty() {
            break;
        }
        raw.push(line);
    }
    Ok(normalize_categories(raw))
}

fn render_pairs(pairs: &[PairCandidate]) -> String {
    if pairs.is_empty() {
        return "No results found!\n".to_string();
    }

    let mut out = String::new();
    for (i, pair) in pairs.iter().enumerate() {
        out.push_str(&format!("\n{}Pair {}:{}\n", BOLD, i + 1, RESET));
        out.push_str(&format!("{}: {}\n", pair.place_a.category, pair.place_a.name));
        out.push_str(&format!("Address: {}\n", pair.place_a.address()));
        out.push_str(&format!("\n{}: {}\n", pair.place_b.category, pair.place_b.name));
        out.push_str(&format!("Address: {}\n", pair.place_b.address()));
        out.push_str(&format!(
            "Distance: {}{}{}\n",
            GREEN,
            format_km(pair.distance_meters),
            RESET
        ));
        if let Some(duration) = &pair.duration_text {
            out.push_str(&format!("Driving time: {}\n", duration));
        }
    }
    out
}

/// Default log filter when RUST_LOG is unset, seeded from LOG_LEVEL
fn log_filter(config: &Config) -> String {
    if config.log_level.trim().is_empty() {
        "info".to_string()
    } else {
        config.log_level.trim().to_string()
    }
}

async fn run(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n{}=== Location Finder ==={}", CYAN, RESET);
    let region = prompt(&mut input, "\nEnter the region (e.g., 'Kadiyam Mandal'): ")?
        .unwrap_or_default();

    println!("\nEnter location types (e.g., 'Sai Baba Temple', 'Medical Store')");
    println!("Press Enter twice when done");
    let categories = read_categories(&mut input)?;

    if let Err(e) = check_query(&region, &categories, config.min_categories) {
        bail!("{}", e);
    }

    println!("\n{}Searching for closest locations...{}", YELLOW, RESET);
    let maps = GoogleMapsClient::from_config(config);
    let finder = PairFinder::new(&maps, config.finder_options());
    let pairs = finder
        .find_closest(&region, &categories)
        .await
        .context("An error occurred")?;

    println!("\n{}=== Results ==={}", CYAN, RESET);
    print!("{}", render_pairs(&pairs));
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::from_env();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", log_filter(&config));
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        println!("{}Error: {}{}", RED, e, RESET);
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        println!("{}Error: {:#}{}", RED, e, RESET);
        std::process::exit(1);
    }
}
