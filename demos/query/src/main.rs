//! transit-query: answer bus, stop, and route questions over a CSV network.
//!
//! ```text
//! transit-query --data demos/query/data --settings demos/query/data/settings.json \
//!     --bus 256 --stop Universam --from "Biryulyovo Zapadnoye" --to "Rossoshanskaya ulitsa"
//! ```
//!
//! Answers are printed to stdout as one JSON array, in the order bus, stop,
//! route.  Set `RUST_LOG=debug` to see load and build timings on stderr.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use serde_json::{Value, json};

use tr_catalogue::{TransportCatalogue, load_catalogue_dir};
use tr_core::RoutingSettings;
use tr_routing::{RouteResult, TransportRouter};

// ── Defaults ──────────────────────────────────────────────────────────────────

const DEFAULT_WAIT_MIN:     f64 = 6.0;
const DEFAULT_VELOCITY_KMH: f64 = 40.0;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "transit-query", version, about = "Fastest bus itineraries over a CSV transit network")]
struct Cli {
    /// Directory holding stops.csv, distances.csv, and buses.csv
    #[arg(long)]
    data: PathBuf,

    /// JSON routing settings: {"bus_wait_time": minutes, "bus_velocity": km/h}
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Override bus_wait_time (minutes)
    #[arg(long)]
    wait: Option<f64>,

    /// Override bus_velocity (km/h)
    #[arg(long)]
    velocity: Option<f64>,

    /// Report statistics for this bus (repeatable)
    #[arg(long)]
    bus: Vec<String>,

    /// Report the buses calling at this stop (repeatable)
    #[arg(long)]
    stop: Vec<String>,

    /// Origin stop of a route query
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Destination stop of a route query
    #[arg(long, requires = "from")]
    to: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let catalogue = load_catalogue_dir(&cli.data)
        .with_context(|| format!("loading catalogue from {}", cli.data.display()))?;
    info!(
        "loaded {} stops and {} buses from {}",
        catalogue.stop_count(),
        catalogue.bus_count(),
        cli.data.display()
    );

    let mut answers: Vec<Value> = Vec::new();
    answers.extend(cli.bus.iter().map(|name| bus_answer(&catalogue, name)));
    answers.extend(cli.stop.iter().map(|name| stop_answer(&catalogue, name)));

    if let (Some(from), Some(to)) = (&cli.from, &cli.to) {
        let settings = resolve_settings(&cli)?;
        let started = Instant::now();
        let router = TransportRouter::new(&catalogue, settings).context("building router")?;
        info!("router built in {:.3} s", started.elapsed().as_secs_f64());
        answers.push(route_answer(&router, from, to));
    }

    println!("{}", serde_json::to_string_pretty(&answers)?);
    Ok(())
}

// ── Settings ──────────────────────────────────────────────────────────────────

fn resolve_settings(cli: &Cli) -> Result<RoutingSettings> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<RoutingSettings>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => RoutingSettings::new(DEFAULT_WAIT_MIN, DEFAULT_VELOCITY_KMH),
    };
    if let Some(wait) = cli.wait {
        settings.bus_wait_time = wait;
    }
    if let Some(velocity) = cli.velocity {
        settings.bus_velocity = velocity;
    }
    settings.validate()?;
    Ok(settings)
}

// ── Answers ───────────────────────────────────────────────────────────────────

fn not_found(kind: &str, name: &str) -> Value {
    json!({ "type": kind, "name": name, "error_message": "not found" })
}

fn bus_answer(catalogue: &TransportCatalogue, name: &str) -> Value {
    match catalogue.bus_stats(name) {
        Some(stats) => json!({ "type": "Bus", "name": name, "stats": stats }),
        None => not_found("Bus", name),
    }
}

fn stop_answer(catalogue: &TransportCatalogue, name: &str) -> Value {
    match catalogue.stop_buses(name) {
        Some(buses) => json!({ "type": "Stop", "name": name, "buses": buses }),
        None => not_found("Stop", name),
    }
}

fn route_answer(router: &TransportRouter, from: &str, to: &str) -> Value {
    match router.route(from, to) {
        RouteResult::Found(itinerary) => json!({
            "type": "Route",
            "from": from,
            "to": to,
            "total_time": itinerary.total_time,
            "items": itinerary.items,
        }),
        RouteResult::NotFound => json!({
            "type": "Route",
            "from": from,
            "to": to,
            "error_message": "not found",
        }),
    }
}
