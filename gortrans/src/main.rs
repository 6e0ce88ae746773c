use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gortrans::domain::{RouteLocator, TimetableLocator, VehicleType};
use gortrans::site::{ClientConfig, Gortrans, GortransClient};

#[derive(Parser, Debug)]
#[command(name = "gortrans")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Perm public transport routes, stops and timetables")]
#[command(after_help = "Environment:\n  \
    GORTRANS_BASE_URL       Site root (default https://www.m.gortransperm.ru)\n  \
    GORTRANS_TIMEOUT_SECS   Request timeout in seconds (default 30)\n  \
    RUST_LOG                Log filter (default gortrans=info)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Search routes by number, e.g. 80 or 7т
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List every route of one vehicle type
    Routes {
        /// bus, trolleybus, tram or taxi
        #[arg(value_parser = clap::value_parser!(VehicleType))]
        vehicle_type: VehicleType,
    },

    /// Directions and stops of a route, e.g. /route/80/
    Stops { route: String },

    /// Scheduled times at a stop, e.g. /time-table/80/1701
    Timetable {
        stop: String,

        /// Date to attach to each time, YYYY-MM-DD (default today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
}

#[derive(Serialize)]
struct Arrival {
    time: String,
    at: String,
}

#[tokio::main]
async fn main() {
    // Usage errors exit with status 2, help and version with 0.
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gortrans=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let site = match Gortrans::<GortransClient>::connect(config_from_env()) {
        Ok(site) => site,
        Err(e) => {
            eprintln!("Failed to create client: {e}");
            std::process::exit(1);
        }
    };

    match run(&site, cli.command).await {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(
    site: &Gortrans<GortransClient>,
    command: Command,
) -> Result<String, Box<dyn std::error::Error>> {
    let json = match command {
        Command::Search { query } => {
            serde_json::to_string_pretty(&site.search(&query.join(" ")).await?)?
        }
        Command::Routes { vehicle_type } => {
            serde_json::to_string_pretty(&site.all_routes(vehicle_type).await?)?
        }
        Command::Stops { route } => {
            serde_json::to_string_pretty(&site.directions(&RouteLocator::new(route)).await?)?
        }
        Command::Timetable { stop, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let arrivals: Vec<Arrival> = site
                .timetable(&TimetableLocator::new(stop))
                .await?
                .into_iter()
                .map(|t| Arrival {
                    time: t.to_string(),
                    at: t.on(date).format("%Y-%m-%dT%H:%M:%S").to_string(),
                })
                .collect();
            serde_json::to_string_pretty(&arrivals)?
        }
    };
    Ok(json)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn config_from_env() -> ClientConfig {
    let mut config = ClientConfig::new();
    if let Ok(url) = std::env::var("GORTRANS_BASE_URL") {
        config = config.with_base_url(url);
    }
    if let Ok(secs) = std::env::var("GORTRANS_TIMEOUT_SECS") {
        match secs.parse() {
            Ok(secs) => config = config.with_timeout(secs),
            Err(_) => eprintln!("Warning: ignoring invalid GORTRANS_TIMEOUT_SECS={secs:?}"),
        }
    }
    config
}
