use std::process::ExitCode;

use subway_path::domain::StationId;
use subway_path::network::InMemoryNetwork;
use subway_path::path::{PathConfig, PathService, TRAVERSAL_ENV};
use tracing::error;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: subway-path <network.json> <source-id> <target-id>";

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [snapshot, source, target] = args.as_slice() else {
        eprintln!("{USAGE}");
        eprintln!();
        eprintln!("Environment:");
        eprintln!("  {TRAVERSAL_ENV}  bidirectional|both (default), up-to-down|directed");
        eprintln!("  RUST_LOG          log filter (default: info)");
        return ExitCode::from(2);
    };

    let (Some(source), Some(target)) = (parse_id(source), parse_id(target)) else {
        eprintln!("station ids must be non-negative integers");
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let config = match PathConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::from(2);
        }
    };

    let network = match InMemoryNetwork::load(snapshot) {
        Ok(network) => network,
        Err(e) => {
            error!(error = %e, "Failed to load network");
            return ExitCode::FAILURE;
        }
    };

    let service = PathService::from_network(network, config);
    match service.find_shortest_path(source, target) {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "Failed to serialize response");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("[{}] {e}", e.code());
            ExitCode::FAILURE
        }
    }
}

fn parse_id(raw: &str) -> Option<StationId> {
    raw.trim().parse::<u64>().ok().map(StationId::new)
}
