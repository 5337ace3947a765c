use clap::{Parser, Subcommand};
use flexi_logger::{FileSpec, Logger};
use log::error;

use transit_graph::config::Config;
use transit_graph::core::{Graph, GraphError, GraphResult};
use transit_graph::services::algorithm::{
    ConnectionAdvisor, Connectivity, CycleDetection, Dijkstra, PathResult,
};
use transit_graph::storage::snapshot;

#[derive(Parser)]
#[clap(version = "0.1.0", about = "Query and edit an urban transit network")]
struct Cli {
    /// Path to a TOML config file
    #[clap(short, long)]
    config: Option<String>,

    /// Path to the network snapshot (overrides the config default)
    #[clap(short, long)]
    network: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Shortest travel time between two stations
    Route {
        #[clap(long)]
        from: String,
        #[clap(long)]
        to: String,
    },
    /// Check whether the network contains a directed cycle
    Cycles,
    /// Check whether every station can reach every other
    Connectivity,
    /// Suggest direct connections where the detour exceeds the budget
    Suggest {
        #[clap(long)]
        budget: f64,
    },
    /// Update the travel time of a route and save the network
    UpdateWeight {
        #[clap(long)]
        from: String,
        #[clap(long)]
        to: String,
        #[clap(long)]
        weight: f64,
    },
    /// Print the stations and routes of the network
    Show,
}

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> GraphResult<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let logger = Logger::try_with_str(&config.log_level)
        .map_err(|e| GraphError::Config(e.to_string()))?;
    let logger = if config.log_to_file {
        logger.log_to_file(FileSpec::default().directory(&config.log_dir))
    } else {
        logger
    };
    let _logger = logger
        .start()
        .map_err(|e| GraphError::Config(e.to_string()))?;

    let network_path = cli.network.unwrap_or(config.network_path);
    let mut graph = snapshot::load_json(&network_path)?;

    match cli.command {
        Command::Route { from, to } => {
            let origin = graph.find_station(&from)?.clone();
            let destination = graph.find_station(&to)?.clone();
            match Dijkstra::shortest_path(&graph, &origin, &destination)? {
                PathResult::Reached {
                    stations,
                    total_time,
                } => {
                    let stops: Vec<&str> = stations.iter().map(|s| s.name()).collect();
                    println!("{} (time {})", stops.join(" -> "), total_time);
                }
                PathResult::Unreachable => println!("no path from {} to {}", from, to),
            }
        }
        Command::Cycles => {
            if CycleDetection::has_cycle(&graph) {
                println!("the network contains at least one cycle");
            } else {
                println!("the network is acyclic");
            }
        }
        Command::Connectivity => {
            if Connectivity::is_strongly_connected(&graph) {
                println!("the network is strongly connected");
            } else {
                println!("the network is not strongly connected");
            }
        }
        Command::Suggest { budget } => {
            let suggestions = ConnectionAdvisor::suggest(&mut graph, budget)?;
            if suggestions.is_empty() {
                println!("no connections to suggest for budget {budget}");
            }
            for suggestion in suggestions {
                if suggestion.current_time.is_finite() {
                    println!(
                        "{} -> {} (currently {})",
                        suggestion.origin, suggestion.destination, suggestion.current_time
                    );
                } else {
                    println!(
                        "{} -> {} (currently unreachable)",
                        suggestion.origin, suggestion.destination
                    );
                }
            }
        }
        Command::UpdateWeight { from, to, weight } => {
            if graph.update_route_weight(&from, &to, weight)? {
                snapshot::save_json(&graph, &network_path)?;
                println!("updated {} -> {} to {}", from, to, weight);
            } else {
                println!("no route {} -> {}", from, to);
            }
        }
        Command::Show => {
            print_network(&graph);
        }
    }

    Ok(())
}

fn print_network(graph: &Graph) {
    println!(
        "{} station(s), {} route(s)",
        graph.station_count(),
        graph.route_count()
    );
    for station in graph.stations() {
        println!("{}", station);
        for route in graph.neighbors(station).into_iter().flatten() {
            println!("  -> {} ({})", route.destination(), route.weight());
        }
    }
}
