//! Emergency route planner.

use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::{Parser, Subcommand};
use log::info;

use eroute_core::{CollapsePolicy, RoadEntry, RoadRequest, RoutePlanner, RouteRequest};

use crate::config::Network;

mod config;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();
    let planner = load_planner(&opts)?;

    match opts.cmd {
        Command::Roads => print!("{}", render_roads(planner.roads())),
        Command::Route { from, to, json } => {
            let result = planner.find_route(&RouteRequest::new(&from, &to))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result);
            }
        }
        Command::Snapshot { last_registered } => {
            let policy = if last_registered { CollapsePolicy::LastRegistered } else { CollapsePolicy::FirstRegistered };
            println!("{}", serde_json::to_string_pretty(&planner.snapshot(policy))?);
        }
    }

    Ok(())
}

/// Emergency route planner: least-cost routes by distance, time and risk.
#[derive(Parser)]
#[command(version, author = "The eroute development team")]
struct Opts {
    /// Network file path (default `./network.json`)
    #[arg(long = "network")]
    network: Option<PathBuf>,

    /// Extra road as `FROM,TO,DISTANCE,TIME,RISK`, may be repeated
    #[arg(long = "road")]
    roads: Vec<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List added roads with their composite cost
    Roads,

    /// Find the optimal route between two locations
    Route {
        /// Start location
        #[arg(long)]
        from: String,

        /// Destination
        #[arg(long)]
        to: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print nodes and edges as JSON, one edge per pair of locations
    Snapshot {
        /// Represent parallel roads by the last one added instead of the first
        #[arg(long)]
        last_registered: bool,
    },
}

fn load_planner(opts: &Opts) -> Result<RoutePlanner, Error> {
    let network = Network::load(opts.network.as_deref())?;
    let mut planner = RoutePlanner::new();

    for entry in network.entries()? {
        planner.insert_road(entry);
    }

    for raw in &opts.roads {
        let req: RoadRequest = raw.parse().with_context(|| format!("bad road [{}]", raw))?;
        planner.add_road(&req).with_context(|| format!("bad road [{}]", raw))?;
    }

    let graph = planner.graph();
    info!("network ready: {} locations, {} roads", graph.node_count(), graph.edge_count());
    Ok(planner)
}

fn render_roads(roads: &[RoadEntry]) -> String {
    roads.iter().map(|road| format!("{}\n", road)).collect()
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use eroute_core::{RoadRequest, RoutePlanner};

    use super::{load_planner, render_roads, Command, Opts};

    #[test]
    fn test_render_roads() {
        let mut planner = RoutePlanner::new();
        planner.add_road(&RoadRequest::new("A", "B", "10", "10", "1")).expect("valid");
        planner.add_road(&RoadRequest::new("B", "C", "5", "0", "1")).expect("valid");
        assert_eq!(
            render_roads(planner.roads()),
            "A ↔ B | Cost: 20.00 (D:10.0, T:10.0, R:1.0)\nB ↔ C | Cost: 10.00 (D:5.0, T:0.0, R:1.0)\n"
        );
        assert_eq!(render_roads(&[]), "");
    }

    #[test]
    fn test_parse_args() {
        let opts = Opts::try_parse_from(&["eroute", "--road", "A,B,1,1,1", "--road", "B,C,2,2,2", "route", "--from", "A", "--to", "C"])
            .expect("valid args");
        assert_eq!(opts.network, None);
        assert_eq!(opts.roads, vec!["A,B,1,1,1", "B,C,2,2,2"]);
        match opts.cmd {
            Command::Route { from, to, json } => {
                assert_eq!((from.as_str(), to.as_str(), json), ("A", "C", false));
            }
            _ => panic!("route command expected"),
        }

        assert!(Opts::try_parse_from(&["eroute", "route", "--from", "A"]).is_err());
        assert!(Opts::try_parse_from(&["eroute"]).is_err());
    }

    #[test]
    fn test_load_planner_with_inline_roads() {
        let opts = Opts::try_parse_from(&[
            "eroute",
            "--network",
            "./definitely/missing/network.json",
            "roads",
        ])
        .expect("valid args");
        assert!(load_planner(&opts).is_err());

        let mut opts = Opts::try_parse_from(&["eroute", "--road", "A,B,10,10,1", "--road", "B,C,5,0,1", "roads"]).expect("valid args");
        opts.network = Some("./definitely/missing/network.json".into());
        assert!(load_planner(&opts).is_err());

        opts.network = None;
        let planner = load_planner(&opts).expect("valid roads");
        assert_eq!(planner.roads().len(), 2);

        opts.roads.push("A,C,oops,0,0".to_string());
        let err = load_planner(&opts).err().expect("invalid road");
        assert_eq!(err.to_string(), "bad road [A,C,oops,0,0]");
    }
}
