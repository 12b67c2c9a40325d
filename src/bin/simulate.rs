//! Balance simulator CLI.
//!
//! Plays randomized sessions against the game engine and reports aggregate
//! progression statistics.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 100 runs
//!   cargo run --bin simulate -- -n 10 -a 500    # 10 short runs
//!   cargo run --bin simulate -- --seed 42       # Reproducible batch

use greenvale::catalog::Catalog;
use greenvale::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("Greenvale Balance Simulator");
    println!();
    println!("Configuration:");
    println!("  Runs:     {}", config.num_runs);
    println!("  Actions:  {}", config.actions_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:     {seed}");
    }
    println!();
    println!("Running simulation...");
    println!();

    let catalog = Catalog::standard();
    let report = run_simulation(&catalog, &config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        println!("{}", report.to_json());
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-a" | "--actions" => {
                if i + 1 < args.len() {
                    config.actions_per_run = args[i + 1].parse().unwrap_or(2_000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 1;
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Greenvale Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of simulated players (default: 100)");
    println!("    -a, --actions <A>    Actions per player (default: 2000)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    -v, --verbose        Per-run output");
    println!("    --quick              Quick smoke batch (10 runs x 500 actions)");
    println!("    --json               Also print the JSON report");
    println!("    -h, --help           Show this help");
}
