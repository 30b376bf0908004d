//! MITM honeypot configuration CLI
//!
//! Entry point for the `mitm-config` command-line tool.

use clap::{Parser, Subcommand};
use mitm_config::config::{lookup_path, profile_tree, PROFILE_NAMES};
use mitm_config::ResolvedConfig;
use serde_json::Value;
use std::process;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "mitm-config")]
#[command(about = "Resolve per-instance MITM honeypot configuration", version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the effective configuration and print it
    Resolve {
        /// Named per-instance profile to layer over the defaults
        #[arg(long, short = 'p')]
        profile: Option<String>,

        /// Output as a flat path listing instead of JSON
        #[arg(long)]
        human: bool,

        /// Include layer provenance in the output
        #[arg(long)]
        sources: bool,

        /// Raw override tokens, e.g. --debug=false --server.listenPort 6013 (after --)
        #[arg(last = true)]
        overrides: Vec<String>,
    },

    /// List the compiled-in per-instance profiles
    Profiles {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Wire the verbose flag to the tracing log level. RUST_LOG in the
    // environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Resolve {
            profile,
            human,
            sources,
            overrides,
        } => {
            run_resolve(profile.as_deref(), human, sources, &overrides);
        }
        Commands::Profiles { json } => {
            run_profiles(json);
        }
    }
}

fn run_resolve(profile: Option<&str>, human: bool, sources: bool, overrides: &[String]) {
    let resolved = match ResolvedConfig::resolve(profile, overrides) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error resolving configuration: {}", e);
            process::exit(1);
        }
    };

    if human {
        print_flat(resolved.tree(), "");
        if sources {
            println!();
            for source in resolved.sources() {
                match &source.profile {
                    Some(name) => println!("layer: {} ({})", source.origin, name),
                    None => println!("layer: {}", source.origin),
                }
            }
        }
        return;
    }

    let rendered = if sources {
        resolved.to_json()
    } else {
        serde_json::to_string_pretty(resolved.tree())
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

/// Print a tree as `dotted.path = value` lines, leaves only.
fn print_flat(tree: &Value, prefix: &str) {
    match tree {
        Value::Object(map) => {
            for (key, value) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                print_flat(value, &path);
            }
        }
        leaf => println!("{} = {}", prefix, leaf),
    }
}

fn run_profiles(json_output: bool) {
    let profiles: Vec<(&str, Value)> = PROFILE_NAMES
        .iter()
        .filter_map(|name| profile_tree(name).map(|tree| (*name, tree)))
        .collect();

    if json_output {
        let output: Vec<Value> = profiles
            .iter()
            .map(|(name, tree)| {
                serde_json::json!({
                    "name": name,
                    "containerIP": lookup_path(tree, "container.ipAddress"),
                    "containerName": lookup_path(tree, "container.name"),
                    "listenPort": lookup_path(tree, "server.listenPort"),
                    "fixedAttempts": lookup_path(tree, "autoAccess.barrier.fixed.attempts"),
                })
            })
            .collect();

        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("Compiled-in profiles ({} total):\n", profiles.len());

        for (name, tree) in &profiles {
            let container = lookup_path(tree, "container.ipAddress")
                .and_then(|v| v.as_str())
                .unwrap_or("?");
            let container_name = lookup_path(tree, "container.name")
                .and_then(|v| v.as_str())
                .unwrap_or("?");
            let port = lookup_path(tree, "server.listenPort")
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            let attempts = lookup_path(tree, "autoAccess.barrier.fixed.attempts")
                .and_then(|v| v.as_u64())
                .unwrap_or(0);

            println!("  {}", name);
            println!("    Container: {} ({})", container, container_name);
            println!("    Listen port: {}", port);
            println!("    Fixed barrier attempts: {}", attempts);
            println!();
        }
    }
}
