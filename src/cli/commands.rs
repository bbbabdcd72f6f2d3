use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::EngineConfig;
use crate::query::QueryService;
use crate::query::background::spawn_usage_statistics;
use crate::sessions::read_project_details;
use crate::usage::UsageScope;

#[derive(Parser)]
#[command(name = "ai-transcript-engine")]
#[command(version = "0.1.0")]
#[command(about = "Query locally stored AI-assistant conversation history", long_about = None)]
pub struct Cli {
    /// Data directory to read (defaults to ~/.claude)
    #[arg(long, global = true, value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full history overview: entries, project aggregates, global statistics
    History,
    /// Global statistics over the flat history log
    Stats,
    /// Case-insensitive substring search over history entries
    Search { query: String },
    /// Reconstructed sessions for a project path
    Project { path: String },
    /// Token usage and estimated cost, for everything or one project
    Usage {
        #[arg(long)]
        project: Option<String>,
    },
    /// Legacy per-conversation detail documents for a project path
    Details { path: String },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.claude_dir {
        Some(dir) => EngineConfig::new(dir.clone()),
        None => EngineConfig::from_home()?,
    };
    let service = QueryService::new(config);

    let payload = match &cli.command {
        Some(Commands::History) => service.handle("history", &HashMap::new()),
        Some(Commands::Stats) => service.handle("stats", &HashMap::new()),
        Some(Commands::Search { query }) => {
            let params = HashMap::from([("q".to_string(), query.clone())]);
            service.handle("search", &params)
        }
        Some(Commands::Project { path }) => {
            let params = HashMap::from([("path".to_string(), path.clone())]);
            service.handle("project", &params)
        }
        Some(Commands::Usage { project }) => {
            let scope = match project {
                Some(path) => UsageScope::Project(path.clone()),
                None => UsageScope::All,
            };
            let rx = spawn_usage_statistics(service.config().clone(), scope);
            rx.recv().context("Usage aggregation worker disconnected")?
        }
        Some(Commands::Details { path }) => read_project_details(service.config(), path),
        None => {
            println!("Use --help for usage information");
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
