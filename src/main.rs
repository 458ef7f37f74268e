//! agenthub - demo driver
//!
//! External wiring around the core: builds configs, constructs agents,
//! registers them with the orchestrator, submits one request, and prints
//! the aggregated outcome plus agent statuses.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use agenthub::{AgentConfig, ConfigFile, NoopAgent, Orchestrator, ResearchAgent};

#[derive(Parser)]
#[command(name = "agenthub", about = "Fan a research request out to registered agents")]
struct Args {
    /// Research query to dispatch
    #[arg(default_value = "artificial intelligence")]
    query: String,

    /// TOML file declaring additional agents
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "agenthub=debug"
    #[arg(long, default_value = "info")]
    log: String,
}

fn init_tracing(log_filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log)?;

    let orchestrator_config = AgentConfig::new("orchestrator", "Main orchestrator agent")?;
    let research_config =
        AgentConfig::new("research", "Research agent for information gathering")?;

    let mut orchestrator = Orchestrator::new(orchestrator_config);
    orchestrator.register(Box::new(ResearchAgent::new(research_config)));

    // Additional agents declared in a config file run as no-ops
    if let Some(path) = &args.config {
        let file = ConfigFile::load(path)?;
        for agent_config in file.agents {
            orchestrator.register(Box::new(NoopAgent::new(agent_config)));
        }
    }

    let request = json!({
        "query": args.query,
        "max_results": 5,
    });

    let outcome = orchestrator.process(&request).await?;

    println!("\nProcessing Results:");
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    println!("\nAgent Statuses:");
    for status in orchestrator.agent_statuses() {
        println!("{}", serde_json::to_string_pretty(&status)?);
    }

    Ok(())
}
