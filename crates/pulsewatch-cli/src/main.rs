mod monitor;
mod render;

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pulsewatch_agent::SearchAgent;

use crate::monitor::CycleSettings;

#[derive(Debug, Parser)]
#[command(name = "pulsewatch-cli")]
#[command(about = "Social media sentiment and topic monitor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one retrieval + analysis cycle and print the report
    Report {
        /// Topic or zone to monitor
        query: String,

        /// Maximum posts to request per retrieval
        #[arg(long)]
        max_results: Option<usize>,

        /// Number of topics to extract from the batch
        #[arg(long)]
        topics: Option<usize>,

        /// Emit the report as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
    /// Monitor continuously, one cycle per interval, until interrupted
    Monitor {
        /// Topic or zone to monitor
        query: String,

        /// Seconds between cycles
        #[arg(long)]
        interval: Option<u64>,

        /// Maximum posts to request per retrieval
        #[arg(long)]
        max_results: Option<usize>,

        /// Number of topics to extract from the batch
        #[arg(long)]
        topics: Option<usize>,

        /// Emit each report as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = pulsewatch_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let agent = SearchAgent::from_config(&config)?;

    match cli.command {
        Commands::Report {
            query,
            max_results,
            topics,
            json,
        } => {
            let settings = CycleSettings {
                query,
                max_results: max_results.unwrap_or(config.max_results),
                topic_count: topics.unwrap_or(config.topic_count),
                json,
            };
            let report = monitor::run_cycle(&agent, &settings).await;
            render::emit_report(&settings.query, &report, settings.json)?;
        }
        Commands::Monitor {
            query,
            interval,
            max_results,
            topics,
            json,
        } => {
            let settings = CycleSettings {
                query,
                max_results: max_results.unwrap_or(config.max_results),
                topic_count: topics.unwrap_or(config.topic_count),
                json,
            };
            let interval = Duration::from_secs(interval.unwrap_or(config.interval_secs));

            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
            tokio::spawn(async move {
                shutdown_signal().await;
                let _ = shutdown_tx.send(true);
            });

            monitor::run_monitor(&agent, &settings, interval, shutdown_rx).await?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, stopping after current cycle");
}
