//! Projtrack - project tracking API server

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use projtrack_core::config::{API_KEY_ENV, Config};
use projtrack_core::storage::Database;
use projtrack_server::{AppState, app};
use tracing::info;

#[derive(Parser)]
#[command(name = "projtrack")]
#[command(author, version, about = "Project tracking API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration directory (defaults to the platform config dir)
    #[arg(long, global = true, env = "PROJTRACK_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve(ServeArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Run health check
    Doctor,
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
    /// SQLite database file
    #[arg(long)]
    database: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("projtrack=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => cmd_serve(&config_dir, args).await,
        Commands::Config { action } => cmd_config(&config_dir, action, cli.quiet),
        Commands::Doctor => cmd_doctor(&config_dir, cli.quiet).await,
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

async fn cmd_serve(config_dir: &Path, args: ServeArgs) -> anyhow::Result<()> {
    let mut config = Config::load_from_dir(config_dir)?;
    config.apply_env_overrides()?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(database) = args.database {
        config.database.path = Some(database);
    }

    let state = AppState::from_config(&config).await?;
    info!(path = %state.database.path().display(), "Database opened");

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!(address = %listener.local_addr()?, "Server is running");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

fn cmd_config(config_dir: &Path, action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    let path = config_dir.join("config.toml");
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_from(&path)?;
            let value = config.get(&key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(&path)?;
            config.set(&key, &value)?;
            config.save_to(&path)?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load_from(&path)?;
            for (key, value) in config.list()? {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}

async fn cmd_doctor(config_dir: &Path, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("Projtrack Health Check");
        println!("======================");
        println!();
    }

    let mut all_ok = true;
    let path = config_dir.join("config.toml");

    let config = match Config::load_from(&path) {
        Ok(config) => {
            if !quiet {
                if path.exists() {
                    println!("[OK] Config file: {}", path.display());
                } else {
                    println!("[--] Config file: {} (using defaults)", path.display());
                }
            }
            config
        }
        Err(e) => {
            if !quiet {
                println!("[!!] Configuration: Error - {:#}", e);
            }
            anyhow::bail!("Configuration is invalid");
        }
    };

    // Check API key
    match config.summarizer.resolved_api_key() {
        Ok(Some(_)) => {
            if !quiet {
                let redacted = config.summarizer.redacted_api_key()?.unwrap_or_default();
                println!("[OK] API Key: Configured ({})", redacted);
            }
        }
        Ok(None) => {
            if !quiet {
                println!("[--] API Key: Not configured (project analysis disabled)");
                println!("     Set the {} environment variable", API_KEY_ENV);
            }
        }
        Err(e) => {
            all_ok = false;
            if !quiet {
                println!("[!!] API Key: Error - {}", e);
            }
        }
    }

    // Check database
    match Database::new(config.database.to_database_config()).await {
        Ok(db) => match db.health_check().await {
            Ok(()) => {
                if !quiet {
                    println!("[OK] Database: Connected");
                    println!("     Path: {}", db.path().display());
                    match db.migration_status().await {
                        Ok(status) => println!("[OK] Database: Schema v{}", status.current_version),
                        Err(e) => println!("[!!] Database: Migration check failed - {}", e),
                    }
                }
                db.close().await;
            }
            Err(e) => {
                all_ok = false;
                if !quiet {
                    println!("[!!] Database: Health check failed - {}", e);
                }
            }
        },
        Err(e) => {
            all_ok = false;
            if !quiet {
                println!("[!!] Database: Failed to initialize - {:#}", e);
            }
        }
    }

    // Summary
    if !quiet {
        println!();
        if all_ok {
            println!("All checks passed!");
        } else {
            println!("Some checks failed. See above for details.");
        }
    }

    Ok(())
}
