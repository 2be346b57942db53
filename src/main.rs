use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use edgegrid_sdk::appsec::{AppSec, CreateConfigurationCloneRequest, GetConfigurationCloneRequest};
use edgegrid_sdk::papi::{GetPropertyVersionHostnamesRequest, Papi};
use edgegrid_sdk::storage::{
    DeleteStorageGroupRequest, GetStorageGroupRequest, ListStorageGroupsRequest, Storage,
};
use edgegrid_sdk::{BearerToken, CallOptions, ClientConfig, Session};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Command-line client for edge platform REST APIs
#[derive(Parser, Debug)]
#[command(name = "edgegrid", version, about, long_about = None)]
struct Args {
    /// Config file (.json, .yaml or .yml); defaults to the user config dir
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL, overrides the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token used to sign requests
    #[arg(long)]
    token: Option<String>,

    /// Extra header for this call, as `Name: value` (repeatable)
    #[arg(long = "header", value_parser = parse_header)]
    headers: Vec<(HeaderName, HeaderValue)>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Security configuration versions
    #[command(subcommand)]
    ConfigClone(ConfigCloneCommand),
    /// Property version hostnames
    #[command(subcommand)]
    Hostnames(HostnamesCommand),
    /// NetStorage storage groups
    #[command(subcommand)]
    StorageGroup(StorageGroupCommand),
}

#[derive(Subcommand, Debug)]
enum ConfigCloneCommand {
    /// Show one configuration version
    Get {
        #[arg(long)]
        config_id: i64,
        #[arg(long)]
        version: i32,
    },
    /// Clone a configuration version
    Create {
        #[arg(long)]
        config_id: i64,
        #[arg(long)]
        from_version: i32,
        #[arg(long)]
        rule_update: bool,
    },
}

#[derive(ClapArgs, Debug)]
struct PropertyVersionArgs {
    #[arg(long)]
    property_id: String,
    #[arg(long)]
    version: i32,
    #[arg(long, default_value = "")]
    contract_id: String,
    #[arg(long, default_value = "")]
    group_id: String,
    #[arg(long)]
    validate_hostnames: bool,
}

#[derive(Subcommand, Debug)]
enum HostnamesCommand {
    /// List hostnames of a property version
    Get(PropertyVersionArgs),
}

#[derive(Subcommand, Debug)]
enum StorageGroupCommand {
    /// List storage groups
    List {
        #[arg(long)]
        purpose: Option<String>,
    },
    /// Show one storage group
    Get {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Delete a storage group
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got {raw:?}"))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| e.to_string())?;
    let value = HeaderValue::from_str(value.trim()).map_err(|e| e.to_string())?;
    Ok((name, value))
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing_level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("edgegrid started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("edgegrid").join("edgegrid.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".edgegrid").join("edgegrid.log");
    }
    PathBuf::from("edgegrid.log")
}

/// Resolve configuration (CLI > config file > defaults)
fn load_config(args: &Args) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ClientConfig::load_default()
            .context("Failed to load default config")?
            .unwrap_or_default(),
    };

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }

    if config.base_url.is_empty() {
        anyhow::bail!("No base URL configured. Pass --base-url or set base_url in the config file");
    }

    Ok(config)
}

fn print<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    let session = match &args.token {
        Some(token) => Session::with_signer(&config, BearerToken::new(token.clone())),
        None => Session::new(&config),
    }
    .context("Failed to create API session")?;

    let opts = CallOptions::from_headers(args.headers.iter().cloned().collect::<HeaderMap>());

    match args.command {
        Command::ConfigClone(ConfigCloneCommand::Get { config_id, version }) => {
            let params = GetConfigurationCloneRequest { config_id, version };
            let clone = AppSec::new(session)
                .get_configuration_clone(&params, &opts)
                .await?;
            print(&clone, args.output)
        }
        Command::ConfigClone(ConfigCloneCommand::Create {
            config_id,
            from_version,
            rule_update,
        }) => {
            let params = CreateConfigurationCloneRequest {
                config_id,
                create_from_version: from_version,
                rule_update,
            };
            let clone = AppSec::new(session)
                .create_configuration_clone(&params, &opts)
                .await?;
            print(&clone, args.output)
        }
        Command::Hostnames(HostnamesCommand::Get(property)) => {
            let params = GetPropertyVersionHostnamesRequest {
                property_id: property.property_id,
                property_version: property.version,
                contract_id: property.contract_id,
                group_id: property.group_id,
                validate_hostnames: property.validate_hostnames,
            };
            let hostnames = Papi::new(session)
                .get_property_version_hostnames(&params, &opts)
                .await?;
            print(&hostnames, args.output)
        }
        Command::StorageGroup(StorageGroupCommand::List { purpose }) => {
            let params = ListStorageGroupsRequest {
                storage_group_purpose: purpose,
            };
            let groups = Storage::new(session)
                .list_storage_groups(&params, &opts)
                .await?;
            print(&groups, args.output)
        }
        Command::StorageGroup(StorageGroupCommand::Get { id }) => {
            let params = GetStorageGroupRequest {
                storage_group_id: id,
            };
            let group = Storage::new(session).get_storage_group(&params, &opts).await?;
            print(&group, args.output)
        }
        Command::StorageGroup(StorageGroupCommand::Delete { id }) => {
            let params = DeleteStorageGroupRequest {
                storage_group_id: id,
            };
            let status = Storage::new(session)
                .delete_storage_group(&params, &opts)
                .await?;
            print(&status, args.output)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = setup_logging(args.log_level)?;

    let result = run(args).await;
    if let Err(e) = &result {
        tracing::error!("edgegrid failed: {:#}", e);
    }
    result
}
