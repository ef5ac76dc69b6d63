use clap::{Parser, Subcommand, ValueEnum};
use radarr_kodi_domain::{CliOverrides, Config, LogFormat, RegistrationOutcome};
use radarr_kodi_jobs::{RegistrarJob, RegistrarState};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "radarr-kodi")]
#[command(version)]
#[command(about = "Registers the Radarr_Kodi custom-script notification with Radarr")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Radarr config.xml path
    #[arg(long, value_name = "FILE")]
    config_xml: Option<String>,

    /// Radarr base URL, e.g. http://localhost:7878
    #[arg(long, env = "RADARR_URL")]
    url: Option<String>,

    /// Radarr API key
    #[arg(long, env = "RADARR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Instance name Radarr must report before registering
    #[arg(long, env = "RADARR_INSTANCE_NAME")]
    instance_name: Option<String>,

    /// Path of the notification script
    #[arg(long, value_name = "PATH")]
    script_path: Option<String>,

    /// Seconds between readiness polls
    #[arg(long, value_name = "SECS")]
    poll_interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormatArg>,

    /// Exit as soon as registration finishes instead of waiting for a signal
    #[arg(long)]
    exit_when_done: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Wait for Radarr and register the notification (default)
    Register,
    /// Seed the script's default configuration and make it executable
    Provision,
}

#[derive(ValueEnum, Clone, Copy)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        config_xml: cli.config_xml.clone(),
        url: cli.url.clone(),
        api_key: cli.api_key.clone(),
        instance_name: cli.instance_name.clone(),
        script_path: cli.script_path.clone(),
        poll_interval_secs: cli.poll_interval,
        log_level: cli.log_level.clone(),
        log_format: cli.log_format.map(LogFormat::from),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting radarr-kodi v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = cli.config.clone().or_else(Config::get_config_path) {
        info!(path = %path, "Using configuration file");
    }

    match cli.command.unwrap_or(Command::Register) {
        Command::Provision => provision(&config).await,
        Command::Register => register(&config, cli.exit_when_done).await,
    }
}

async fn provision(config: &Config) -> anyhow::Result<ExitCode> {
    let report = di::UseCases::provision()
        .execute(&config.registration.script_path, &config.provision)
        .await
        .map_err(|e| {
            error!(error = %e, "Provisioning failed");
            anyhow::anyhow!(e)
        })?;

    info!(
        config_seeded = report.config_seeded,
        made_executable = report.made_executable,
        "Provisioning complete"
    );
    Ok(ExitCode::SUCCESS)
}

async fn register(config: &Config, exit_when_done: bool) -> anyhow::Result<ExitCode> {
    let resolved = di::UseCases::resolve_endpoint()
        .execute(&config.radarr)
        .await
        .map_err(|e| {
            error!(error = %e, "Could not resolve the Radarr endpoint");
            anyhow::anyhow!(e)
        })?;

    info!(
        source = ?resolved.source,
        instance_name = %resolved.instance_name,
        "Radarr endpoint resolved"
    );

    let adapters = di::Adapters::new(config, resolved.endpoint)?;
    let use_cases = di::UseCases::new(&adapters);

    let shutdown = CancellationToken::new();
    let registrar = Arc::new(
        RegistrarJob::new(
            use_cases.check_readiness,
            use_cases.find_existing,
            use_cases.submit,
            config.registration.to_entry(),
            resolved.instance_name,
        )
        .with_poll_interval(Duration::from_secs(config.poll.interval_secs))
        .with_cancellation(shutdown.clone()),
    );

    let mut handle = registrar.clone().start();
    let state = tokio::select! {
        state = &mut handle => state?,
        _ = bootstrap::shutdown_signal() => {
            shutdown.cancel();
            handle.await?
        }
    };

    let code = ExitCode::from(exit_status(&state));

    if waits_for_signal(&state, exit_when_done) {
        info!(state = %state, "Registration finished, waiting for shutdown signal");
        bootstrap::shutdown_signal().await;
    }

    info!("Shutdown complete");
    Ok(code)
}

/// 1 for a failed registration, 0 for success and for a clean cancel.
fn exit_status(state: &RegistrarState) -> u8 {
    match state.outcome() {
        Some(RegistrationOutcome::Failed { .. }) => 1,
        _ => 0,
    }
}

/// A finished registrar keeps the process up for the supervisor; a
/// cancelled one already consumed the signal.
fn waits_for_signal(state: &RegistrarState, exit_when_done: bool) -> bool {
    !exit_when_done && *state != RegistrarState::Cancelled
}
