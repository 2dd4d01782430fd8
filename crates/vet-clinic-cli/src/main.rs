use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use vet_clinic_core::api::{Endpoint, HttpClinicApi};
use vet_clinic_core::config::ClientConfig;
use vet_clinic_core::screens::{EmployeeListScreen, PetHistoryScreen};

#[derive(Parser)]
#[command(name = "vet-clinic")]
#[command(about = "Veterinary clinic screens in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the clinic backend
    #[arg(long, env = "VET_CLINIC_API_URL")]
    api_url: String,

    /// Per-request timeout in seconds (0 disables it)
    #[arg(long, env = "VET_CLINIC_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", env = "LOG_LEVEL")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the employee table
    Employees,
    /// Show the medical history of a pet
    PetHistory {
        /// Pet identifier
        pet_id: String,
    },
    /// Print the resolved backend URLs
    Endpoints {
        /// Pet identifier used for the clinical record lookup
        #[arg(long, default_value = ":pet_id")]
        pet_id: String,
        /// Clinical record identifier used for the dependent lookups
        #[arg(long, default_value = ":record_id")]
        record_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.json_logs)?;

    let mut config = ClientConfig::new(&cli.api_url).context("invalid --api-url")?;
    if let Some(secs) = cli.timeout_secs.filter(|secs| *secs > 0) {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let api = Arc::new(HttpClinicApi::new(&config)?);
    info!(base_url = %api.base_url(), "vet-clinic v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Employees => run_employees(api).await,
        Commands::PetHistory { pet_id } => run_pet_history(api, &pet_id).await,
        Commands::Endpoints { pet_id, record_id } => {
            for line in endpoint_lines(&api, &pet_id, &record_id)? {
                println!("{}", line);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_employees(api: Arc<HttpClinicApi>) -> Result<ExitCode> {
    let mut screen = EmployeeListScreen::new(api);
    screen.load().await.context("employee list task panicked")?;

    println!("{}", screen.render());
    Ok(exit_code(screen.state().error()))
}

async fn run_pet_history(api: Arc<HttpClinicApi>, pet_id: &str) -> Result<ExitCode> {
    let mut screen = PetHistoryScreen::new(api);
    screen
        .show(pet_id)
        .await
        .context("pet history task panicked")?;

    println!("{}", screen.render());
    Ok(exit_code(screen.state().error()))
}

fn exit_code(failure: Option<&str>) -> ExitCode {
    match failure {
        Some(reason) => {
            error!(%reason, "load failed");
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}

/// One `name url` line per backend endpoint.
fn endpoint_lines(api: &HttpClinicApi, pet_id: &str, record_id: &str) -> Result<Vec<String>> {
    let endpoints = [
        Endpoint::ClinicalRecordByPet(pet_id.to_string()),
        Endpoint::PrescriptionsByRecord(record_id.to_string()),
        Endpoint::TreatmentsByRecord(record_id.to_string()),
        Endpoint::AdmissionsByRecord(record_id.to_string()),
        Endpoint::Employees,
    ];

    endpoints
        .iter()
        .map(|endpoint| -> Result<String> {
            Ok(format!("{:<16} {}", endpoint.name(), api.endpoint_url(endpoint)?))
        })
        .collect()
}

fn init_logging(level: &str, json: bool) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = if json {
        fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
