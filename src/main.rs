use anyhow::Result;
use clap::Parser;
use cv_portfolio::cli::{self, Cli, Command};
use cv_portfolio::config::{AppConfig, LogFormat};
use cv_portfolio::core::CvQueryService;
use cv_portfolio::start_web_server;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    init_tracing(&config);

    info!("Environment: {}", config.environment);
    match &config.source {
        Some(path) => info!(
            "Loaded {} configuration from {}",
            config.environment,
            path.display()
        ),
        None => info!("No config file, using defaults and environment"),
    }

    // Fail before binding anything if the dataset is malformed
    let store = cli::load_store(&config).inspect_err(|e| error!("Invalid CV dataset: {:#}", e))?;
    let cv = CvQueryService::from(store);

    match cli.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => start_web_server(&config, cv).await,
        Command::Check => {
            println!("{}", cli::check_report(&cv));
            Ok(())
        }
        Command::Show { resource, format } => {
            println!("{}", cli::show(&cv, resource, format)?);
            Ok(())
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    // Logs go to stderr so `show` output stays pipeable
    match config.log_format {
        LogFormat::Json => Registry::default()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .with(filter)
            .init(),
        LogFormat::Pretty => Registry::default()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }
}
