use clap::Parser;
use czech_flashcards::utils::config::{LogFormat, LoggingConfig};
use czech_flashcards::utils::API_KEY_ENV;
use czech_flashcards::{build_translator, run, AppConfig, CliArgs, RunSettings};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    let config = match AppConfig::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: cannot initialise logging: {}", e);
    }

    let settings = match RunSettings::resolve(&args, std::env::var(API_KEY_ENV).ok(), &config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };
    tracing::debug!(?settings, "Resolved settings");

    let translator = match build_translator(&settings) {
        Ok(translator) => translator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    match run(&settings, translator).await {
        Ok(summary) => {
            print!("{}", summary);
            ExitCode::from(summary.exit_code())
        }
        Err(e) => {
            tracing::error!(error = %e, "Run aborted");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(format!("czech_flashcards={}", logging.level))
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
    }
    Ok(())
}
