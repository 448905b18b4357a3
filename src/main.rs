use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use log::info;

mod cli;

use cli::Cli;

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_LANG: &str = "en";

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytsum::config::Config::load().unwrap_or_default();

    // CLI flags take priority over config file values
    let bind = cli
        .bind
        .or(config.bind)
        .unwrap_or_else(|| DEFAULT_BIND.to_string());
    let lang = cli
        .lang
        .or(config.default_lang)
        .unwrap_or_else(|| DEFAULT_LANG.to_string());
    let model = cli
        .model
        .or(config.default_model)
        .unwrap_or_else(|| ytsum::summarize::DEFAULT_MODEL.to_string());

    // Missing API key is the one fatal configuration error
    let api_key = ytsum::config::load_api_key()?;

    if cli.verbose {
        let config_path = ytsum::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("Model: {model}\nPreferred language: {lang}");
    }

    let http = reqwest::Client::new();
    let gemini = ytsum::summarize::GeminiClient::new(http.clone(), api_key, model);

    let state = ytsum::web::AppState {
        http,
        gemini,
        preferred_langs: vec![lang],
    };

    let app = ytsum::web::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("Listening on {bind}");
    if cli.verbose {
        eprintln!("Listening on http://{bind}");
    }
    axum::serve(listener, app).await?;

    Ok(())
}
