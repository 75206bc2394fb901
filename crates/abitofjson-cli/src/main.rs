use abitofjson_core::{
    AppConfig, ConfigLoader, HttpJsonSource, SomethingScreen, SomethingTask, WriterTextView,
};
use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[clap(
    name = "abitofjson",
    author,
    version = "0.1.0",
    about = "Fetch a JSON array and display the first `something` entry"
)]
struct Cli {
    #[clap(long, short, help = "YAML configuration file")]
    config: Option<PathBuf>,

    #[clap(long, short, help = "URL to query (overrides config and ABITOFJSON_REQUEST_URL)")]
    url: Option<String>,

    #[clap(long, help = "Connect timeout in milliseconds")]
    connect_timeout_ms: Option<u64>,

    #[clap(long, help = "Read timeout in milliseconds")]
    read_timeout_ms: Option<u64>,

    #[clap(long, short, help = "Log level (overrides config, defaults to info)")]
    log_level: Option<String>,
}

impl Cli {
    /// Layer command-line flags over the loaded configuration.
    fn apply_to(&self, config: &mut AppConfig) {
        if let Some(url) = &self.url {
            config.request_url = url.clone();
        }
        if let Some(ms) = self.connect_timeout_ms {
            config.http.connect_timeout_ms = ms;
        }
        if let Some(ms) = self.read_timeout_ms {
            config.http.read_timeout_ms = ms;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

async fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::from_file(path).await?,
        None => ConfigLoader::from_env()?,
    };
    cli.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli).await?;

    let log_level_filter = config.logging.level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    log::debug!("Request URL: '{}'", config.request_url);

    let source = HttpJsonSource::from_config(&config.http)?;
    let task = SomethingTask::new(Arc::new(source), config.request_url.clone());

    let mut screen = SomethingScreen::new(WriterTextView::new(std::io::stdout()));
    screen.load(task).await;

    Ok(())
}
