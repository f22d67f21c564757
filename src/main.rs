use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scootwatch::config::Config;
use scootwatch::media::{MediaItem, ResultSummary};
use scootwatch::ui::{landing, upload_page};
use scootwatch::upload::{HttpBackend, Submission, UploadSession};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Send street photos and videos to the e-scooter detector and get the
/// annotated results back.
#[derive(Parser, Debug)]
#[command(name = "scootwatch", version)]
#[command(about = "🛴 Upload media to the e-scooter detection backend and browse the results")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. http://127.0.0.1:8080
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Directory downloads are saved to
    #[arg(long, global = true)]
    download_dir: Option<String>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload files without the interactive pages and save the archive
    Upload {
        /// Images (png, jpg) or videos (mp4); directories add their files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Save the archive right away instead of listing its contents first
        #[arg(long)]
        no_preview: bool,

        /// Print the result listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config {
        /// Print the JSON schema of the config file instead
        #[arg(long)]
        schema: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;

    match cli.command {
        None => {
            if landing::run()? {
                upload_page::run(&config).await?;
            }
            Ok(())
        }
        Some(Command::Upload {
            files,
            no_preview,
            json,
        }) => {
            let config = Config {
                preview_results: config.preview_results && !no_preview,
                ..config
            };
            upload(&config, &files, json).await
        }
        Some(Command::Config { schema }) => {
            if schema {
                println!("{}", serde_json::to_string_pretty(&Config::json_schema())?);
            } else {
                print!("{}", config.to_toml()?);
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    if let Some(backend) = &cli.backend {
        config.backend_url = backend.clone();
    }
    if let Some(dir) = &cli.download_dir {
        config.download_dir = dir.clone();
    }
    config.validate()?;
    Ok(config)
}

async fn upload(config: &Config, paths: &[PathBuf], json: bool) -> Result<()> {
    let files = upload_page::read_paths(paths).await;
    let (files, skipped): (Vec<_>, Vec<_>) = files
        .into_iter()
        .partition(|f| scootwatch::media::extract::is_accepted(f.mime_type()));
    for file in &skipped {
        eprintln!("Пропущено (непідтримуваний формат): {}", file.name);
    }

    let backend = HttpBackend::new(config).context("Failed to create HTTP client")?;
    let mut session = UploadSession::new(backend, config);

    let submission = match session.submit(&files).await {
        Ok(submission) => submission,
        Err(e) => {
            let notice = e.notice();
            return Err(anyhow::Error::new(e).context(notice));
        }
    };

    match submission {
        Submission::Saved { path, results } => {
            info!(results, "Archive saved without preview");
            println!("{}", path.display());
        }
        Submission::Preview { .. } => {
            let summaries: Vec<ResultSummary> =
                session.results().items().iter().map(ResultSummary::from).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for (i, s) in summaries.iter().enumerate() {
                    println!("{:>3}. {} ({}, {} B)", i + 1, s.name, s.mime_type, s.size);
                }
            }
            let path = session
                .download_original()
                .await
                .context("Failed to save the archive")?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
