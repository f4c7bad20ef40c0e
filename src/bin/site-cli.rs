use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use tour_site::canonical::{parse_query, Decision};
use tour_site::catalog::TourCatalog;
use tour_site::config::{load_or_default, ConfigError};
use tour_site::lifecycle::build_canonicalizer;
use tour_site::seo::render_sitemap;

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Management CLI for the tour site server", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a path (with optional query) is canonicalized
    Resolve {
        /// e.g. "/about-us.html" or "/?page=contact"
        target: String,
    },
    /// Print the sitemap for the configured catalog
    Sitemap,
    /// Validate the configuration file
    CheckConfig,
    /// Query a running server's health endpoint
    Status {
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { target } => {
            let config = load_or_default(cli.config.as_deref())?;
            let canonicalizer = build_canonicalizer(&config);

            let (path, query) = match target.split_once('?') {
                Some((path, query)) => (path, Some(query)),
                None => (target.as_str(), None),
            };

            match canonicalizer.canonicalize(path, &parse_query(query)) {
                Decision::PassThrough => println!("{target} -> pass through"),
                Decision::Redirect(r) => {
                    println!("{target} -> {} {:?} (rule {})", r.status().as_u16(), r.target, r.rule)
                }
            }
        }
        Commands::Sitemap => {
            let config = load_or_default(cli.config.as_deref())?;
            let catalog = TourCatalog::load_or_sample(
                config.site.tours_path.as_deref().map(std::path::Path::new),
            )?;
            print!("{}", render_sitemap(&config.site.base_url, &catalog.slugs()));
        }
        Commands::CheckConfig => match load_or_default(cli.config.as_deref()) {
            Ok(_) => println!("Configuration OK"),
            Err(ConfigError::Validation(errors)) => {
                eprintln!("Configuration has {} problem(s):", errors.len());
                for err in errors {
                    eprintln!("  - {err}");
                }
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Status { url } => {
            let res = reqwest::get(format!("{}/health", url.trim_end_matches('/'))).await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
