//! NestSense CLI - serve the scoring API or run one-shot scoring offline
//!
//! Commands:
//! - serve: Run the HTTP scoring service
//! - score: Calculate an addiction risk score from a factors JSON file
//! - analyze: Analyze a text (or array of texts) for toxicity

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use actix_web::{web, App, HttpServer};
use nestsense::http::{self, ServiceMeta};
use nestsense::types::UsageFactors;
use nestsense::{AddictionScorer, EngineError, ToxicityDetector, ENGINE_VERSION, SERVICE_NAME};

/// NestSense - scoring service for child digital wellbeing
#[derive(Parser)]
#[command(name = "nestsense")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Addiction risk scoring and cyberbullying detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP scoring service
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Bind port
        #[arg(long, default_value = "8000")]
        port: u16,
    },

    /// Calculate an addiction risk score from a factors JSON file
    Score {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Analyze a JSON string (single text) or array of strings (batch)
    Analyze {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[actix_web::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Serve { host, port } => serve(host, port).await,
        Commands::Score { input } => score(&input),
        Commands::Analyze { input } => analyze(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let detector = web::Data::new(ToxicityDetector::new()?);
    let meta = web::Data::new(ServiceMeta::new());

    tracing::info!(%host, port, "starting {} v{}", SERVICE_NAME, ENGINE_VERSION);

    HttpServer::new(move || {
        App::new()
            .app_data(detector.clone())
            .app_data(meta.clone())
            .configure(http::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}

fn score(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let factors: UsageFactors =
        serde_json::from_str(&read_input(input)?).map_err(EngineError::from)?;
    let assessment = AddictionScorer::calculate_score(&factors);

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}

fn analyze(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let detector = ToxicityDetector::new()?;
    let value: serde_json::Value =
        serde_json::from_str(&read_input(input)?).map_err(EngineError::from)?;

    let output = match value {
        serde_json::Value::String(text) => serde_json::to_string_pretty(&detector.analyze_text(&text))?,
        other => {
            let texts: Vec<String> = serde_json::from_value(other).map_err(EngineError::from)?;
            serde_json::to_string_pretty(&detector.analyze_batch(&texts))?
        }
    };

    println!("{output}");
    Ok(())
}

fn read_input(path: &PathBuf) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}
