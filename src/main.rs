use anyhow::Result;
use clap::{Parser, Subcommand};
use nanobanana_studio::app::App;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "nanobanana-studio")]
#[command(about = "Generate and iteratively refine images with Gemini")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a single image from the built-in scene prompt
    Basic,
    /// Generate a 4K image with a 16:9 frame
    HighRes,
    /// Generate an infographic grounded with Google Search data
    Grounded,
    /// Refine a logo across three conversational turns
    Iterative {
        /// Startup name woven into the logo prompt.
        #[arg(long, default_value = "CloudFlow")]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nanobanana_studio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting nanobanana-studio");

    let args = CliArgs::parse();

    match App::new() {
        Ok(app) => {
            let result = match args.command {
                Command::Basic => app.run_basic().await,
                Command::HighRes => app.run_high_res().await,
                Command::Grounded => app.run_grounded().await,
                Command::Iterative { name } => app.run_iterative(&name).await,
            };

            match result {
                Ok(_) => {
                    info!("Generation completed successfully");
                    Ok(())
                }
                Err(e) => {
                    error!("Generation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
