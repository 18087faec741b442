use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use review_pulse::client::PulseClient;
use review_pulse::config::PulseConfig;
use review_pulse::models::AnalysisResponse;
use review_pulse::{api, scoring};

#[derive(Parser)]
#[command(name = "rpulse")]
#[command(about = "Sentiment scoring and dashboard for customer reviews")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port for HTTP API (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
    },
    /// Score a review and print the result
    Analyze {
        /// Review text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Score on a running server instead of locally
        #[arg(long)]
        remote: bool,
    },
    /// Check server status
    Status {
        /// Server API base URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the effective configuration
    Config,
}

/// Initialize tracing with output to stderr (for commands that print results) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "review_pulse=debug,review_pulse_core=info,tower_http=debug".into()),
    );

    if use_stderr {
        // Keep stdout clean for the command's own output
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: PulseConfig) -> anyhow::Result<()> {
    let addr = config.bind_address();
    tracing::info!("Starting Review Pulse server on {}", addr);

    let app = api::create_router(&config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Review Pulse server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn print_analysis(response: &AnalysisResponse, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    let analysis = &response.analysis;
    println!("{}", response.headline);
    println!("Feedback rating (on a scale of 1-5): {}", analysis.rating);
    println!("Emotion: {}", response.emotion);
    println!("Polarity: {:.3}", analysis.polarity);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    let config = PulseConfig::load();

    match cli.command {
        Some(Commands::Serve { port, host }) => {
            let mut config = config;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            serve(config).await?;
        }
        Some(Commands::Analyze { text, json, remote }) => {
            let text = text.join(" ");
            let response = if remote {
                PulseClient::from_env().analyze(&text).await?
            } else {
                scoring::SentimentScorer::with_options(config.scoring)
                    .analyze(&text)?
                    .into()
            };
            print_analysis(&response, json)?;
        }
        Some(Commands::Status { url }) => {
            let client = match url {
                Some(url) => PulseClient::new(url),
                None => PulseClient::from_env(),
            };
            println!("Checking Review Pulse server at {}...", client.base_url());

            match client.health().await {
                Ok(health) => {
                    println!("Server status: {}", health.status);
                    println!(
                        "Lexicons: negation {}, polarity {}",
                        health.negation_lexicon, health.polarity_lexicon
                    );
                    let dashboard = client.dashboard().await?;
                    println!(
                        "Reviews: {} ({} positive, {} negative, {} neutral)",
                        dashboard.reviews, dashboard.positive, dashboard.negative, dashboard.neutral
                    );
                    println!("Average polarity: {:.2}", dashboard.average_polarity);
                }
                Err(e) => {
                    println!("Server is not reachable: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Config) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        None => {
            // Default: start server
            serve(config).await?;
        }
    }

    Ok(())
}
