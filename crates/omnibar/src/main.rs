use anyhow::Context;
use clap::{Parser, Subcommand};
use omnibar_engine::cli::{self, FileErrorMode, FileOptions, OutputHandlers, ReplOptions};
use omnibar_engine::config::{ConfigLoader, OmnibarConfig};
use omnibar_engine::formatter::{OutputStyle, format_actions};
use omnibar_engine::nlu::{NluError, WitClient};
use omnibar_engine::pipeline::Pipeline;
use omnibar_engine::resolution::ResolutionEngine;
use omnibar_engine::server::ApiServer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "omnibar", version, about = "Natural language browser commands")]
struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Config file (defaults to ./omnibar.yaml, then ~/.omnibar/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Read sentences interactively (default)
    Repl,
    /// Serve GET /api/{message} over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Resolve a single sentence
    Resolve {
        #[arg(required = true)]
        sentence: Vec<String>,
    },
    /// Resolve every sentence in a file, one per line
    Run {
        path: String,
        /// Continue after a failing line
        #[arg(long)]
        keep_going: bool,
    },
    /// Resolve a saved NLU response without calling the NLU service
    Replay { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load_from(path)
            .await
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigLoader::load_default().await?,
    };
    let style = OutputStyle::from_pretty(args.pretty || config.output.pretty);
    let engine = ResolutionEngine::new(config.site_table());

    let output = OutputHandlers {
        out: |msg| println!("{}", msg),
        err: |msg| eprintln!("{}", msg),
    };

    match args.mode.unwrap_or(Mode::Repl) {
        Mode::Replay { path } => {
            let result = cli::replay_file(&engine, &path, style)
                .await
                .map_err(|e| anyhow::anyhow!("replaying {}: {}", path.display(), e))?;
            (output.out)(&result);
        }
        Mode::Resolve { sentence } => {
            let pipeline = build_pipeline(&config, engine)?;
            let actions = pipeline.resolve(&sentence.join(" ")).await?;
            (output.out)(&format_actions(actions.as_slice(), style)?);
        }
        Mode::Run { path, keep_going } => {
            let pipeline = build_pipeline(&config, engine)?;
            cli::run_file(
                &pipeline,
                output,
                &path,
                FileOptions {
                    stop_on_error: !keep_going,
                    error_mode: FileErrorMode::WithLine,
                    style,
                },
            )
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        }
        Mode::Serve { host, port } => {
            let pipeline = Arc::new(build_pipeline(&config, engine)?);
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let listener = ApiServer::bind(&host, port).await?;
            ApiServer::new(pipeline, style).serve(listener).await?;
        }
        Mode::Repl => {
            let pipeline = build_pipeline(&config, engine)?;
            let repl_options = ReplOptions {
                banner_lines: &[
                    "Enter a browser command (e.g., 'open two new tabs', 'go to youtube').",
                    "Type 'exit' or 'quit' to close.",
                ],
                prompt: "Enter command: ",
                exit_commands: &["exit", "quit"],
                handle_ctrl_c: true,
                ctrl_c_message: Some("Interrupted."),
                style,
            };
            cli::run_repl(&pipeline, output, repl_options)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
        }
    }

    Ok(())
}

fn build_pipeline(config: &OmnibarConfig, engine: ResolutionEngine) -> anyhow::Result<Pipeline> {
    let token = config
        .nlu
        .resolve_token()?
        .ok_or(NluError::MissingToken)
        .context("set OMNIBAR_WIT_TOKEN, nlu.access_token or nlu.token_file")?;
    let client = WitClient::new(&config.nlu, token)?;
    info!("Using NLU endpoint {}", client.endpoint());
    Ok(Pipeline::with_engine(client, engine))
}
