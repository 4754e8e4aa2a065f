use std::sync::Arc;

use clap::{Parser, Subcommand};

use apkdrop::config::{self, AppState, Profile};
use apkdrop::logger;
use apkdrop::server::{self, SignalHandler};
use apkdrop::upload::{self, UploadReport};

/// Serve a locally built APK over HTTP, or upload it to a public file host
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Config file (TOML, extension optional; missing file means defaults)
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the APK and an information page until interrupted
    Serve,
    /// Upload the APK to the first file host that accepts it
    Upload {
        /// Backend set to try, overriding `upload.profile`
        #[arg(short, long, value_enum)]
        profile: Option<Profile>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::Config::load_from(&cli.config)?;
    logger::init(&cfg.logging)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    match cli.command {
        Command::Serve => runtime.block_on(serve(cfg)),
        Command::Upload { profile } => runtime.block_on(run_upload(cfg, profile)),
    }
}

async fn serve(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;
    let state = Arc::new(AppState::new(&cfg));

    let size = if state.artifact.exists().await {
        state.artifact.size().await.ok()
    } else {
        None
    };
    logger::log_server_start(&listener.local_addr()?, &cfg, &state.download_path(), size);

    let signals = Arc::new(SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    // Connections run on local tasks
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(
            listener,
            state,
            Arc::clone(&signals.shutdown),
        ))
        .await;
    Ok(())
}

/// Exit status is 0 whether a backend succeeded or manual steps were printed
async fn run_upload(
    cfg: config::Config,
    profile: Option<Profile>,
) -> Result<(), Box<dyn std::error::Error>> {
    match upload::upload_artifact(&cfg, profile).await? {
        UploadReport::Uploaded(outcome) => {
            logger::log_info(&format!("Uploaded via {}", outcome.backend));
        }
        UploadReport::Manual(_) => {
            logger::log_warning("Automatic upload exhausted; follow the manual steps above");
        }
    }
    Ok(())
}
