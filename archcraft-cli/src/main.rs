//! # archcraft CLI
//!
//! Interactive session with the architect agent. Every query and its answer
//! (or error) is appended to `Results.md` next to the executable.
//!
//! Usage:
//!   archcraft
//!
//! Requires `OPENAI_API_KEY`, either in the environment or in an `Env.env`
//! file. Set `RUST_LOG=debug` for diagnostics on stderr.

use archcraft_agent::{AgentDefinition, EnvConfig, OpenAIRunner};
use archcraft_error::{Error, Result};
use archcraft_session::{EditorReader, Session, Transcript};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "archcraft")]
#[command(author, version, about = "archcraft - interactive software architect agent")]
struct Cli {}

fn init_tracing() {
    // stderr only, so answers on stdout stay clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run_session(env: EnvConfig) -> Result<()> {
    let agent = AgentDefinition::architect();
    let runner = OpenAIRunner::new(env.provider_config())?;
    let reader = EditorReader::new()?;
    let transcript = Transcript::new(&env.transcript_path);

    let mut session = Session::new(&agent, runner, reader, std::io::stdout(), transcript);
    let summary = session.run().await?;

    if summary.transcript_failures > 0 {
        eprintln!(
            "{} of {} queries could not be written to {}",
            summary.transcript_failures,
            summary.queries,
            env.transcript_path.display()
        );
    }
    Ok(())
}

/// The line printed to stderr when the process has to stop
fn failure_message(e: &Error) -> String {
    if e.kind().is_configuration() {
        format!("Configuration error: {}", e.message())
    } else {
        format!("Error: {}", e)
    }
}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();
    init_tracing();

    // Configuration is checked before anything touches the terminal
    let result = match EnvConfig::load() {
        Ok(env) => {
            info!(config = ?env, "configuration loaded");
            run_session(env).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("{}", failure_message(&e));
        std::process::exit(1);
    }
}
