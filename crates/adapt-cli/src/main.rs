use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use adapt::assistant::Assistant;
use adapt::key_manager::GEMINI_API_KEY;
use adapt::providers::configs::{GeminiProviderConfig, GEMINI_MODEL};
use adapt::providers::gemini::GeminiProvider;

mod commands;
mod history_file;
mod render;

use commands::chat::handle_chat;
use commands::configure::handle_configure;
use commands::history::handle_history;
use commands::interpret::handle_interpret;
use commands::transform::handle_transform;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Gemini API key (falls back to the system keyring when unset)
    #[arg(long, global = true, env = GEMINI_API_KEY, hide_env_values = true)]
    api_key: Option<String>,

    /// Model to use
    #[arg(short, long, global = true, default_value = GEMINI_MODEL)]
    model: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask the code assistant questions in an interactive session
    Chat,

    /// Modernize HTML and CSS files and show the rewritten artifacts
    Transform {
        /// HTML file to transform
        #[arg(long)]
        html: Option<PathBuf>,

        /// CSS file to transform
        #[arg(long)]
        css: Option<PathBuf>,
    },

    /// Interpret a saved model reply without calling the model
    Interpret {
        /// Split the reply into HTML and CSS sections instead of chat blocks
        #[arg(long)]
        transform: bool,

        /// File holding the reply (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// List previous transformations
    History {
        /// Print the transformation with this number
        #[arg(long)]
        show: Option<usize>,
    },

    /// Store the Gemini API key in the system keyring
    Configure,
}

fn build_assistant(cli: &Cli) -> Result<Assistant> {
    let config = match &cli.api_key {
        Some(api_key) => GeminiProviderConfig::new(api_key.clone()),
        None => GeminiProviderConfig::from_env()?,
    }
    .with_model(cli.model.clone());

    Ok(Assistant::new(Box::new(GeminiProvider::new(config)?)))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Chat => handle_chat(build_assistant(&cli)?).await,
        Command::Transform { html, css } => {
            handle_transform(build_assistant(&cli)?, html.as_deref(), css.as_deref()).await
        }
        Command::Interpret { transform, file } => handle_interpret(*transform, file.as_deref()),
        Command::History { show } => handle_history(*show),
        Command::Configure => handle_configure(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_api_key_reads_environment() {
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "api_key")
            .unwrap();
        assert_eq!(arg.get_env(), Some(OsStr::new(GEMINI_API_KEY)));
    }

    #[test]
    fn test_parse_transform() {
        let cli = Cli::try_parse_from([
            "adapt",
            "--api-key",
            "k",
            "transform",
            "--html",
            "page.html",
        ])
        .unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(cli.model, GEMINI_MODEL);
        match cli.command {
            Command::Transform { html, css } => {
                assert_eq!(html, Some(PathBuf::from("page.html")));
                assert_eq!(css, None);
            }
            _ => panic!("Expected transform command"),
        }
    }
}
