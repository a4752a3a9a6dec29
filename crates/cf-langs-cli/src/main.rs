//! cf-langs — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use cf_langs_cli::commands;

#[derive(Parser)]
#[command(
    name = "cf-langs",
    about = "List Codeforces submission languages and their file extensions",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress the status line printed before fetching, and error messages.
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the language list from a submit page.
    Fetch {
        /// Submit page URL. Falls back to CF_LANGS_URL, then the Codeforces
        /// problemset submit page.
        url: Option<String>,

        /// Request timeout in milliseconds. Also reads CF_LANGS_TIMEOUT_MS.
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Print the built-in language table.
    List,

    /// Print the source-file extension for a language name.
    Ext {
        /// Display name, e.g. "GNU C++17 7.3.0".
        name: String,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout();

    let result = match cli.command {
        Commands::Fetch { url, timeout_ms } => {
            commands::fetch::run(&mut stdout, url.as_deref(), timeout_ms, cli.json, cli.quiet).await
        }
        Commands::List => commands::list::run(&mut stdout, cli.json),
        Commands::Ext { name } => commands::ext::run(&mut stdout, &name, cli.json),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cf-langs", &mut stdout);
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if cli.json {
            let _ = commands::output::write_json_error(&mut stdout, e);
        } else if !cli.quiet {
            eprintln!("  Error: {e:#}");
        }
        std::process::exit(1);
    }

    result
}
